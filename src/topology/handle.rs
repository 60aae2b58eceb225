//! Typed, generation-checked handles for mesh records.
//!
//! Every vertex, edge and face is addressed by a small `Copy` handle made of
//! a slot index into its [`NodePool`](crate::topology::pool::NodePool) and
//! the generation that slot had when the record was allocated. Freeing a
//! slot bumps its generation, so a handle that outlives its record is
//! rejected instead of silently reading whatever record reuses the slot.
//!
//! This module provides:
//! - [`RawHandle`], the untyped `(index, generation)` pair.
//! - [`VertexId`], [`EdgeId`], [`FaceId`]: typed wrappers so a face handle
//!   can never be passed where an edge is expected.
//! - The [`PoolHandle`] trait tying a typed handle to its [`RecordKind`].

use std::fmt;
use std::hash::Hash;

use crate::mesh_error::RecordKind;

/// Untyped slot handle: index plus generation.
///
/// # Memory layout
/// Two `u32`s, so every typed handle is exactly 8 bytes and `Copy`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct RawHandle {
    index: u32,
    generation: u32,
}

impl RawHandle {
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the owning pool.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.index, self.generation)
    }
}

/// A typed handle stored in a [`NodePool`](crate::topology::pool::NodePool).
pub trait PoolHandle: Copy + Eq + Hash + Ord + fmt::Debug {
    /// Record table this handle addresses; used in error reports.
    const KIND: RecordKind;

    fn from_raw(raw: RawHandle) -> Self;

    fn raw(self) -> RawHandle;

    #[inline]
    fn index(self) -> u32 {
        self.raw().index()
    }

    #[inline]
    fn generation(self) -> u32 {
        self.raw().generation()
    }
}

macro_rules! typed_handle {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(RawHandle);

        impl $name {
            /// Slot index of this handle.
            #[inline]
            pub const fn index(self) -> u32 {
                self.0.index()
            }
        }

        impl PoolHandle for $name {
            const KIND: RecordKind = $kind;

            #[inline]
            fn from_raw(raw: RawHandle) -> Self {
                $name(raw)
            }

            #[inline]
            fn raw(self) -> RawHandle {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.0.index())
                    .field(&self.0.generation())
                    .finish()
            }
        }

        /// Prints the prefix and slot index only, e.g. `v12`.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0.index())
            }
        }
    };
}

typed_handle!(
    /// Handle of a mesh vertex.
    VertexId,
    RecordKind::Vertex,
    "v"
);
typed_handle!(
    /// Handle of a mesh edge.
    EdgeId,
    RecordKind::Edge,
    "e"
);
typed_handle!(
    /// Handle of a mesh face.
    FaceId,
    RecordKind::Face,
    "f"
);

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_size, assert_impl_all};

    assert_eq_size!(VertexId, u64);
    assert_eq_size!(EdgeId, u64);
    assert_eq_size!(FaceId, u64);
    assert_impl_all!(VertexId: Copy, Send, Sync);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display() {
        let v = VertexId::from_raw(RawHandle::new(7, 2));
        assert_eq!(format!("{:?}", v), "VertexId(7, 2)");
        assert_eq!(format!("{}", v), "v7");
        let f = FaceId::from_raw(RawHandle::new(3, 0));
        assert_eq!(format!("{}", f), "f3");
    }

    #[test]
    fn generation_distinguishes_handles() {
        let a = EdgeId::from_raw(RawHandle::new(4, 0));
        let b = EdgeId::from_raw(RawHandle::new(4, 1));
        assert_ne!(a, b);
        assert_eq!(a.index(), b.index());
        assert!(a < b);
    }

    #[test]
    fn kinds_are_tagged() {
        assert_eq!(VertexId::KIND, RecordKind::Vertex);
        assert_eq!(EdgeId::KIND, RecordKind::Edge);
        assert_eq!(FaceId::KIND, RecordKind::Face);
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let v = VertexId::from_raw(RawHandle::new(123, 4));
        let s = serde_json::to_string(&v).unwrap();
        let v2: VertexId = serde_json::from_str(&s).unwrap();
        assert_eq!(v2, v);
    }

    #[test]
    fn bincode_roundtrip() {
        let f = FaceId::from_raw(RawHandle::new(456, 1));
        let bytes = bincode::serialize(&f).unwrap();
        let f2: FaceId = bincode::deserialize(&bytes).unwrap();
        assert_eq!(f2, f);
    }
}
