//! Change tracking shared by the mesh and anything that caches derived data.

/// Monotonic stamp bumped by every successful mutation of a [`Mesh`].
///
/// Caches record the stamp they were built against and compare it with
/// [`Mesh::version`] before reuse.
///
/// [`Mesh`]: crate::topology::mesh::Mesh
/// [`Mesh::version`]: crate::topology::mesh::Mesh::version
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct MeshVersion(u64);

impl MeshVersion {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Anything that caches derived mesh data (normals, areas, ...)
/// should implement this.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future queries recompute correctly.
    fn invalidate_cache(&mut self);
}

impl<T: InvalidateCache + ?Sized> InvalidateCache for Box<T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        (**self).invalidate_cache();
    }
}
