//! Top-level module for mesh topology.
//!
//! This module provides the connectivity kernel:
//! - generational handles and the node pools that own every record
//! - the [`Mesh`] store with its adjacency accessors
//! - ordered fan traversal around vertices
//! - the topology editor and a structural validator
//!
//! Most users will work with [`Mesh`] directly; all queries and edits are
//! inherent methods on it.

pub(crate) mod _debug_invariants;
pub mod cache;
pub mod editor;
pub mod handle;
pub mod mesh;
pub mod pool;
pub mod records;
pub mod store;
pub mod traversal;
pub mod validation;

pub use cache::{InvalidateCache, MeshVersion};
pub use handle::{EdgeId, FaceId, PoolHandle, VertexId};
pub use mesh::{Mesh, MeshOptions};
pub use pool::NodePool;
pub use records::Color;
pub use traversal::{FanStep, VertexFan};
pub use validation::{NonManifoldHandling, TopologyValidationOptions, validate_mesh_topology};

#[cfg(test)]
mod tests;
