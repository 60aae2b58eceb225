#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-lite
//!
//! mesh-lite is a compact topology kernel for polygonal surface meshes. It
//! stores vertices, edges and faces in generational node pools, keeps
//! their incidence relations mutually consistent, and answers ordered
//! neighbourhood queries around vertices.
//!
//! ## Features
//! - Generational handles ([`VertexId`](topology::VertexId),
//!   [`EdgeId`](topology::EdgeId), [`FaceId`](topology::FaceId)) that
//!   detect use after removal instead of aliasing a recycled slot
//! - Edge-based adjacency with at most two faces per edge
//! - Counter-clockwise vertex fans with explicit non-manifold errors
//! - Editing operators that either succeed completely or leave the mesh
//!   untouched
//! - Geometric measures and an OFF reader/writer
//!
//! ## Invariant checking
//!
//! Every editor call re-validates the whole mesh in debug builds. Enable
//! the `strict-invariants` or `check-invariants` feature to keep those
//! checks in release builds; see [`DebugInvariants`].
//!
//! ## Usage
//! ```rust
//! use mesh_lite::prelude::*;
//!
//! let mut mesh = Mesh::new();
//! let a = mesh.add_vertex([0.0, 0.0, 0.0]);
//! let b = mesh.add_vertex([1.0, 0.0, 0.0]);
//! let c = mesh.add_vertex([1.0, 1.0, 0.0]);
//! let d = mesh.add_vertex([0.0, 1.0, 0.0]);
//! mesh.add_face(&[a, b, c])?;
//! mesh.add_face(&[a, c, d])?;
//! assert_eq!(mesh.num_edges(), 5);
//! assert_eq!(mesh.vertex_vertices_ordered(a)?, vec![b, c, d]);
//! # Ok::<(), MeshLiteError>(())
//! ```

pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::FaceNormalCache;
    pub use crate::io::{MeshReader, MeshWriter, PolygonSoup, read_off, write_off};
    pub use crate::mesh_error::{MeshLiteError, NonManifoldReason, RecordKind};
    pub use crate::topology::{
        Color, EdgeId, FaceId, FanStep, InvalidateCache, Mesh, MeshOptions, MeshVersion,
        NonManifoldHandling, TopologyValidationOptions, VertexFan, VertexId,
        validate_mesh_topology,
    };
}
