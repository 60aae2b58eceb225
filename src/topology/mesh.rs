//! The owning mesh: record pools, version stamp and runtime options.
//!
//! Adjacency accessors live in [`store`](crate::topology::store), ordered
//! walks in [`traversal`](crate::topology::traversal) and mutating
//! operators in [`editor`](crate::topology::editor); all of them are
//! inherent methods on [`Mesh`].

use crate::topology::cache::MeshVersion;
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::pool::NodePool;
use crate::topology::records::{Color, EdgeRecord, FaceRecord, VertexRecord};

/// Runtime defaults applied by the editor.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshOptions {
    /// Colour given to vertices added without an explicit colour.
    pub default_color: Option<Color>,
}

/// Polygonal mesh with vertex, edge and face records.
///
/// # Example
/// ```rust
/// use mesh_lite::topology::mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex([0.0, 0.0, 0.0]);
/// let b = mesh.add_vertex([1.0, 0.0, 0.0]);
/// let c = mesh.add_vertex([0.0, 1.0, 0.0]);
/// let f = mesh.add_face(&[a, b, c])?;
/// assert_eq!(mesh.num_faces(), 1);
/// assert_eq!(mesh.num_edges(), 3);
/// assert_eq!(mesh.face_vertices(f)?, &[a, b, c]);
/// # Ok::<(), mesh_lite::mesh_error::MeshLiteError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub(crate) vertices: NodePool<VertexId, VertexRecord>,
    pub(crate) edges: NodePool<EdgeId, EdgeRecord>,
    pub(crate) faces: NodePool<FaceId, FaceRecord>,
    pub(crate) version: MeshVersion,
    pub(crate) options: MeshOptions,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MeshOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Preallocate record slots.
    pub fn with_capacity(vertices: usize, edges: usize, faces: usize) -> Self {
        Self {
            vertices: NodePool::with_capacity(vertices),
            edges: NodePool::with_capacity(edges),
            faces: NodePool::with_capacity(faces),
            ..Self::default()
        }
    }

    #[inline]
    pub fn options(&self) -> &MeshOptions {
        &self.options
    }

    #[inline]
    pub fn options_mut(&mut self) -> &mut MeshOptions {
        &mut self.options
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Every live vertex exactly once, in slot order.
    pub fn all_vertices(&self) -> Vec<VertexId> {
        self.vertices.handles().collect()
    }

    /// Every live edge exactly once, in slot order.
    pub fn all_edges(&self) -> Vec<EdgeId> {
        self.edges.handles().collect()
    }

    /// Every live face exactly once, in slot order.
    pub fn all_faces(&self) -> Vec<FaceId> {
        self.faces.handles().collect()
    }

    pub fn vertex_handles(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.handles()
    }

    pub fn edge_handles(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.handles()
    }

    pub fn face_handles(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.handles()
    }

    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(v)
    }

    #[inline]
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edges.contains(e)
    }

    #[inline]
    pub fn contains_face(&self, f: FaceId) -> bool {
        self.faces.contains(f)
    }

    /// Current change stamp.
    #[inline]
    pub fn version(&self) -> MeshVersion {
        self.version
    }

    /// True if any mutation succeeded after `since` was read.
    #[inline]
    pub fn changed_since(&self, since: MeshVersion) -> bool {
        self.version != since
    }

    #[inline]
    pub(crate) fn touch(&mut self) {
        self.version.bump();
    }
}
