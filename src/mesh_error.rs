//! MeshLiteError: Unified error type for mesh-lite public APIs
//!
//! Recoverable conditions (non-manifold edits, degenerate faces, removals
//! of records that are still in use) are reported through this type and
//! leave the mesh untouched. Contract violations, such as asking for the
//! face across an edge from a face that is not on that edge, panic instead.

use std::fmt;
use thiserror::Error;

use crate::topology::handle::{EdgeId, FaceId, VertexId};

/// Which record table a handle points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RecordKind {
    Vertex,
    Edge,
    Face,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Vertex => f.write_str("vertex"),
            RecordKind::Edge => f.write_str("edge"),
            RecordKind::Face => f.write_str("face"),
        }
    }
}

/// Why an edit or a traversal was refused as non-manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonManifoldReason {
    /// The edge already has two incident faces.
    EdgeFull,
    /// The edge is already traversed in the same direction by another face.
    OrientationConflict,
    /// More than two boundary edges meet at the vertex.
    TooManyBoundaryEdges(usize),
    /// Exactly one boundary edge meets at the vertex, so the fan cannot close.
    UnpairedBoundaryEdge,
    /// The faces around the vertex do not agree on orientation.
    InconsistentOrientation,
    /// Faceless edges share the vertex with other edges.
    DanglingEdges(usize),
    /// The fan around the vertex does not reach every incident edge.
    DisconnectedFan { reached: usize, incident: usize },
}

impl fmt::Display for NonManifoldReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonManifoldReason::EdgeFull => f.write_str("edge already has two faces"),
            NonManifoldReason::OrientationConflict => {
                f.write_str("edge already traversed in the same direction")
            }
            NonManifoldReason::TooManyBoundaryEdges(n) => {
                write!(f, "{n} boundary edges meet at the vertex")
            }
            NonManifoldReason::UnpairedBoundaryEdge => {
                f.write_str("a single boundary edge meets at the vertex")
            }
            NonManifoldReason::InconsistentOrientation => {
                f.write_str("faces around the vertex disagree on orientation")
            }
            NonManifoldReason::DanglingEdges(n) => {
                write!(f, "{n} faceless edges share the vertex with other edges")
            }
            NonManifoldReason::DisconnectedFan { reached, incident } => {
                write!(f, "fan reaches {reached} of {incident} incident edges")
            }
        }
    }
}

/// Unified error type for mesh-lite operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshLiteError {
    /// Handle refers to a destroyed or never-allocated record.
    #[error("invalid {kind} handle (index {index}, generation {generation})")]
    InvalidHandle {
        kind: RecordKind,
        index: u32,
        generation: u32,
    },
    /// A pool slot was freed twice.
    #[error("{kind} slot {index} freed twice")]
    DoubleFree { kind: RecordKind, index: u32 },
    /// The edge between `a` and `b` cannot take part in the requested configuration.
    #[error("non-manifold edge ({a}, {b}): {reason}")]
    NonManifoldEdge {
        a: VertexId,
        b: VertexId,
        reason: NonManifoldReason,
    },
    /// The neighbourhood of a vertex has no well-defined cyclic order.
    #[error("non-manifold vertex {vertex}: {reason}")]
    NonManifoldVertex {
        vertex: VertexId,
        reason: NonManifoldReason,
    },
    /// Face creation with fewer than three distinct vertices or a repeated vertex.
    #[error("degenerate face: {given} vertices given, {distinct} distinct")]
    DegenerateFace { given: usize, distinct: usize },
    /// Strict edge removal while faces still reference the edge.
    #[error("edge {edge} still has {faces} incident face(s)")]
    EdgeInUse { edge: EdgeId, faces: usize },
    /// Vertex removal while edges still reference the vertex.
    #[error("vertex {vertex} still has {edges} incident edge(s)")]
    VertexInUse { vertex: VertexId, edges: usize },
    /// A geometric measure is undefined (zero-area polygon, empty input, ...).
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    /// An edge references a record that is not live.
    #[error("edge {edge} references dead {kind} {index}")]
    DanglingReference {
        edge: EdgeId,
        kind: RecordKind,
        index: u32,
    },
    /// The incidence tables disagree with the edge/face records.
    #[error("broken incidence: {0}")]
    BrokenIncidence(String),
    /// A face ring is not a simple, consistently linked cycle.
    #[error("face {face} has an invalid boundary ring: {detail}")]
    InvalidFaceRing { face: FaceId, detail: String },
    /// A vertex representative edge does not touch the vertex.
    #[error("representative edge of vertex {vertex} is not incident to it")]
    RepresentativeNotIncident { vertex: VertexId },
    /// More than one edge connects the same pair of vertices.
    #[error("duplicate edges between {a} and {b}")]
    DuplicateEdge { a: VertexId, b: VertexId },
    /// Malformed polygon-soup or OFF input.
    #[error("mesh I/O parse error: {0}")]
    MeshIoParse(String),
    /// Underlying reader/writer failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MeshLiteError {
    fn from(e: std::io::Error) -> Self {
        MeshLiteError::Io(e.to_string())
    }
}

impl MeshLiteError {
    /// True for the non-manifold family (edge or vertex).
    pub fn is_non_manifold(&self) -> bool {
        matches!(
            self,
            MeshLiteError::NonManifoldEdge { .. } | MeshLiteError::NonManifoldVertex { .. }
        )
    }
}
