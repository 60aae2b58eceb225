//! Fixed-size topology records stored in the node pools.
//!
//! Records only hold non-owning handles to each other; the [`Mesh`]
//! owns every record and resolves handles through its pools.
//!
//! [`Mesh`]: crate::topology::mesh::Mesh

use crate::topology::handle::{EdgeId, FaceId, VertexId};

/// RGB colour with components in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
}

#[derive(Clone, Debug, PartialEq)]
pub struct VertexRecord {
    pub(crate) position: [f64; 3],
    pub(crate) normal: Option<[f64; 3]>,
    pub(crate) color: Option<Color>,
    /// Incident edges, unordered.
    pub(crate) edges: Vec<EdgeId>,
    /// Traversal seed; always one of `edges` when `edges` is non-empty.
    pub(crate) representative: Option<EdgeId>,
}

impl VertexRecord {
    pub(crate) fn new(position: [f64; 3], normal: Option<[f64; 3]>, color: Option<Color>) -> Self {
        Self {
            position,
            normal,
            color,
            edges: Vec::new(),
            representative: None,
        }
    }

    pub(crate) fn attach_edge(&mut self, e: EdgeId) {
        debug_assert!(!self.edges.contains(&e), "edge {e} attached twice");
        self.edges.push(e);
        if self.representative.is_none() {
            self.representative = Some(e);
        }
    }

    /// Drop `e` from the incidence list and repair the representative.
    pub(crate) fn detach_edge(&mut self, e: EdgeId) {
        self.edges.retain(|x| *x != e);
        if self.representative == Some(e) {
            self.representative = self.edges.first().copied();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub(crate) vertices: [VertexId; 2],
    pub(crate) faces: [Option<FaceId>; 2],
}

impl EdgeRecord {
    pub(crate) fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            vertices: [a, b],
            faces: [None, None],
        }
    }

    #[inline]
    pub(crate) fn touches(&self, v: VertexId) -> bool {
        self.vertices[0] == v || self.vertices[1] == v
    }

    #[inline]
    pub(crate) fn other_vertex(&self, v: VertexId) -> Option<VertexId> {
        match self.vertices {
            [a, b] if a == v => Some(b),
            [a, b] if b == v => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn face_count(&self) -> usize {
        self.faces.iter().flatten().count()
    }

    #[inline]
    pub(crate) fn has_face(&self, f: FaceId) -> bool {
        self.faces.contains(&Some(f))
    }

    pub(crate) fn faces_iter(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().flatten().copied()
    }

    /// Put `f` in the first free slot. Callers check capacity first.
    pub(crate) fn attach_face(&mut self, f: FaceId) {
        let slot = self
            .faces
            .iter_mut()
            .find(|s| s.is_none())
            .expect("edge face slots checked before attach");
        *slot = Some(f);
    }

    pub(crate) fn detach_face(&mut self, f: FaceId) {
        for slot in &mut self.faces {
            if *slot == Some(f) {
                *slot = None;
            }
        }
        // Keep the occupied slot first so face1 is set whenever face2 is.
        if self.faces[0].is_none() {
            self.faces.swap(0, 1);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceRecord {
    /// Ring of boundary vertices, counter-clockwise.
    pub(crate) vertices: Vec<VertexId>,
    /// `edges[i]` joins `vertices[i]` and `vertices[i + 1]` (cyclically).
    pub(crate) edges: Vec<EdgeId>,
}

impl FaceRecord {
    #[inline]
    pub(crate) fn degree(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub(crate) fn position_of(&self, v: VertexId) -> Option<usize> {
        self.vertices.iter().position(|x| *x == v)
    }

    /// Vertex after `v` in ring order.
    pub(crate) fn next_vertex(&self, v: VertexId) -> Option<VertexId> {
        let i = self.position_of(v)?;
        Some(self.vertices[(i + 1) % self.vertices.len()])
    }

    /// Vertex before `v` in ring order.
    pub(crate) fn prev_vertex(&self, v: VertexId) -> Option<VertexId> {
        let i = self.position_of(v)?;
        let n = self.vertices.len();
        Some(self.vertices[(i + n - 1) % n])
    }

    /// True if the ring walks `a -> b` along one of its edges.
    pub(crate) fn traverses(&self, a: VertexId, b: VertexId) -> bool {
        self.next_vertex(a) == Some(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::handle::{PoolHandle, RawHandle};

    fn v(i: u32) -> VertexId {
        VertexId::from_raw(RawHandle::new(i, 0))
    }
    fn f(i: u32) -> FaceId {
        FaceId::from_raw(RawHandle::new(i, 0))
    }

    #[test]
    fn detach_face_compacts_slots() {
        let mut e = EdgeRecord::new(v(0), v(1));
        e.attach_face(f(1));
        e.attach_face(f(2));
        e.detach_face(f(1));
        assert_eq!(e.faces, [Some(f(2)), None]);
        assert_eq!(e.face_count(), 1);
    }

    #[test]
    fn ring_neighbours_wrap() {
        let face = FaceRecord {
            vertices: vec![v(0), v(1), v(2)],
            edges: Vec::new(),
        };
        assert_eq!(face.next_vertex(v(2)), Some(v(0)));
        assert_eq!(face.prev_vertex(v(0)), Some(v(2)));
        assert!(face.traverses(v(2), v(0)));
        assert!(!face.traverses(v(0), v(2)));
        assert_eq!(face.next_vertex(v(9)), None);
    }
}
