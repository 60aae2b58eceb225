//! Primitive adjacency accessors of the mesh graph store.
//!
//! Each accessor resolves a handle through its pool and fails with
//! [`MeshLiteError::InvalidHandle`] when the record is gone. All of them
//! are O(1) except the ring and incidence slices, whose *use* is
//! O(degree), and [`Mesh::edge_between`], which scans one vertex's
//! incident edges.

use crate::mesh_error::MeshLiteError;
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::mesh::Mesh;
use crate::topology::records::{Color, EdgeRecord, FaceRecord, VertexRecord};

impl Mesh {
    #[inline]
    pub(crate) fn vertex_record(&self, v: VertexId) -> Result<&VertexRecord, MeshLiteError> {
        self.vertices.try_get(v)
    }

    #[inline]
    pub(crate) fn edge_record(&self, e: EdgeId) -> Result<&EdgeRecord, MeshLiteError> {
        self.edges.try_get(e)
    }

    #[inline]
    pub(crate) fn face_record(&self, f: FaceId) -> Result<&FaceRecord, MeshLiteError> {
        self.faces.try_get(f)
    }

    // ---------- vertex ----------

    pub fn vertex_position(&self, v: VertexId) -> Result<[f64; 3], MeshLiteError> {
        Ok(self.vertex_record(v)?.position)
    }

    pub fn vertex_normal(&self, v: VertexId) -> Result<Option<[f64; 3]>, MeshLiteError> {
        Ok(self.vertex_record(v)?.normal)
    }

    pub fn vertex_color(&self, v: VertexId) -> Result<Option<Color>, MeshLiteError> {
        Ok(self.vertex_record(v)?.color)
    }

    /// Representative edge of `v`, the seed of ordered walks.
    /// `None` for an isolated vertex.
    pub fn vertex_an_edge(&self, v: VertexId) -> Result<Option<EdgeId>, MeshLiteError> {
        Ok(self.vertex_record(v)?.representative)
    }

    /// Incident edges of `v` in storage order.
    pub fn vertex_edges(&self, v: VertexId) -> Result<&[EdgeId], MeshLiteError> {
        Ok(&self.vertex_record(v)?.edges)
    }

    /// Number of incident edges.
    pub fn vertex_degree(&self, v: VertexId) -> Result<usize, MeshLiteError> {
        Ok(self.vertex_record(v)?.edges.len())
    }

    // ---------- edge ----------

    pub fn edge_vertex1(&self, e: EdgeId) -> Result<VertexId, MeshLiteError> {
        Ok(self.edge_record(e)?.vertices[0])
    }

    pub fn edge_vertex2(&self, e: EdgeId) -> Result<VertexId, MeshLiteError> {
        Ok(self.edge_record(e)?.vertices[1])
    }

    pub fn edge_vertices(&self, e: EdgeId) -> Result<[VertexId; 2], MeshLiteError> {
        Ok(self.edge_record(e)?.vertices)
    }

    pub fn edge_face1(&self, e: EdgeId) -> Result<Option<FaceId>, MeshLiteError> {
        Ok(self.edge_record(e)?.faces[0])
    }

    pub fn edge_face2(&self, e: EdgeId) -> Result<Option<FaceId>, MeshLiteError> {
        Ok(self.edge_record(e)?.faces[1])
    }

    pub fn edge_faces(&self, e: EdgeId) -> Result<[Option<FaceId>; 2], MeshLiteError> {
        Ok(self.edge_record(e)?.faces)
    }

    /// Number of faces using `e` (0, 1 or 2).
    pub fn edge_face_count(&self, e: EdgeId) -> Result<usize, MeshLiteError> {
        Ok(self.edge_record(e)?.face_count())
    }

    /// Endpoint of `e` that is not `v`, or `None` if `v` is not on `e`.
    pub fn edge_other_vertex(
        &self,
        e: EdgeId,
        v: VertexId,
    ) -> Result<Option<VertexId>, MeshLiteError> {
        Ok(self.edge_record(e)?.other_vertex(v))
    }

    /// The face across `e` from `f`; `None` on a boundary edge.
    ///
    /// # Panics
    /// Panics if `f` is not incident to `e`; that is a caller bug, not a
    /// data condition.
    pub fn edge_other_face(&self, e: EdgeId, f: FaceId) -> Result<Option<FaceId>, MeshLiteError> {
        let rec = self.edge_record(e)?;
        match rec.faces {
            [Some(a), b] if a == f => Ok(b),
            [a, Some(b)] if b == f => Ok(a),
            _ => panic!("face {f} is not incident to edge {e}"),
        }
    }

    /// The edge joining `a` and `b`, if any.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Result<Option<EdgeId>, MeshLiteError> {
        let ra = self.vertex_record(a)?;
        self.vertex_record(b)?;
        for &e in &ra.edges {
            if self.edge_record(e)?.other_vertex(a) == Some(b) {
                return Ok(Some(e));
            }
        }
        Ok(None)
    }

    pub fn is_boundary_edge(&self, e: EdgeId) -> Result<bool, MeshLiteError> {
        Ok(self.edge_record(e)?.face_count() < 2)
    }

    // ---------- face ----------

    /// Boundary edges of `f` in ring order; `edges[i]` joins
    /// `vertices[i]` and `vertices[i + 1]`.
    pub fn face_edges(&self, f: FaceId) -> Result<&[EdgeId], MeshLiteError> {
        Ok(&self.face_record(f)?.edges)
    }

    /// Boundary vertices of `f` in ring order (counter-clockwise).
    pub fn face_vertices(&self, f: FaceId) -> Result<&[VertexId], MeshLiteError> {
        Ok(&self.face_record(f)?.vertices)
    }

    pub fn face_degree(&self, f: FaceId) -> Result<usize, MeshLiteError> {
        Ok(self.face_record(f)?.degree())
    }

    /// Faces across each ring edge of `f`, aligned with
    /// [`face_edges`](Self::face_edges); `None` across boundary edges.
    pub fn face_faces(&self, f: FaceId) -> Result<Vec<Option<FaceId>>, MeshLiteError> {
        let rec = self.face_record(f)?;
        rec.edges
            .iter()
            .map(|&e| self.edge_other_face(e, f))
            .collect()
    }

    /// First ring edge of `f` that does not touch `v`.
    ///
    /// # Panics
    /// Panics if `v` is not on `f`, or if every edge of `f` touches `v`
    /// (never the case for a face of degree ≥ 3 containing `v`).
    pub fn face_opposite_edge(&self, f: FaceId, v: VertexId) -> Result<EdgeId, MeshLiteError> {
        let rec = self.face_record(f)?;
        assert!(
            rec.position_of(v).is_some(),
            "vertex {v} is not on face {f}"
        );
        for &e in &rec.edges {
            if !self.edge_record(e)?.touches(v) {
                return Ok(e);
            }
        }
        panic!("every edge of face {f} touches vertex {v}");
    }

    /// True if `f` is bounded by `e`.
    pub fn face_has_edge(&self, f: FaceId, e: EdgeId) -> Result<bool, MeshLiteError> {
        Ok(self.face_record(f)?.edges.contains(&e))
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh_error::{MeshLiteError, RecordKind};
    use crate::topology::mesh::Mesh;

    #[test]
    fn accessors_reject_removed_records() {
        let mut m = Mesh::new();
        let a = m.add_vertex([0.0, 0.0, 0.0]);
        let b = m.add_vertex([1.0, 0.0, 0.0]);
        let c = m.add_vertex([0.0, 1.0, 0.0]);
        let f = m.add_face(&[a, b, c]).unwrap();
        let e = m.face_edges(f).unwrap()[0];
        m.remove_edge(e).unwrap();
        assert!(matches!(
            m.face_vertices(f),
            Err(MeshLiteError::InvalidHandle {
                kind: RecordKind::Face,
                ..
            })
        ));
        assert!(matches!(
            m.edge_vertex1(e),
            Err(MeshLiteError::InvalidHandle {
                kind: RecordKind::Edge,
                ..
            })
        ));
    }

    #[test]
    fn edge_between_is_symmetric() {
        let mut m = Mesh::new();
        let a = m.add_vertex([0.0, 0.0, 0.0]);
        let b = m.add_vertex([1.0, 0.0, 0.0]);
        let c = m.add_vertex([0.0, 1.0, 0.0]);
        m.add_face(&[a, b, c]).unwrap();
        let ab = m.edge_between(a, b).unwrap().unwrap();
        assert_eq!(m.edge_between(b, a).unwrap(), Some(ab));
        assert_eq!(m.edge_vertices(ab).unwrap(), [a, b]);
    }

    #[test]
    fn face_opposite_edge_on_triangle() {
        let mut m = Mesh::new();
        let a = m.add_vertex([0.0, 0.0, 0.0]);
        let b = m.add_vertex([1.0, 0.0, 0.0]);
        let c = m.add_vertex([0.0, 1.0, 0.0]);
        let f = m.add_face(&[a, b, c]).unwrap();
        let bc = m.edge_between(b, c).unwrap().unwrap();
        assert_eq!(m.face_opposite_edge(f, a).unwrap(), bc);
    }

    #[test]
    #[should_panic(expected = "is not incident to edge")]
    fn other_face_of_unrelated_face_panics() {
        let mut m = Mesh::new();
        let a = m.add_vertex([0.0, 0.0, 0.0]);
        let b = m.add_vertex([1.0, 0.0, 0.0]);
        let c = m.add_vertex([0.0, 1.0, 0.0]);
        let d = m.add_vertex([2.0, 2.0, 0.0]);
        let e = m.add_vertex([3.0, 2.0, 0.0]);
        let f0 = m.add_face(&[a, b, c]).unwrap();
        let f1 = m.add_face(&[c, d, e]).unwrap();
        let ab = m.face_edges(f0).unwrap()[0];
        let _ = m.edge_other_face(ab, f1);
    }
}
