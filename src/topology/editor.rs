//! Topology editing operators.
//!
//! Every operator either succeeds completely or returns an error with the
//! mesh untouched: preconditions are checked before the first write. Each
//! success bumps [`Mesh::version`].
//!
//! Cascades are asymmetric and callers rely on that:
//! - [`Mesh::remove_edge`] removes the (up to two) faces on the edge first;
//! - [`Mesh::remove_face`] leaves its edges in place, possibly faceless;
//! - [`Mesh::remove_vertex`] refuses while any edge still uses the vertex.

use itertools::Itertools;

#[allow(unused_imports)]
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::{MeshLiteError, NonManifoldReason};
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::mesh::Mesh;
use crate::topology::records::{Color, EdgeRecord, FaceRecord, VertexRecord};

impl Mesh {
    /// Add an isolated vertex with the default colour.
    pub fn add_vertex(&mut self, position: [f64; 3]) -> VertexId {
        self.add_vertex_with(position, None, None)
    }

    /// Add an isolated vertex with optional normal and colour. A missing
    /// colour falls back to [`MeshOptions::default_color`].
    ///
    /// [`MeshOptions::default_color`]: crate::topology::mesh::MeshOptions::default_color
    pub fn add_vertex_with(
        &mut self,
        position: [f64; 3],
        normal: Option<[f64; 3]>,
        color: Option<Color>,
    ) -> VertexId {
        let color = color.or(self.options.default_color);
        let v = self
            .vertices
            .allocate(VertexRecord::new(position, normal, color));
        self.touch();
        v
    }

    /// Add a polygon bounded by `ring`, given counter-clockwise.
    ///
    /// Existing edges between consecutive vertices are reused, missing ones
    /// are created. Fails with
    /// - [`MeshLiteError::DegenerateFace`] for fewer than three distinct
    ///   vertices or a repeated vertex;
    /// - [`MeshLiteError::InvalidHandle`] for a dead vertex;
    /// - [`MeshLiteError::NonManifoldEdge`] if an edge already has two faces
    ///   or is already walked in the same direction by another face.
    pub fn add_face(&mut self, ring: &[VertexId]) -> Result<FaceId, MeshLiteError> {
        let given = ring.len();
        let distinct = ring.iter().unique().count();
        if distinct < 3 || distinct != given {
            return Err(MeshLiteError::DegenerateFace { given, distinct });
        }
        for &v in ring {
            self.vertex_record(v)?;
        }

        let mut plan: Vec<Option<EdgeId>> = Vec::with_capacity(given);
        for (&a, &b) in ring.iter().circular_tuple_windows() {
            let existing = self.edge_between(a, b)?;
            if let Some(e) = existing {
                let rec = self.edge_record(e)?;
                let reason = if rec.face_count() >= 2 {
                    Some(NonManifoldReason::EdgeFull)
                } else if rec
                    .faces_iter()
                    .any(|f| self.faces.get(f).is_some_and(|face| face.traverses(a, b)))
                {
                    Some(NonManifoldReason::OrientationConflict)
                } else {
                    None
                };
                if let Some(reason) = reason {
                    log::warn!("add_face rejected: edge ({a}, {b}): {reason}");
                    return Err(MeshLiteError::NonManifoldEdge { a, b, reason });
                }
            }
            plan.push(existing);
        }

        // Validation done; from here on nothing can fail.
        let f = self.faces.allocate(FaceRecord {
            vertices: ring.to_vec(),
            edges: Vec::with_capacity(given),
        });
        let mut created = 0usize;
        let mut edges = Vec::with_capacity(given);
        for ((&a, &b), existing) in ring.iter().circular_tuple_windows().zip(plan) {
            let e = match existing {
                Some(e) => e,
                None => {
                    created += 1;
                    self.link_new_edge(a, b)
                }
            };
            if let Some(rec) = self.edges.get_mut(e) {
                rec.attach_face(f);
            }
            edges.push(e);
        }
        if let Some(face) = self.faces.get_mut(f) {
            face.edges = edges;
        }

        self.touch();
        log::debug!("add_face {f}: degree {given}, {created} new edge(s)");
        crate::debug_invariants!(DebugInvariants::validate_invariants(self), "after add_face");
        Ok(f)
    }

    fn link_new_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let e = self.edges.allocate(EdgeRecord::new(a, b));
        for v in [a, b] {
            if let Some(rec) = self.vertices.get_mut(v) {
                rec.attach_edge(e);
            }
        }
        e
    }

    /// Remove face `f`. Its edges stay, and any left without faces become
    /// dangling; removing them is up to the caller.
    pub fn remove_face(&mut self, f: FaceId) -> Result<(), MeshLiteError> {
        self.face_record(f)?;
        self.unlink_face(f)?;
        self.touch();
        log::debug!("remove_face {f}");
        crate::debug_invariants!(DebugInvariants::validate_invariants(self), "after remove_face");
        Ok(())
    }

    fn unlink_face(&mut self, f: FaceId) -> Result<(), MeshLiteError> {
        let rec = self.faces.free(f)?;
        for e in rec.edges {
            if let Some(er) = self.edges.get_mut(e) {
                er.detach_face(f);
            }
        }
        Ok(())
    }

    /// Remove edge `e` together with the faces using it. The endpoints
    /// stay, as do the other edges of the removed faces.
    pub fn remove_edge(&mut self, e: EdgeId) -> Result<(), MeshLiteError> {
        let faces: Vec<FaceId> = self.edge_record(e)?.faces_iter().collect();
        for &f in &faces {
            self.unlink_face(f)?;
        }
        self.unlink_edge(e)?;
        self.touch();
        log::debug!("remove_edge {e}: cascaded to {} face(s)", faces.len());
        crate::debug_invariants!(DebugInvariants::validate_invariants(self), "after remove_edge");
        Ok(())
    }

    /// Remove edge `e` only if no face uses it; otherwise
    /// [`MeshLiteError::EdgeInUse`].
    pub fn remove_unused_edge(&mut self, e: EdgeId) -> Result<(), MeshLiteError> {
        let faces = self.edge_record(e)?.face_count();
        if faces > 0 {
            return Err(MeshLiteError::EdgeInUse { edge: e, faces });
        }
        self.unlink_edge(e)?;
        self.touch();
        log::debug!("remove_unused_edge {e}");
        crate::debug_invariants!(DebugInvariants::validate_invariants(self), "after remove_unused_edge");
        Ok(())
    }

    fn unlink_edge(&mut self, e: EdgeId) -> Result<(), MeshLiteError> {
        let rec = self.edges.free(e)?;
        for v in rec.vertices {
            if let Some(vr) = self.vertices.get_mut(v) {
                vr.detach_edge(e);
            }
        }
        Ok(())
    }

    /// Remove an isolated vertex; [`MeshLiteError::VertexInUse`] while any
    /// edge still uses it.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<(), MeshLiteError> {
        let edges = self.vertex_record(v)?.edges.len();
        if edges > 0 {
            return Err(MeshLiteError::VertexInUse { vertex: v, edges });
        }
        self.vertices.free(v)?;
        self.touch();
        log::debug!("remove_vertex {v}");
        crate::debug_invariants!(DebugInvariants::validate_invariants(self), "after remove_vertex");
        Ok(())
    }

    pub fn set_position(&mut self, v: VertexId, position: [f64; 3]) -> Result<(), MeshLiteError> {
        self.vertices.try_get_mut(v)?.position = position;
        self.touch();
        Ok(())
    }

    pub fn set_normal(
        &mut self,
        v: VertexId,
        normal: Option<[f64; 3]>,
    ) -> Result<(), MeshLiteError> {
        self.vertices.try_get_mut(v)?.normal = normal;
        self.touch();
        Ok(())
    }

    pub fn set_color(&mut self, v: VertexId, color: Option<Color>) -> Result<(), MeshLiteError> {
        self.vertices.try_get_mut(v)?.color = color;
        self.touch();
        Ok(())
    }

    /// Drop every record. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.faces.clear();
        self.edges.clear();
        self.vertices.clear();
        self.touch();
        log::debug!("mesh cleared");
    }
}
