//! Ordered and unordered neighbourhood traversal.
//!
//! The ordered walk around a vertex `v` follows face winding: from an
//! edge `(v, w)` it takes the face in which `w` comes right after `v`,
//! and moves on to the edge joining `v` with the vertex right before `v`
//! in that face. The result is counter-clockwise seen from the outward
//! side. A closed fan ends when the start edge comes round again; an
//! open fan starts and ends on boundary edges.
//!
//! [`Mesh::vertex_fan`] checks the whole neighbourhood up front, so the
//! returned [`VertexFan`] is infallible, finite and can be restarted.
//! Vertices without a single well-defined cyclic order are reported as
//! [`MeshLiteError::NonManifoldVertex`] rather than walked partially.

use itertools::Itertools;

use crate::mesh_error::{MeshLiteError, NonManifoldReason};
use crate::topology::handle::{EdgeId, FaceId, VertexId};
use crate::topology::mesh::Mesh;

/// One step of an ordered walk around a centre vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FanStep {
    /// Edge from the centre to [`vertex`](Self::vertex).
    pub edge: EdgeId,
    /// Neighbour reached through `edge`.
    pub vertex: VertexId,
    /// Face between this step's edge and the next step's edge;
    /// `None` after the last edge of an open fan.
    pub face: Option<FaceId>,
}

/// Lazy counter-clockwise walk around a vertex. See [`Mesh::vertex_fan`].
#[derive(Clone, Debug)]
pub struct VertexFan<'a> {
    mesh: &'a Mesh,
    center: VertexId,
    start: Option<EdgeId>,
    current: Option<EdgeId>,
    len: usize,
    remaining: usize,
    closed: bool,
}

impl<'a> VertexFan<'a> {
    /// Vertex the fan turns around.
    #[inline]
    pub fn center(&self) -> VertexId {
        self.center
    }

    /// True when the walk comes back to its start edge.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Edge the walk starts from.
    #[inline]
    pub fn start_edge(&self) -> Option<EdgeId> {
        self.start
    }

    /// Rewind to the start edge.
    pub fn restart(&mut self) {
        self.current = self.start;
        self.remaining = self.len;
    }
}

impl Iterator for VertexFan<'_> {
    type Item = FanStep;

    fn next(&mut self) -> Option<FanStep> {
        if self.remaining == 0 {
            return None;
        }
        let edge = self.current?;
        let (vertex, turn) = self.mesh.fan_turn(self.center, edge)?;
        self.remaining -= 1;
        self.current = turn.map(|(_, next)| next);
        Some(FanStep {
            edge,
            vertex,
            face: turn.map(|(f, _)| f),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for VertexFan<'_> {}

impl Mesh {
    /// From edge `e` at `v`: the neighbour across `e`, plus the face lying
    /// counter-clockwise after `e` and the edge after that face, if any.
    fn fan_turn(&self, v: VertexId, e: EdgeId) -> Option<(VertexId, Option<(FaceId, EdgeId)>)> {
        let rec = self.edges.get(e)?;
        let w = rec.other_vertex(v)?;
        for f in rec.faces_iter() {
            let face = self.faces.get(f)?;
            if !face.traverses(v, w) {
                continue;
            }
            let i = face.position_of(v)?;
            let n = face.degree();
            // edges[i - 1] joins the ring predecessor of `v` with `v`.
            let next = face.edges[(i + n - 1) % n];
            return Some((w, Some((f, next))));
        }
        Some((w, None))
    }

    /// Counter-clockwise walk around `v`, validated up front.
    ///
    /// Fails with [`MeshLiteError::NonManifoldVertex`] if faceless edges
    /// share `v` with other edges, if the boundary edges at `v` do not
    /// form exactly one pair, or if the walk does not reach every
    /// incident edge (e.g. two fans touching at `v`).
    ///
    /// # Example
    /// ```rust
    /// use mesh_lite::topology::mesh::Mesh;
    ///
    /// let mut m = Mesh::new();
    /// let c = m.add_vertex([0.0, 0.0, 0.0]);
    /// let a = m.add_vertex([1.0, 0.0, 0.0]);
    /// let b = m.add_vertex([0.0, 1.0, 0.0]);
    /// let d = m.add_vertex([-1.0, 0.0, 0.0]);
    /// m.add_face(&[c, a, b])?;
    /// m.add_face(&[c, b, d])?;
    /// let around: Vec<_> = m.vertex_fan(c)?.map(|s| s.vertex).collect();
    /// assert_eq!(around, vec![a, b, d]);
    /// # Ok::<(), mesh_lite::mesh_error::MeshLiteError>(())
    /// ```
    pub fn vertex_fan(&self, v: VertexId) -> Result<VertexFan<'_>, MeshLiteError> {
        let rec = self.vertex_record(v)?;
        let incident = rec.edges.len();
        let non_manifold = |reason| MeshLiteError::NonManifoldVertex { vertex: v, reason };

        if incident == 0 {
            return Ok(self.fan(v, None, 0, false));
        }

        let mut faceless = 0usize;
        let mut boundary = Vec::with_capacity(2);
        for &e in &rec.edges {
            match self.edge_record(e)?.face_count() {
                0 => faceless += 1,
                1 => boundary.push(e),
                _ => {}
            }
        }
        if faceless > 0 {
            if incident == 1 {
                return Ok(self.fan(v, Some(rec.edges[0]), 1, false));
            }
            return Err(non_manifold(NonManifoldReason::DanglingEdges(faceless)));
        }

        let (start, closed) = match boundary.len() {
            0 => (rec.representative.unwrap_or(rec.edges[0]), true),
            1 => return Err(non_manifold(NonManifoldReason::UnpairedBoundaryEdge)),
            2 => {
                let leaving: Vec<EdgeId> = boundary
                    .iter()
                    .copied()
                    .filter(|&e| matches!(self.fan_turn(v, e), Some((_, Some(_)))))
                    .collect();
                match leaving.as_slice() {
                    [e] => (*e, false),
                    _ => return Err(non_manifold(NonManifoldReason::InconsistentOrientation)),
                }
            }
            n => return Err(non_manifold(NonManifoldReason::TooManyBoundaryEdges(n))),
        };

        let reached = self.walk_length(v, start, incident);
        if reached != incident {
            return Err(non_manifold(NonManifoldReason::DisconnectedFan { reached, incident }));
        }
        Ok(self.fan(v, Some(start), reached, closed))
    }

    /// Like [`vertex_fan`](Self::vertex_fan) but, for a closed fan, starts
    /// at `e`. Open fans always start at their leading boundary edge.
    ///
    /// # Panics
    /// Panics if `e` is not incident to `v`.
    pub fn vertex_fan_from(&self, v: VertexId, e: EdgeId) -> Result<VertexFan<'_>, MeshLiteError> {
        assert!(
            self.edge_record(e)?.touches(v),
            "edge {e} is not incident to vertex {v}"
        );
        let mut fan = self.vertex_fan(v)?;
        if fan.closed {
            fan.start = Some(e);
            fan.restart();
        }
        Ok(fan)
    }

    fn fan(&self, v: VertexId, start: Option<EdgeId>, len: usize, closed: bool) -> VertexFan<'_> {
        VertexFan {
            mesh: self,
            center: v,
            start,
            current: start,
            len,
            remaining: len,
            closed,
        }
    }

    /// Steps from `start` until the walk closes, hits a boundary, or
    /// exceeds `limit` (a stray cycle); the last case returns `limit + 1`.
    fn walk_length(&self, v: VertexId, start: EdgeId, limit: usize) -> usize {
        let mut steps = 0usize;
        let mut current = start;
        loop {
            steps += 1;
            if steps > limit {
                return steps;
            }
            match self.fan_turn(v, current) {
                Some((_, Some((_, next)))) if next != start => current = next,
                _ => return steps,
            }
        }
    }

    /// Neighbours of `v` in counter-clockwise order.
    pub fn vertex_vertices_ordered(&self, v: VertexId) -> Result<Vec<VertexId>, MeshLiteError> {
        Ok(self.vertex_fan(v)?.map(|s| s.vertex).collect())
    }

    /// Incident edges of `v` in counter-clockwise order.
    pub fn vertex_edges_ordered(&self, v: VertexId) -> Result<Vec<EdgeId>, MeshLiteError> {
        Ok(self.vertex_fan(v)?.map(|s| s.edge).collect())
    }

    /// Incident faces of `v` in counter-clockwise order.
    pub fn vertex_faces_ordered(&self, v: VertexId) -> Result<Vec<FaceId>, MeshLiteError> {
        Ok(self.vertex_fan(v)?.filter_map(|s| s.face).collect())
    }

    // ---------- unordered ----------

    /// Neighbours of `v` in storage order.
    pub fn vertex_vertices(&self, v: VertexId) -> Result<Vec<VertexId>, MeshLiteError> {
        let rec = self.vertex_record(v)?;
        rec.edges
            .iter()
            .map(|&e| {
                let er = self.edge_record(e)?;
                er.other_vertex(v).ok_or_else(|| {
                    MeshLiteError::BrokenIncidence(format!("edge {e} listed at {v} but not incident"))
                })
            })
            .collect()
    }

    /// Faces touching `v`, each once, in storage order.
    pub fn vertex_faces(&self, v: VertexId) -> Result<Vec<FaceId>, MeshLiteError> {
        let rec = self.vertex_record(v)?;
        let mut faces = Vec::with_capacity(rec.edges.len());
        for &e in &rec.edges {
            faces.extend(self.edge_record(e)?.faces_iter());
        }
        Ok(faces.into_iter().unique().collect())
    }

    /// True if any incident edge of `v` has fewer than two faces.
    pub fn is_boundary_vertex(&self, v: VertexId) -> Result<bool, MeshLiteError> {
        let rec = self.vertex_record(v)?;
        for &e in &rec.edges {
            if self.edge_record(e)?.face_count() < 2 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of faces touching `v`.
    pub fn vertex_face_count(&self, v: VertexId) -> Result<usize, MeshLiteError> {
        Ok(self.vertex_faces(v)?.len())
    }
}
