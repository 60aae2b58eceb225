//! Topology validation helpers.
//!
//! [`validate_mesh_topology`] walks every record and returns the first
//! broken invariant. Editors only ever leave the mesh valid, so a failure
//! here points at a bug in the kernel or at a hand-modified store.

use hashbrown::HashSet;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::{MeshLiteError, NonManifoldReason, RecordKind};
use crate::topology::_debug_invariants::{assert_incidence_counts, assert_ring_lengths};
use crate::topology::mesh::Mesh;

/// Optional validation toggles for mesh topology checks.
#[derive(Debug, Clone, Copy)]
pub struct TopologyValidationOptions {
    /// Ensure faces sharing an edge walk it in opposite directions.
    pub check_orientation: bool,
    /// How to handle vertices without a single well-defined fan.
    pub non_manifold: NonManifoldHandling,
}

impl Default for TopologyValidationOptions {
    fn default() -> Self {
        Self {
            check_orientation: true,
            non_manifold: NonManifoldHandling::Ignore,
        }
    }
}

impl TopologyValidationOptions {
    /// Enable all topology validation checks.
    pub fn all() -> Self {
        Self {
            check_orientation: true,
            non_manifold: NonManifoldHandling::Error,
        }
    }
}

/// Behavior for non-manifold vertex detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold vertices.
    Warn,
    /// Return an error on non-manifold vertices.
    Error,
}

/// Validate the whole mesh against its structural invariants.
pub fn validate_mesh_topology(
    mesh: &Mesh,
    options: TopologyValidationOptions,
) -> Result<(), MeshLiteError> {
    validate_edges(mesh)?;
    validate_vertices(mesh)?;
    validate_faces(mesh)?;
    if options.check_orientation {
        validate_orientation(mesh)?;
    }
    validate_non_manifold(mesh, options.non_manifold)?;
    Ok(())
}

fn validate_edges(mesh: &Mesh) -> Result<(), MeshLiteError> {
    let mut pairs = HashSet::with_capacity(mesh.num_edges());
    for (e, rec) in mesh.edges.iter() {
        let [a, b] = rec.vertices;
        if a == b {
            return Err(MeshLiteError::BrokenIncidence(format!(
                "edge {e} joins {a} to itself"
            )));
        }
        for v in [a, b] {
            let vr = mesh
                .vertices
                .get(v)
                .ok_or(MeshLiteError::DanglingReference {
                    edge: e,
                    kind: RecordKind::Vertex,
                    index: v.index(),
                })?;
            if !vr.edges.contains(&e) {
                return Err(MeshLiteError::BrokenIncidence(format!(
                    "edge {e} missing from incidence list of {v}"
                )));
            }
        }
        if !pairs.insert((a.min(b), a.max(b))) {
            return Err(MeshLiteError::DuplicateEdge { a, b });
        }
        if let [Some(f1), Some(f2)] = rec.faces {
            if f1 == f2 {
                return Err(MeshLiteError::BrokenIncidence(format!(
                    "edge {e} lists face {f1} twice"
                )));
            }
        }
        for f in rec.faces_iter() {
            let fr = mesh.faces.get(f).ok_or(MeshLiteError::DanglingReference {
                edge: e,
                kind: RecordKind::Face,
                index: f.index(),
            })?;
            if !fr.edges.contains(&e) {
                return Err(MeshLiteError::BrokenIncidence(format!(
                    "edge {e} claims face {f}, which does not bound it"
                )));
            }
        }
    }
    Ok(())
}

fn validate_vertices(mesh: &Mesh) -> Result<(), MeshLiteError> {
    for (v, rec) in mesh.vertices.iter() {
        let mut seen = HashSet::with_capacity(rec.edges.len());
        for &e in &rec.edges {
            if !seen.insert(e) {
                return Err(MeshLiteError::BrokenIncidence(format!(
                    "edge {e} listed twice at {v}"
                )));
            }
            let touches = mesh.edges.get(e).is_some_and(|er| er.touches(v));
            if !touches {
                return Err(MeshLiteError::BrokenIncidence(format!(
                    "{v} lists {e}, which is dead or not incident"
                )));
            }
        }
        let rep_ok = match rec.representative {
            Some(e) => rec.edges.contains(&e),
            None => rec.edges.is_empty(),
        };
        if !rep_ok {
            return Err(MeshLiteError::RepresentativeNotIncident { vertex: v });
        }
    }
    Ok(())
}

fn validate_faces(mesh: &Mesh) -> Result<(), MeshLiteError> {
    for (f, rec) in mesh.faces.iter() {
        let ring_error = |detail: String| MeshLiteError::InvalidFaceRing { face: f, detail };
        let n = rec.degree();
        if n < 3 {
            return Err(ring_error(format!("degree {n} is below 3")));
        }
        if rec.edges.len() != n {
            return Err(ring_error(format!(
                "{} edges for {n} vertices",
                rec.edges.len()
            )));
        }
        let distinct: HashSet<_> = rec.vertices.iter().collect();
        if distinct.len() != n {
            return Err(ring_error("vertex visited twice".into()));
        }
        for i in 0..n {
            let (a, b) = (rec.vertices[i], rec.vertices[(i + 1) % n]);
            let e = rec.edges[i];
            let er = mesh
                .edges
                .get(e)
                .ok_or_else(|| ring_error(format!("edge {e} is dead")))?;
            if !(er.touches(a) && er.touches(b)) {
                return Err(ring_error(format!("edge {e} does not join {a} and {b}")));
            }
            if !er.has_face(f) {
                return Err(ring_error(format!("edge {e} does not list the face")));
            }
        }
    }
    Ok(())
}

fn validate_orientation(mesh: &Mesh) -> Result<(), MeshLiteError> {
    for (_, rec) in mesh.edges.iter() {
        let [a, b] = rec.vertices;
        if let [Some(f1), Some(f2)] = rec.faces {
            let forward = |f| mesh.faces.get(f).is_some_and(|r| r.traverses(a, b));
            if forward(f1) == forward(f2) {
                return Err(MeshLiteError::NonManifoldEdge {
                    a,
                    b,
                    reason: NonManifoldReason::OrientationConflict,
                });
            }
        }
    }
    Ok(())
}

fn validate_non_manifold(mesh: &Mesh, handling: NonManifoldHandling) -> Result<(), MeshLiteError> {
    if handling == NonManifoldHandling::Ignore {
        return Ok(());
    }
    for v in mesh.vertex_handles() {
        match (mesh.vertex_fan(v), handling) {
            (Ok(_), _) => {}
            (Err(e), NonManifoldHandling::Warn) => {
                log::warn!("Non-manifold vertex detected: {e}");
            }
            (Err(e), _) => return Err(e),
        }
    }
    Ok(())
}

impl DebugInvariants for Mesh {
    fn validate_invariants(&self) -> Result<(), MeshLiteError> {
        validate_mesh_topology(self, TopologyValidationOptions::default())
    }

    fn debug_assert_invariants(&self) {
        assert_incidence_counts(self);
        assert_ring_lengths(self);
        crate::debug_invariants!(self.validate_invariants(), "Mesh invalid");
    }
}
