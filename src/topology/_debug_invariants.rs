#![allow(dead_code)]

use crate::topology::mesh::Mesh;

/// `inv_assert*` fire in debug builds and whenever the `strict-invariants`
/// feature is enabled; they compile to no-ops otherwise.
#[cfg(any(debug_assertions, feature = "strict-invariants"))]
macro_rules! inv_assert {
    ($($tt:tt)*) => { assert!($($tt)*); };
}
#[cfg(any(debug_assertions, feature = "strict-invariants"))]
macro_rules! inv_assert_eq {
    ($($tt:tt)*) => { assert_eq!($($tt)*); };
}
#[cfg(not(any(debug_assertions, feature = "strict-invariants")))]
macro_rules! inv_assert {
    ($($tt:tt)*) => {
        ()
    };
}
#[cfg(not(any(debug_assertions, feature = "strict-invariants")))]
macro_rules! inv_assert_eq {
    ($($tt:tt)*) => {
        ()
    };
}
pub(crate) use inv_assert;
pub(crate) use inv_assert_eq;

/// Handshake counts: every edge is listed at both endpoints, and every
/// face-edge incidence is recorded on both the face and the edge.
pub(crate) fn assert_incidence_counts(mesh: &Mesh) {
    let vertex_slots: usize = mesh.vertices.iter().map(|(_, v)| v.edges.len()).sum();
    inv_assert_eq!(
        vertex_slots,
        2 * mesh.edges.len(),
        "vertex incidence total does not match edge count",
    );

    let face_slots: usize = mesh.faces.iter().map(|(_, f)| f.edges.len()).sum();
    let edge_slots: usize = mesh.edges.iter().map(|(_, e)| e.face_count()).sum();
    inv_assert_eq!(
        face_slots,
        edge_slots,
        "face ring total does not match edge face slots",
    );
}

/// Every face ring lists as many edges as vertices, and at least three.
pub(crate) fn assert_ring_lengths(mesh: &Mesh) {
    for (f, rec) in mesh.faces.iter() {
        inv_assert!(rec.degree() >= 3, "face {f} has degree {}", rec.degree());
        inv_assert_eq!(
            rec.vertices.len(),
            rec.edges.len(),
            "face {f} ring arrays disagree",
        );
    }
}
