#![cfg(any(debug_assertions, feature = "strict-invariants"))]

use crate::debug_invariants::DebugInvariants;
use crate::topology::handle::VertexId;
use crate::topology::mesh::Mesh;

fn triangle() -> (Mesh, [VertexId; 3]) {
    let mut m = Mesh::new();
    let a = m.add_vertex([0.0, 0.0, 0.0]);
    let b = m.add_vertex([1.0, 0.0, 0.0]);
    let c = m.add_vertex([0.0, 1.0, 0.0]);
    m.add_face(&[a, b, c]).unwrap();
    (m, [a, b, c])
}

#[test]
fn valid_mesh_passes() {
    let (m, _) = triangle();
    m.debug_assert_invariants();
    assert!(m.is_consistent());
}

#[test]
#[should_panic]
fn missing_vertex_incidence_panics_in_debug() {
    let (mut m, [a, ..]) = triangle();
    m.vertices.get_mut(a).unwrap().edges.pop();
    m.debug_assert_invariants();
}

#[test]
#[should_panic]
fn dropped_face_slot_panics_in_debug() {
    let (mut m, _) = triangle();
    let e = m.all_edges()[0];
    m.edges.get_mut(e).unwrap().faces = [None, None];
    m.debug_assert_invariants();
}

#[test]
#[should_panic]
fn short_face_ring_panics_in_debug() {
    let (mut m, _) = triangle();
    let f = m.all_faces()[0];
    let rec = m.faces.get_mut(f).unwrap();
    rec.vertices.truncate(2);
    rec.edges.truncate(2);
    m.debug_assert_invariants();
}

#[test]
#[should_panic]
fn stale_representative_panics_in_debug() {
    let (mut m, [a, b, c]) = triangle();
    let foreign = m.edge_between(b, c).unwrap().unwrap();
    m.vertices.get_mut(a).unwrap().representative = Some(foreign);
    m.debug_assert_invariants();
}
