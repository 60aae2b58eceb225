#![allow(dead_code)]
use mesh_lite::prelude::*;

/// Add vertices at `points` and return their handles in order.
pub fn vertices(mesh: &mut Mesh, points: &[[f64; 3]]) -> Vec<VertexId> {
    points.iter().map(|&p| mesh.add_vertex(p)).collect()
}

/// Unit square as one quad, counter-clockwise seen from +z.
pub fn square() -> (Mesh, Vec<VertexId>, FaceId) {
    let mut m = Mesh::new();
    let v = vertices(
        &mut m,
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
    );
    let f = m.add_face(&v).unwrap();
    (m, v, f)
}

/// Unit square split along the (0,0)-(1,1) diagonal.
pub fn two_triangles() -> (Mesh, Vec<VertexId>, [FaceId; 2]) {
    let mut m = Mesh::new();
    let v = vertices(
        &mut m,
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
    );
    let f0 = m.add_face(&[v[0], v[1], v[2]]).unwrap();
    let f1 = m.add_face(&[v[0], v[2], v[3]]).unwrap();
    (m, v, [f0, f1])
}

/// Closed octahedron with outward-facing rings.
pub fn octahedron() -> (Mesh, Vec<VertexId>) {
    let mut m = Mesh::new();
    let v = vertices(
        &mut m,
        &[
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
    );
    let (top, bottom) = (v[4], v[5]);
    for i in 0..4 {
        let (a, b) = (v[i], v[(i + 1) % 4]);
        m.add_face(&[a, b, top]).unwrap();
        m.add_face(&[b, a, bottom]).unwrap();
    }
    (m, v)
}

/// Open `n x n` grid of unit quads in the xy-plane.
pub fn grid(n: usize) -> (Mesh, Vec<VertexId>) {
    let mut m = Mesh::new();
    let mut v = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            v.push(m.add_vertex([i as f64, j as f64, 0.0]));
        }
    }
    let at = |i: usize, j: usize| j * (n + 1) + i;
    for j in 0..n {
        for i in 0..n {
            m.add_face(&[v[at(i, j)], v[at(i + 1, j)], v[at(i + 1, j + 1)], v[at(i, j + 1)]])
                .unwrap();
        }
    }
    (m, v)
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// Assert `got` equals `want` up to a rotation.
pub fn assert_cyclic_eq<T: PartialEq + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    assert_eq!(got.len(), want.len(), "length differs: {got:?} vs {want:?}");
    if want.is_empty() {
        return;
    }
    let ok = (0..want.len()).any(|r| (0..want.len()).all(|i| got[i] == want[(i + r) % want.len()]));
    assert!(ok, "not a rotation\n got={:?}\nwant={:?}", got, want);
}
