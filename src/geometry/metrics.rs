//! Geometric measures over mesh faces and edges.
//!
//! Faces are arbitrary planar or near-planar polygons. Triangles take the
//! cross product at the corner whose angle is closest to a right angle,
//! which keeps the result stable for slivers. Larger polygons use
//! Newell's vector area.

use crate::mesh_error::MeshLiteError;
use crate::topology::handle::{EdgeId, FaceId};
use crate::topology::mesh::Mesh;

const EPS: f64 = 1e-12;

/// Axis-aligned bounds as `(min, max)`.
pub type BoundingBox = ([f64; 3], [f64; 3]);

/// Length of edge `e`.
pub fn edge_length(mesh: &Mesh, e: EdgeId) -> Result<f64, MeshLiteError> {
    let [a, b] = mesh.edge_vertices(e)?;
    Ok(norm(sub(
        mesh.vertex_position(b)?,
        mesh.vertex_position(a)?,
    )))
}

/// Vertex positions of `f` in ring order.
pub fn face_polygon(mesh: &Mesh, f: FaceId) -> Result<Vec<[f64; 3]>, MeshLiteError> {
    mesh.face_vertices(f)?
        .iter()
        .map(|&v| mesh.vertex_position(v))
        .collect()
}

/// Unsigned area of `f`.
pub fn face_area(mesh: &Mesh, f: FaceId) -> Result<f64, MeshLiteError> {
    Ok(polygon_area(&face_polygon(mesh, f)?))
}

/// Unit normal of `f`, oriented by its vertex ring.
pub fn face_normal(mesh: &Mesh, f: FaceId) -> Result<[f64; 3], MeshLiteError> {
    let n = newell(&face_polygon(mesh, f)?);
    let len = norm(n);
    if len <= EPS {
        return Err(MeshLiteError::DegenerateGeometry(format!(
            "face {f} has zero area"
        )));
    }
    Ok([n[0] / len, n[1] / len, n[2] / len])
}

/// Vertex average of `f`.
pub fn face_centroid(mesh: &Mesh, f: FaceId) -> Result<[f64; 3], MeshLiteError> {
    let pts = face_polygon(mesh, f)?;
    let inv = 1.0 / pts.len() as f64;
    let sum = pts.iter().fold([0.0; 3], |acc, p| add(acc, *p));
    Ok([sum[0] * inv, sum[1] * inv, sum[2] * inv])
}

/// Bounds of every live vertex, or `None` for a mesh without vertices.
pub fn bounding_box(mesh: &Mesh) -> Option<BoundingBox> {
    mesh.vertices
        .iter()
        .map(|(_, rec)| rec.position)
        .fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((
                [lo[0].min(p[0]), lo[1].min(p[1]), lo[2].min(p[2])],
                [hi[0].max(p[0]), hi[1].max(p[1]), hi[2].max(p[2])],
            )),
        })
}

/// Area of a polygon given by its ordered corners.
pub fn polygon_area(pts: &[[f64; 3]]) -> f64 {
    match pts.len() {
        0..=2 => 0.0,
        3 => triangle_area(pts[0], pts[1], pts[2]),
        _ => 0.5 * norm(newell(pts)),
    }
}

fn triangle_area(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    let corners = [(a, b, c), (b, c, a), (c, a, b)];
    let mut best: Option<(f64, [f64; 3], [f64; 3])> = None;
    for (p, q, r) in corners {
        let (u, w) = (sub(q, p), sub(r, p));
        let denom = norm(u) * norm(w);
        if denom <= EPS {
            return 0.0;
        }
        let cos = (dot(u, w) / denom).abs();
        if best.is_none_or(|(c, _, _)| cos < c) {
            best = Some((cos, u, w));
        }
    }
    best.map_or(0.0, |(_, u, w)| 0.5 * norm(cross(u, w)))
}

/// Twice the vector area of a closed polygon.
fn newell(pts: &[[f64; 3]]) -> [f64; 3] {
    let n = pts.len();
    (0..n).fold([0.0; 3], |acc, i| add(acc, cross(pts[i], pts[(i + 1) % n])))
}

fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

impl Mesh {
    /// See [`edge_length`].
    pub fn edge_length(&self, e: EdgeId) -> Result<f64, MeshLiteError> {
        edge_length(self, e)
    }

    /// See [`face_area`].
    pub fn face_area(&self, f: FaceId) -> Result<f64, MeshLiteError> {
        face_area(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> (Mesh, FaceId) {
        let mut m = Mesh::new();
        let v: Vec<_> = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]
            .into_iter()
            .map(|p| m.add_vertex(p))
            .collect();
        let f = m.add_face(&v).unwrap();
        (m, f)
    }

    #[test]
    fn square_measures() {
        let (m, f) = unit_square();
        assert!((m.face_area(f).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(face_normal(&m, f).unwrap(), [0.0, 0.0, 1.0]);
        assert_eq!(face_centroid(&m, f).unwrap(), [0.5, 0.5, 0.0]);
        for e in m.all_edges() {
            assert!((m.edge_length(e).unwrap() - 1.0).abs() < 1e-12);
        }
        assert_eq!(
            bounding_box(&m),
            Some(([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]))
        );
    }

    #[test]
    fn triangle_area_is_half_cross() {
        let area = polygon_area(&[[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
        assert!((area - 6.0).abs() < 1e-12);
        let sliver = polygon_area(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 1e-9, 0.0]]);
        assert!(sliver >= 0.0 && sliver < 1e-8);
    }

    #[test]
    fn collinear_face_has_no_normal() {
        let mut m = Mesh::new();
        let a = m.add_vertex([0.0, 0.0, 0.0]);
        let b = m.add_vertex([1.0, 0.0, 0.0]);
        let c = m.add_vertex([2.0, 0.0, 0.0]);
        let f = m.add_face(&[a, b, c]).unwrap();
        assert!(matches!(
            face_normal(&m, f),
            Err(MeshLiteError::DegenerateGeometry(_))
        ));
        assert_eq!(m.face_area(f).unwrap(), 0.0);
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert_eq!(bounding_box(&Mesh::new()), None);
    }

    #[test]
    fn dead_face_is_invalid_handle() {
        let (mut m, f) = unit_square();
        m.remove_face(f).unwrap();
        assert!(matches!(
            m.face_area(f),
            Err(MeshLiteError::InvalidHandle { .. })
        ));
    }
}
