//! Index-based polygon soup: the exchange form between [`Mesh`] and files.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshLiteError;
use crate::topology::handle::VertexId;
use crate::topology::mesh::{Mesh, MeshOptions};
use crate::topology::records::Color;

/// Vertex attributes plus faces as lists of dense vertex indices.
///
/// `normals` and `colors` are either empty or have one entry per position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonSoup {
    pub positions: Vec<[f64; 3]>,
    #[serde(default)]
    pub normals: Vec<Option<[f64; 3]>>,
    #[serde(default)]
    pub colors: Vec<Option<Color>>,
    pub faces: Vec<Vec<usize>>,
}

impl PolygonSoup {
    /// Snapshot `mesh`. Vertex `i` of the soup is the `i`-th entry of
    /// [`Mesh::all_vertices`]. Faceless edges are not represented.
    pub fn from_mesh(mesh: &Mesh) -> Result<Self, MeshLiteError> {
        let verts = mesh.all_vertices();
        let index: HashMap<VertexId, usize> =
            verts.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        let mut soup = PolygonSoup {
            positions: Vec::with_capacity(verts.len()),
            normals: Vec::with_capacity(verts.len()),
            colors: Vec::with_capacity(verts.len()),
            faces: Vec::with_capacity(mesh.num_faces()),
        };
        for &v in &verts {
            soup.positions.push(mesh.vertex_position(v)?);
            soup.normals.push(mesh.vertex_normal(v)?);
            soup.colors.push(mesh.vertex_color(v)?);
        }
        for f in mesh.face_handles() {
            let ring = mesh
                .face_vertices(f)?
                .iter()
                .map(|v| {
                    index.get(v).copied().ok_or_else(|| {
                        MeshLiteError::BrokenIncidence(format!("face {f} uses dead vertex {v}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            soup.faces.push(ring);
        }
        if soup.normals.iter().all(Option::is_none) {
            soup.normals.clear();
        }
        if soup.colors.iter().all(Option::is_none) {
            soup.colors.clear();
        }
        Ok(soup)
    }

    /// Build a fresh mesh. Either every face is added or an error is
    /// returned and nothing is built.
    pub fn build_mesh(&self) -> Result<Mesh, MeshLiteError> {
        self.build_mesh_with(MeshOptions::default())
    }

    pub fn build_mesh_with(&self, options: MeshOptions) -> Result<Mesh, MeshLiteError> {
        let n = self.positions.len();
        for (what, len) in [("normals", self.normals.len()), ("colors", self.colors.len())] {
            if len != 0 && len != n {
                return Err(MeshLiteError::MeshIoParse(format!(
                    "{len} {what} for {n} vertices"
                )));
            }
        }
        for (fi, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&i| i >= n) {
                return Err(MeshLiteError::MeshIoParse(format!(
                    "face {fi} references vertex {bad}, only {n} defined"
                )));
            }
        }

        let edge_hint = self.faces.iter().map(Vec::len).sum::<usize>() / 2 + 1;
        let mut mesh = Mesh::with_capacity(n, edge_hint, self.faces.len());
        *mesh.options_mut() = options;
        let handles: Vec<VertexId> = (0..n)
            .map(|i| {
                mesh.add_vertex_with(
                    self.positions[i],
                    self.normals.get(i).copied().flatten(),
                    self.colors.get(i).copied().flatten(),
                )
            })
            .collect();
        for face in &self.faces {
            let ring: Vec<VertexId> = face.iter().map(|&i| handles[i]).collect();
            mesh.add_face(&ring)?;
        }
        log::debug!(
            "built mesh: {} vertices, {} edges, {} faces",
            mesh.num_vertices(),
            mesh.num_edges(),
            mesh.num_faces()
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> PolygonSoup {
        PolygonSoup {
            positions: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            normals: vec![],
            colors: vec![],
            faces: vec![vec![0, 1, 2], vec![0, 2, 3]],
        }
    }

    #[test]
    fn build_shares_diagonal() {
        let m = two_triangles().build_mesh().unwrap();
        assert_eq!((m.num_vertices(), m.num_edges(), m.num_faces()), (4, 5, 2));
    }

    #[test]
    fn snapshot_round_trips() {
        let soup = two_triangles();
        let m = soup.build_mesh().unwrap();
        assert_eq!(PolygonSoup::from_mesh(&m).unwrap(), soup);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut soup = two_triangles();
        soup.faces.push(vec![1, 2, 9]);
        assert!(matches!(
            soup.build_mesh(),
            Err(MeshLiteError::MeshIoParse(_))
        ));
    }

    #[test]
    fn attribute_length_mismatch_is_rejected() {
        let mut soup = two_triangles();
        soup.colors = vec![Some(Color::WHITE)];
        assert!(matches!(
            soup.build_mesh(),
            Err(MeshLiteError::MeshIoParse(_))
        ));
    }

    #[test]
    fn serde_json_round_trip() {
        let soup = two_triangles();
        let json = serde_json::to_string(&soup).unwrap();
        let back: PolygonSoup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, soup);
    }
}
