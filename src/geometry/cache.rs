//! Memoised face normals tied to a mesh version.

use hashbrown::HashMap;

use crate::geometry::metrics::face_normal;
use crate::mesh_error::MeshLiteError;
use crate::topology::cache::{InvalidateCache, MeshVersion};
use crate::topology::handle::FaceId;
use crate::topology::mesh::Mesh;

/// Face normals computed on demand. Any successful edit of the mesh moves
/// its version and empties the cache on the next lookup.
#[derive(Debug, Default, Clone)]
pub struct FaceNormalCache {
    built_for: Option<MeshVersion>,
    normals: HashMap<FaceId, [f64; 3]>,
}

impl FaceNormalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoised normals.
    pub fn len(&self) -> usize {
        self.normals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }

    /// Normal of `f`, computed at most once per mesh version.
    pub fn normal(&mut self, mesh: &Mesh, f: FaceId) -> Result<[f64; 3], MeshLiteError> {
        if self.built_for != Some(mesh.version()) {
            if self.built_for.is_some() {
                log::trace!("face normal cache stale at {:?}", mesh.version());
            }
            self.invalidate_cache();
            self.built_for = Some(mesh.version());
        }
        if let Some(n) = self.normals.get(&f) {
            return Ok(*n);
        }
        let n = face_normal(mesh, f)?;
        self.normals.insert(f, n);
        Ok(n)
    }
}

impl InvalidateCache for FaceNormalCache {
    fn invalidate_cache(&mut self) {
        self.normals.clear();
        self.built_for = None;
    }
}
