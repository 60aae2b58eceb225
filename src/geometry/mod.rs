//! Geometry utilities for mesh-lite.
//!
//! Read-only measures computed from vertex positions and face rings, plus
//! a version-checked cache for face normals.

pub mod cache;
pub mod metrics;

pub use cache::FaceNormalCache;
pub use metrics::{
    BoundingBox, bounding_box, edge_length, face_area, face_centroid, face_normal, face_polygon,
    polygon_area,
};
