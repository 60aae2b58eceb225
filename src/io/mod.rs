//! Mesh I/O helpers.
//!
//! This module provides trait-based readers and writers for loading and
//! saving a [`Mesh`], plus the [`PolygonSoup`] exchange form they share.

pub mod off;
pub mod soup;

use std::io::{Read, Write};

use crate::mesh_error::MeshLiteError;
use crate::topology::mesh::Mesh;

pub use off::{OffReader, OffWriter, read_off, write_off};
pub use soup::PolygonSoup;

/// Trait for readers that build a mesh from a byte stream.
pub trait MeshReader {
    /// Parse a mesh from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<Mesh, MeshLiteError>;
}

/// Trait for writers that serialize a mesh.
pub trait MeshWriter {
    /// Write the mesh to a writer.
    fn write<W: Write>(&self, writer: W, mesh: &Mesh) -> Result<(), MeshLiteError>;
}
