//! Object File Format (`.off`) reader and writer.
//!
//! # Supported format
//! - ASCII `OFF` and `COFF` headers; counts may follow on the header line.
//! - `COFF` vertices carry `r g b [a]` after the position, either as
//!   floats in `[0, 1]` or integers in `[0, 255]`, told apart by the
//!   token syntax. Alpha is ignored.
//! - `#` starts a comment that runs to the end of the line.
//!
//! # Limitations
//! - Binary OFF and `NOFF`/`4OFF` variants are not supported.
//! - Per-face colours are skipped on read and never written.
//! - Vertex normals are not stored.

use std::io::{Read, Write};

use crate::io::soup::PolygonSoup;
use crate::io::{MeshReader, MeshWriter};
use crate::mesh_error::MeshLiteError;
use crate::topology::mesh::Mesh;
use crate::topology::records::Color;

/// ASCII OFF reader.
#[derive(Debug, Default, Clone)]
pub struct OffReader;

/// ASCII OFF writer. Emits `COFF` when any vertex has a colour; vertices
/// without one are written with `fallback_color`.
#[derive(Debug, Clone)]
pub struct OffWriter {
    pub fallback_color: Color,
}

impl Default for OffWriter {
    fn default() -> Self {
        Self {
            fallback_color: Color::WHITE,
        }
    }
}

impl OffReader {
    fn parse_usize(raw: &str, what: &str) -> Result<usize, MeshLiteError> {
        raw.parse::<usize>()
            .map_err(|_| MeshLiteError::MeshIoParse(format!("invalid {what}: {raw}")))
    }

    fn parse_f64(raw: &str, what: &str) -> Result<f64, MeshLiteError> {
        raw.parse::<f64>()
            .map_err(|_| MeshLiteError::MeshIoParse(format!("invalid {what}: {raw}")))
    }

    fn parse_color(parts: &[&str]) -> Result<Color, MeshLiteError> {
        let tokens = &parts[..parts.len().min(3)];
        let rgb = tokens
            .iter()
            .map(|p| {
                p.parse::<f32>().map_err(|_| {
                    MeshLiteError::MeshIoParse(format!("invalid colour component: {p}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        // Integer tokens are 0-255 channels; anything with a fraction or
        // exponent is already in [0, 1].
        let integral = tokens.iter().all(|p| !p.contains(['.', 'e', 'E']));
        let scale = if integral { 255.0 } else { 1.0 };
        Ok(Color::new(rgb[0] / scale, rgb[1] / scale, rgb[2] / scale))
    }

    /// Parse OFF text into a polygon soup.
    pub fn parse(&self, contents: &str) -> Result<PolygonSoup, MeshLiteError> {
        let mut lines = contents
            .lines()
            .map(|l| l.split('#').next().unwrap_or("").trim())
            .filter(|l| !l.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| MeshLiteError::MeshIoParse("empty OFF input".into()))?;
        let mut head = header.split_whitespace();
        let colored = match head.next() {
            Some("OFF") => false,
            Some("COFF") => true,
            other => {
                return Err(MeshLiteError::MeshIoParse(format!(
                    "unsupported OFF header: {}",
                    other.unwrap_or_default()
                )));
            }
        };
        let rest: Vec<&str> = head.collect();
        let counts: Vec<&str> = if rest.is_empty() {
            lines
                .next()
                .ok_or_else(|| MeshLiteError::MeshIoParse("missing OFF counts".into()))?
                .split_whitespace()
                .collect()
        } else {
            rest
        };
        if counts.len() < 2 {
            return Err(MeshLiteError::MeshIoParse("missing OFF counts".into()));
        }
        let nv = Self::parse_usize(counts[0], "vertex count")?;
        let nf = Self::parse_usize(counts[1], "face count")?;

        let mut soup = PolygonSoup {
            // Header counts are untrusted; never reserve more than the
            // input could possibly describe.
            positions: Vec::with_capacity(nv.min(contents.len())),
            faces: Vec::with_capacity(nf.min(contents.len())),
            ..PolygonSoup::default()
        };
        for _ in 0..nv {
            let line = lines
                .next()
                .ok_or_else(|| MeshLiteError::MeshIoParse("unexpected end of vertex list".into()))?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                return Err(MeshLiteError::MeshIoParse(format!(
                    "vertex line needs 3 coordinates: {line}"
                )));
            }
            soup.positions.push([
                Self::parse_f64(parts[0], "x coordinate")?,
                Self::parse_f64(parts[1], "y coordinate")?,
                Self::parse_f64(parts[2], "z coordinate")?,
            ]);
            if colored {
                if parts.len() < 6 {
                    return Err(MeshLiteError::MeshIoParse(format!(
                        "COFF vertex line needs a colour: {line}"
                    )));
                }
                soup.colors.push(Some(Self::parse_color(&parts[3..])?));
            }
        }
        for _ in 0..nf {
            let line = lines
                .next()
                .ok_or_else(|| MeshLiteError::MeshIoParse("unexpected end of face list".into()))?;
            let mut parts = line.split_whitespace();
            let k = Self::parse_usize(
                parts
                    .next()
                    .ok_or_else(|| MeshLiteError::MeshIoParse("missing face size".into()))?,
                "face size",
            )?;
            let ring = parts
                .by_ref()
                .take(k)
                .map(|p| Self::parse_usize(p, "vertex index"))
                .collect::<Result<Vec<_>, _>>()?;
            if ring.len() != k {
                return Err(MeshLiteError::MeshIoParse(format!(
                    "face declares {k} vertices, found {}",
                    ring.len()
                )));
            }
            soup.faces.push(ring);
        }
        Ok(soup)
    }
}

impl MeshReader for OffReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<Mesh, MeshLiteError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        self.parse(&contents)?.build_mesh()
    }
}

impl MeshWriter for OffWriter {
    fn write<W: Write>(&self, mut writer: W, mesh: &Mesh) -> Result<(), MeshLiteError> {
        let soup = PolygonSoup::from_mesh(mesh)?;
        let colored = !soup.colors.is_empty();
        writeln!(writer, "{}", if colored { "COFF" } else { "OFF" })?;
        writeln!(
            writer,
            "{} {} {}",
            soup.positions.len(),
            soup.faces.len(),
            face_edge_count(mesh)
        )?;
        for (i, p) in soup.positions.iter().enumerate() {
            write!(writer, "{} {} {}", p[0], p[1], p[2])?;
            if colored {
                let c = soup.colors[i].unwrap_or(self.fallback_color);
                write!(writer, " {:?} {:?} {:?} 1.0", c.r, c.g, c.b)?;
            }
            writeln!(writer)?;
        }
        for face in &soup.faces {
            write!(writer, "{}", face.len())?;
            for i in face {
                write!(writer, " {i}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Edges bounding at least one face; faceless edges are not written.
fn face_edge_count(mesh: &Mesh) -> usize {
    mesh.edge_handles()
        .filter(|&e| mesh.edge_face_count(e).is_ok_and(|n| n > 0))
        .count()
}

/// Read a mesh from OFF text.
pub fn read_off<R: Read>(reader: R) -> Result<Mesh, MeshLiteError> {
    OffReader.read(reader)
}

/// Write `mesh` as OFF text.
pub fn write_off<W: Write>(writer: W, mesh: &Mesh) -> Result<(), MeshLiteError> {
    OffWriter::default().write(writer, mesh)
}
