//! Raw field loading and Wavefront OBJ output.

use anyhow::{Context, Result};
use isomesh::{MeshOutput, TriangleMesh};
use std::io::Write;
use std::path::Path;

const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Decode little-endian f32 samples.
pub fn decode_samples(bytes: &[u8]) -> Result<Vec<f32>> {
	if bytes.len() % SAMPLE_BYTES != 0 {
		anyhow::bail!(
			"raw field size {} is not a multiple of {} bytes",
			bytes.len(),
			SAMPLE_BYTES
		);
	}

	Ok(bytes
		.chunks_exact(SAMPLE_BYTES)
		.map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
		.collect())
}

/// Read a raw little-endian f32 field file.
pub fn read_raw_field(path: &Path) -> Result<Vec<f32>> {
	let bytes =
		std::fs::read(path).with_context(|| format!("Failed to read field: {}", path.display()))?;
	decode_samples(&bytes).with_context(|| format!("Invalid field file: {}", path.display()))
}

/// Write vertices and polygon faces as OBJ. Indices are 1-based.
pub fn write_polygons<W: Write>(out: &mut W, mesh: &MeshOutput) -> Result<()> {
	write_vertices(out, &mesh.vertices)?;
	for face in &mesh.faces {
		write!(out, "f")?;
		for &index in face.indices() {
			write!(out, " {}", index + 1)?;
		}
		writeln!(out)?;
	}
	Ok(())
}

/// Write a triangle mesh as OBJ. Indices are 1-based.
pub fn write_triangles<W: Write>(out: &mut W, mesh: &TriangleMesh) -> Result<()> {
	write_vertices(out, &mesh.positions)?;
	for tri in mesh.indices.chunks_exact(3) {
		writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
	}
	Ok(())
}

fn write_vertices<W: Write>(out: &mut W, vertices: &[[f32; 3]]) -> Result<()> {
	for [x, y, z] in vertices {
		writeln!(out, "v {} {} {}", x, y, z)?;
	}
	Ok(())
}

#[cfg(test)]
#[path = "io_test.rs"]
mod io_test;
