//! Surface Nets extraction from raw scalar fields.
//!
//! Reads a dense grid of little-endian f32 samples described by a TOML config,
//! extracts the isosurface and writes it as Wavefront OBJ.
//!
//! ```toml
//! input = "field.raw"     # nx * ny * nz samples, X fastest
//! dims = [64, 64, 64]
//! isovalue = 0.0
//! output = "mesh.obj"
//! triangulate = false     # true: split quads into triangles
//! ```
//!
//! Set `RUST_LOG=debug` for extraction details.

mod config;
mod io;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;
use isomesh::{to_triangles, MeshConfig, ScalarField, SurfaceNets};

/// Surface Nets isosurface extractor.
#[derive(Parser, Debug)]
#[command(name = "isomesh")]
#[command(about = "Extracts an isosurface mesh from a raw scalar field")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Output OBJ path (overrides the config).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Isovalue (overrides the config).
	#[arg(short, long, allow_negative_numbers = true)]
	isovalue: Option<f32>,
}

/// Counts reported after a run.
#[derive(Debug, PartialEq)]
struct Summary {
	vertices: usize,
	faces: usize,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let args = Args::parse();

	let mut config = Config::load(&args.config)?;
	if let Some(output) = args.output {
		config.output = output;
	}
	if let Some(isovalue) = args.isovalue {
		config.isovalue = isovalue;
	}

	let summary = run(&config)?;
	tracing::info!(
		vertices = summary.vertices,
		faces = summary.faces,
		output = %config.output.display(),
		"mesh written"
	);

	Ok(())
}

/// Load, extract and write according to `config`.
fn run(config: &Config) -> Result<Summary> {
	tracing::info!(input = %config.input.display(), dims = ?config.dims, "loading field");
	let data = io::read_raw_field(&config.input)?;

	let field = ScalarField::new_strict(&data, config.dims)
		.with_context(|| format!("Invalid field: {}", config.input.display()))?;

	let mut nets = SurfaceNets::with_capacity(config.dims);
	let mesh = nets.generate(&field, &MeshConfig::new().with_isovalue(config.isovalue));

	if let Some(dir) = config.output.parent() {
		std::fs::create_dir_all(dir)
			.with_context(|| format!("Failed to create output dir: {}", dir.display()))?;
	}
	let file = File::create(&config.output)
		.with_context(|| format!("Failed to create: {}", config.output.display()))?;
	let mut out = BufWriter::new(file);

	let faces = if config.triangulate {
		let triangles = to_triangles(&mesh)?;
		io::write_triangles(&mut out, &triangles)?;
		triangles.triangle_count()
	} else {
		io::write_polygons(&mut out, &mesh)?;
		mesh.face_count()
	};
	std::io::Write::flush(&mut out)
		.with_context(|| format!("Failed to write: {}", config.output.display()))?;

	Ok(Summary {
		vertices: mesh.vertices.len(),
		faces,
	})
}
