//! Configuration parsing for field extraction.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration for one extraction run.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Raw field file: `nx * ny * nz` little-endian f32 samples, X fastest.
	pub input: PathBuf,
	/// Grid dimensions `[nx, ny, nz]`.
	pub dims: [usize; 3],
	/// Surface threshold.
	#[serde(default)]
	pub isovalue: f32,
	/// Output OBJ path.
	#[serde(default = "default_output")]
	pub output: PathBuf,
	/// Write triangles instead of quads.
	#[serde(default)]
	pub triangulate: bool,
}

fn default_output() -> PathBuf {
	PathBuf::from("mesh.obj")
}

impl Config {
	/// Load configuration from a TOML file.
	///
	/// Relative `input` and `output` paths are resolved against the config
	/// file's directory.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let mut config = Self::parse(&content)?;

		let base = path.parent().unwrap_or(Path::new("."));
		config.input = base.join(&config.input);
		config.output = base.join(&config.output);

		Ok(config)
	}

	/// Parse and validate configuration text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if !config.isovalue.is_finite() {
			anyhow::bail!("isovalue must be finite, got {}", config.isovalue);
		}

		Ok(config)
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
