//! Parallel extraction of independent fields.
//!
//! Thin wrapper around [`SurfaceNets`] that:
//! - Processes inputs in parallel via rayon
//! - Gives every task its own scratch buffer
//! - Tracks timing per mesh
//! - Preserves a caller tag for routing
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Batch Extraction                                                        │
//! │                                                                         │
//! │  ExtractInput { data, dims, config, tag }                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────┐            │
//! │  │ ScalarField::new(&data, dims)?                          │            │
//! │  │ SurfaceNets::generate(&field, &config)                  │            │
//! │  └─────────────────────────────────────────────────────────┘            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ExtractResult { tag, output: Result<MeshOutput>, timing_us }           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use web_time::Instant;

use rayon::prelude::*;

use crate::error::Result;
use crate::field::ScalarField;
use crate::surface_nets::SurfaceNets;
use crate::types::{MeshConfig, MeshOutput};

/// One field to extract.
#[derive(Clone, Debug)]
pub struct ExtractInput {
  pub data: Vec<f32>,
  pub dims: [usize; 3],
  pub config: MeshConfig,
  /// Caller-defined identifier carried through to the result.
  pub tag: u64,
}

/// Result of extracting one [`ExtractInput`].
#[derive(Debug)]
pub struct ExtractResult {
  pub tag: u64,
  pub output: Result<MeshOutput>,
  /// Wall time spent validating and extracting, in microseconds.
  pub timing_us: u64,
}

/// Extract a single input using `nets` as scratch space.
pub fn extract_with(nets: &mut SurfaceNets, input: &ExtractInput) -> ExtractResult {
  let start = Instant::now();
  let output = ScalarField::new(&input.data, input.dims)
    .map(|field| nets.generate(&field, &input.config));
  let timing_us = start.elapsed().as_micros() as u64;

  if let Err(err) = &output {
    tracing::warn!(tag = input.tag, %err, "rejected extraction input");
  }

  ExtractResult {
    tag: input.tag,
    output,
    timing_us,
  }
}

/// Extract a single input with a fresh scratch buffer.
pub fn extract_one(input: &ExtractInput) -> ExtractResult {
  extract_with(&mut SurfaceNets::new(), input)
}

/// Extract multiple inputs in parallel using rayon.
///
/// Each worker thread keeps its own [`SurfaceNets`]. Results maintain the
/// same order as inputs for deterministic output.
#[tracing::instrument(skip_all, name = "batch::extract_batch", fields(count = inputs.len()))]
pub fn extract_batch(inputs: &[ExtractInput]) -> Vec<ExtractResult> {
  if inputs.is_empty() {
    return Vec::new();
  }

  inputs
    .par_iter()
    .map_init(SurfaceNets::new, extract_with)
    .collect()
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
