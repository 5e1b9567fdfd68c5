//! Error types for field validation and mesh conversion.

use thiserror::Error;

/// Errors returned by the extractor and the triangle adapter.
///
/// Extraction itself cannot fail once its input is validated; every variant
/// here describes malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
  /// A grid axis has fewer than two samples (strict validation only).
  #[error("invalid grid dimensions {dims:?}: every axis needs at least 2 samples")]
  InvalidDimensions { dims: [usize; 3] },

  /// Field buffer length does not match `nx * ny * nz`.
  #[error("field has {actual} samples but dimensions require {expected}")]
  FieldLengthMismatch { expected: usize, actual: usize },

  /// `nx * ny * nz` does not fit in `usize`.
  #[error("grid dimensions {dims:?} overflow the addressable size")]
  DimensionOverflow { dims: [usize; 3] },

  /// A face has a vertex count the triangle adapter cannot split.
  #[error("face {face} has {len} indices; only triangles and quads are supported")]
  UnsupportedFace { face: usize, len: usize },

  /// A face references a vertex that does not exist.
  #[error("face {face} references vertex {index} but mesh has {vertex_count} vertices")]
  IndexOutOfRange {
    face: usize,
    index: u32,
    vertex_count: usize,
  },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
