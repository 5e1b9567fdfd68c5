//! Borrowed view of a dense scalar grid.
//!
//! # Memory Layout
//!
//! ```text
//! Row-major, X innermost:
//!
//! index = x + nx * (y + ny * z)
//!
//! Address:  0       1       ...  nx-1        nx      ...
//! Content: [0,0,0] [1,0,0]  ... [nx-1,0,0]  [0,1,0]  ...
//!          └──────────── X ────────────┘
//! ```

use crate::error::{ExtractError, Result};

/// Immutable scalar field with explicit dimensions.
///
/// The field is owned by the caller; extraction only reads from it.
#[derive(Clone, Copy, Debug)]
pub struct ScalarField<'a> {
  data: &'a [f32],
  dims: [usize; 3],
}

impl<'a> ScalarField<'a> {
  /// Wrap `data` as an `nx × ny × nz` grid.
  ///
  /// Axes with fewer than two samples are accepted; such a grid has no
  /// complete cell and extracts to an empty mesh.
  pub fn new(data: &'a [f32], dims: [usize; 3]) -> Result<Self> {
    let expected = sample_count(dims)?;
    if data.len() != expected {
      return Err(ExtractError::FieldLengthMismatch {
        expected,
        actual: data.len(),
      });
    }
    Ok(Self { data, dims })
  }

  /// Like [`ScalarField::new`] but also rejects axes shorter than 2.
  pub fn new_strict(data: &'a [f32], dims: [usize; 3]) -> Result<Self> {
    if dims.iter().any(|&d| d < 2) {
      return Err(ExtractError::InvalidDimensions { dims });
    }
    Self::new(data, dims)
  }

  #[inline]
  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  #[inline]
  pub fn data(&self) -> &'a [f32] {
    self.data
  }

  /// Flat index of sample `(x, y, z)`.
  #[inline(always)]
  pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
    x + self.dims[0] * (y + self.dims[1] * z)
  }

  #[inline(always)]
  pub fn sample(&self, x: usize, y: usize, z: usize) -> f32 {
    self.data[self.index(x, y, z)]
  }

  /// Number of complete cubic cells in the grid.
  pub fn cell_count(&self) -> usize {
    self
      .dims
      .iter()
      .map(|&d| d.saturating_sub(1))
      .product()
  }

  /// True if at least one complete cell exists.
  pub fn has_cells(&self) -> bool {
    self.dims.iter().all(|&d| d >= 2)
  }

  /// Volume offsets of the 8 cell corners relative to the cell origin, in
  /// corner-label order (bit 0 = X, bit 1 = Y, bit 2 = Z).
  pub fn corner_offsets(&self) -> [usize; 8] {
    let dx = 1;
    let dy = self.dims[0];
    let dz = self.dims[0] * self.dims[1];
    std::array::from_fn(|corner| {
      (corner & 1) * dx + ((corner >> 1) & 1) * dy + ((corner >> 2) & 1) * dz
    })
  }
}

/// Checked `nx * ny * nz`.
pub(crate) fn sample_count(dims: [usize; 3]) -> Result<usize> {
  dims[0]
    .checked_mul(dims[1])
    .and_then(|n| n.checked_mul(dims[2]))
    .ok_or(ExtractError::DimensionOverflow { dims })
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
