//! Sliding index buffer for face stitching.
//!
//! Holds the vertex index of every cell in the current Z-slice and the one
//! before it, so a new vertex can find its three already-visited neighbours
//! without keeping a full 3-D vertex grid.
//!
//! ```text
//! data: [ slice half 0 ][ slice half 1 ]      each half = (nx+1) × (ny+1)
//!
//! parity = 1:  current → half 1, previous → half 0, stride_z = +slice
//! parity = 0:  current → half 0, previous → half 1, stride_z = -slice
//! ```
//!
//! Each half carries one padding row and column in front of the cells so that
//! `slot - stride_x - stride_y` stays in bounds for every cell that stitches.

/// Marker for a slot with no vertex.
pub const EMPTY: u32 = u32::MAX;

pub struct IndexBuffer {
  data: Vec<u32>,
  /// Flattened offsets to the previous cell along X, Y and Z.
  strides: [isize; 3],
  /// Which half of `data` holds the current slice.
  parity: usize,
}

impl IndexBuffer {
  pub fn new() -> Self {
    Self {
      data: Vec::new(),
      strides: [1, 0, 0],
      parity: 1,
    }
  }

  /// Buffer length needed for a grid with `nx × ny` samples per slice.
  #[inline]
  pub fn required_len(nx: usize, ny: usize) -> usize {
    (nx + 1) * (ny + 1) * 2
  }

  /// Allocated capacity in slots.
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Grow to fit an `nx × ny` slice.
  pub fn reserve(&mut self, nx: usize, ny: usize) {
    let required = Self::required_len(nx, ny);
    if self.data.len() < required {
      self.data.resize(required, EMPTY);
    }
  }

  /// Prepare for a new extraction: grow if needed, clear the used region and
  /// reset slice tracking to the first slice.
  pub fn reset(&mut self, nx: usize, ny: usize) {
    self.reserve(nx, ny);
    let row = nx + 1;
    let slice = row * (ny + 1);
    self.data[..slice * 2].fill(EMPTY);
    self.strides = [1, row as isize, slice as isize];
    self.parity = 1;
  }

  /// Move to the next Z-slice; the current slice becomes the previous one.
  #[inline]
  pub fn advance_slice(&mut self) {
    self.parity ^= 1;
    self.strides[2] = -self.strides[2];
  }

  #[inline]
  pub fn stride(&self, axis: usize) -> isize {
    self.strides[axis]
  }

  /// Slot of cell `(x, y)` in the current slice.
  #[inline]
  pub fn slot(&self, x: usize, y: usize) -> usize {
    let row = self.strides[1] as usize;
    let slice = self.strides[2].unsigned_abs();
    self.parity * slice + row * (y + 1) + x + 1
  }

  #[inline]
  pub fn set(&mut self, slot: usize, vertex_index: u32) {
    self.data[slot] = vertex_index;
  }

  /// Vertex stored at `slot`, if any.
  #[inline]
  pub fn get(&self, slot: usize) -> Option<u32> {
    self.data.get(slot).copied().filter(|&v| v != EMPTY)
  }

  /// Vertex stored `offset` slots behind `slot`, if any.
  #[inline]
  pub fn behind(&self, slot: usize, offset: isize) -> Option<u32> {
    slot
      .checked_add_signed(-offset)
      .and_then(|idx| self.get(idx))
  }
}

impl Default for IndexBuffer {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "index_buffer_test.rs"]
mod index_buffer_test;
