//! Vertex position calculation for Surface Nets.

pub use glam::Vec3A;

use crate::edge_table::{EDGE_CORNERS, EDGE_COUNT};

/// Crossings whose corner values differ by no more than this are skipped.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Precomputed corner positions within unit cube.
/// Layout matches corner index bits: corner i = (x=bit0, y=bit1, z=bit2)
pub const CORNER_POSITIONS: [Vec3A; 8] = [
  Vec3A::new(0.0, 0.0, 0.0), // 0b000
  Vec3A::new(1.0, 0.0, 0.0), // 0b001
  Vec3A::new(0.0, 1.0, 0.0), // 0b010
  Vec3A::new(1.0, 1.0, 0.0), // 0b011
  Vec3A::new(0.0, 0.0, 1.0), // 0b100
  Vec3A::new(1.0, 0.0, 1.0), // 0b101
  Vec3A::new(0.0, 1.0, 1.0), // 0b110
  Vec3A::new(1.0, 1.0, 1.0), // 0b111
];

/// Interpolation factor of the zero crossing along an edge, or `None` when
/// the edge is too flat to interpolate.
#[inline]
pub fn crossing_factor(g0: f32, g1: f32) -> Option<f32> {
  let denom = g0 - g1;
  if denom.abs() > DEGENERATE_EPSILON {
    Some(g0 / denom)
  } else {
    None
  }
}

/// Compute the cell-local vertex position as the mean of the edge crossings
/// selected by `edge_mask`.
///
/// Every edge in the mask counts towards the mean. A degenerate edge adds
/// nothing to the sum, which pulls the vertex toward the cell origin but
/// keeps it inside the unit cube. The result lies in `[0, 1]³` for finite
/// samples.
#[inline]
pub fn compute_position(samples: &[f32; 8], edge_mask: u16) -> Vec3A {
  let mut sum = Vec3A::ZERO;
  let mut count = 0u32;

  for edge in 0..EDGE_COUNT {
    if edge_mask & (1 << edge) == 0 {
      continue;
    }
    count += 1;

    let [c0, c1] = EDGE_CORNERS[edge];
    let (c0, c1) = (c0 as usize, c1 as usize);

    if let Some(t) = crossing_factor(samples[c0], samples[c1]) {
      let p0 = CORNER_POSITIONS[c0];
      let p1 = CORNER_POSITIONS[c1];
      sum += p0 + t * (p1 - p0);
    }
  }

  if count == 0 {
    return Vec3A::splat(0.5); // Fallback to center
  }

  sum / count as f32
}

#[cfg(test)]
#[path = "vertex_calc_test.rs"]
mod vertex_calc_test;
