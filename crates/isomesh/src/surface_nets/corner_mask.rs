//! Corner mask computation.
//!
//! The corner mask is an 8-bit value where each bit indicates whether a corner
//! of the 2x2x2 cell is inside the surface (negative value after subtracting
//! the isovalue).

/// Build corner mask from 8 isovalue-relative samples.
///
/// Each bit in the result corresponds to one corner:
/// - Bit 0: corner (0,0,0)
/// - Bit 1: corner (1,0,0)
/// - Bit 2: corner (0,1,0)
/// - Bit 3: corner (1,1,0)
/// - Bit 4: corner (0,0,1)
/// - Bit 5: corner (1,0,1)
/// - Bit 6: corner (0,1,1)
/// - Bit 7: corner (1,1,1)
///
/// A bit is set if the corresponding sample is strictly negative. `NaN`
/// compares false, so a `NaN` corner never sets its bit.
#[inline]
pub fn build(samples: &[f32; 8]) -> u8 {
  samples
    .iter()
    .enumerate()
    .fold(0u8, |mask, (i, &s)| mask | (((s < 0.0) as u8) << i))
}

/// True if every corner is on the same side of the surface.
#[inline(always)]
pub fn is_homogeneous(mask: u8) -> bool {
  mask == 0 || mask == 0xFF
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
