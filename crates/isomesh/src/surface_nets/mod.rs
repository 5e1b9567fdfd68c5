//! Naive Surface Nets meshing algorithm.
//!
//! Converts a dense scalar grid into a quad mesh approximating the isosurface
//! `field(p) == isovalue`.
//!
//! # Algorithm Overview
//!
//! Surface Nets is a dual method: it generates ONE vertex per cell containing
//! a surface crossing, placed at the mean of that cell's edge crossings, and
//! connects the vertices of the four cells around every crossing edge with a
//! quad.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: &[f32]           - nx × ny × nz samples, X fastest      │
//! │  isovalue: f32           - surface threshold                    │
//! │  EDGE_TABLE: [u16; 256]  - compile-time edge lookup             │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Corner Classification               │
//! │  For each 2×2×2 cell (z outer, then y, then x):                 │
//! │    Load 8 samples, subtract isovalue                            │
//! │    Build 8-bit corner mask from "value < 0"                     │
//! │    Early-out if homogeneous (mask == 0 or mask == 255)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Vertex Placement                    │
//! │    Lookup edge mask from EDGE_TABLE[corner_mask]                │
//! │    Mean of edge crossings, offset by the cell origin            │
//! │    Normalize each axis: 2 * v / dim - 1                         │
//! │    Store vertex, record its index in the sliding buffer         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Face Stitching                      │
//! │  For each crossing axis edge (edges 0, 1, 2):                   │
//! │    Skip if either orthogonal coordinate is 0                    │
//! │    Fetch 3 earlier neighbours from the sliding buffer           │
//! │    Emit quad, winding chosen by corner 0's side                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  vertices: Vec<[f32; 3]> - normalized to [-1, 1]                │
//! │  faces: Vec<Face>        - quads                                │
//! │  bounds: AABB            - vertex bounding box                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Non-finite samples
//!
//! `NaN` samples never compare below the isovalue, so they classify as
//! outside. Infinite samples classify by sign but may yield non-finite vertex
//! positions. Neither is rejected.

mod corner_mask;
mod index_buffer;
mod vertex_calc;

pub use vertex_calc::DEGENERATE_EPSILON;

use index_buffer::IndexBuffer;
use vertex_calc::Vec3A;

use crate::edge_table::EDGE_TABLE;
use crate::error::Result;
use crate::field::ScalarField;
use crate::types::{Face, MeshConfig, MeshOutput};

/// Reusable Surface Nets extractor.
///
/// Owns the sliding index buffer so repeated extractions do not reallocate.
/// The buffer grows to the largest slice seen and is never shrunk. Concurrent
/// extractions each need their own `SurfaceNets`.
#[derive(Default)]
pub struct SurfaceNets {
  index_buffer: IndexBuffer,
}

impl SurfaceNets {
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an extractor with scratch space for grids up to `dims`.
  pub fn with_capacity(dims: [usize; 3]) -> Self {
    let mut index_buffer = IndexBuffer::new();
    index_buffer.reserve(dims[0], dims[1]);
    Self { index_buffer }
  }

  /// Current scratch capacity in index slots.
  pub fn scratch_len(&self) -> usize {
    self.index_buffer.len()
  }

  /// Extract the isosurface of `field` into a new mesh.
  pub fn generate(&mut self, field: &ScalarField<'_>, config: &MeshConfig) -> MeshOutput {
    let mut output = MeshOutput::new();
    self.generate_into(field, config, &mut output);
    output
  }

  /// Extract the isosurface of `field` into `output`, replacing its contents
  /// but keeping its allocations.
  #[tracing::instrument(skip_all, name = "surface_nets::generate", fields(dims = ?field.dims()))]
  pub fn generate_into(
    &mut self,
    field: &ScalarField<'_>,
    config: &MeshConfig,
    output: &mut MeshOutput,
  ) {
    output.clear();

    if !field.has_cells() {
      tracing::debug!("grid has no complete cell");
      return;
    }

    let [nx, ny, nz] = field.dims();
    let dims = Vec3A::new(nx as f32, ny as f32, nz as f32);
    let offsets = field.corner_offsets();
    let data = field.data();

    self.index_buffer.reset(nx, ny);

    for z in 0..nz - 1 {
      for y in 0..ny - 1 {
        for x in 0..nx - 1 {
          let base = field.index(x, y, z);
          let samples: [f32; 8] =
            std::array::from_fn(|i| data[base + offsets[i]] - config.isovalue);

          process_cell(
            [x, y, z],
            &samples,
            dims,
            &mut self.index_buffer,
            output,
          );
        }
      }
      self.index_buffer.advance_slice();
    }

    tracing::debug!(
      vertices = output.vertices.len(),
      faces = output.faces.len(),
      "extracted surface"
    );
  }
}

/// Extract the isosurface of `field` with a fresh scratch buffer.
pub fn generate(field: &ScalarField<'_>, config: &MeshConfig) -> MeshOutput {
  SurfaceNets::new().generate(field, config)
}

/// Validate `data` as an `nx × ny × nz` grid and extract the surface at
/// `isovalue`.
///
/// Grids with an axis shorter than 2 produce an empty mesh. A buffer whose
/// length does not match the dimensions is rejected.
pub fn extract(data: &[f32], dims: [usize; 3], isovalue: f32) -> Result<MeshOutput> {
  let field = ScalarField::new(data, dims)?;
  Ok(generate(&field, &MeshConfig::new().with_isovalue(isovalue)))
}

/// Process a single 2×2×2 cell: place its vertex and stitch its faces.
fn process_cell(
  pos: [usize; 3],
  samples: &[f32; 8],
  dims: Vec3A,
  index_buffer: &mut IndexBuffer,
  output: &mut MeshOutput,
) {
  let [x, y, z] = pos;

  let corner_mask = corner_mask::build(samples);

  // Early exit for homogeneous cells (all inside or all outside)
  if corner_mask::is_homogeneous(corner_mask) {
    return;
  }

  let edge_mask = EDGE_TABLE[corner_mask as usize];

  let cell_origin = Vec3A::new(x as f32, y as f32, z as f32);
  let position = cell_origin + vertex_calc::compute_position(samples, edge_mask);
  let normalized = (2.0 * position / dims - Vec3A::ONE).to_array();

  let Some(vertex_index) = vertex_index(output.vertices.len()) else {
    debug_assert!(false, "vertex count exceeds u32 index range");
    return;
  };
  let slot = index_buffer.slot(x, y);
  index_buffer.set(slot, vertex_index);

  output.vertices.push(normalized);
  output.bounds.encapsulate(normalized);

  emit_faces(pos, slot, edge_mask, corner_mask, index_buffer, output);
}

/// Index for the next vertex, or `None` once it would collide with the
/// empty slot marker.
#[inline]
fn vertex_index(len: usize) -> Option<u32> {
  u32::try_from(len).ok().filter(|&index| index != index_buffer::EMPTY)
}

/// Emit one quad per crossing axis edge of the cell, connecting it to the
/// three earlier cells that share that edge.
fn emit_faces(
  pos: [usize; 3],
  slot: usize,
  edge_mask: u16,
  corner_mask: u8,
  index_buffer: &IndexBuffer,
  output: &mut MeshOutput,
) {
  let corner0_inside = corner_mask & 1 != 0;

  // Edges 0, 1, 2 leave corner 0 along X, Y, Z.
  for axis in 0..3 {
    if edge_mask & (1 << axis) == 0 {
      continue;
    }

    let u = (axis + 1) % 3;
    let v = (axis + 2) % 3;

    // Cells on the low boundary have no earlier neighbours to stitch to
    if pos[u] == 0 || pos[v] == 0 {
      continue;
    }

    let du = index_buffer.stride(u);
    let dv = index_buffer.stride(v);

    let (Some(a), Some(b), Some(c), Some(d)) = (
      index_buffer.get(slot),
      index_buffer.behind(slot, du),
      index_buffer.behind(slot, du + dv),
      index_buffer.behind(slot, dv),
    ) else {
      debug_assert!(false, "missing neighbour vertex at {:?} axis {}", pos, axis);
      continue;
    };

    let face = if corner0_inside {
      [a, b, c, d]
    } else {
      [a, d, c, b]
    };
    output.faces.push(Face::quad(face));
  }
}
