//! isomesh - Surface Nets isosurface extraction
//!
//! This crate extracts a polygonal approximation of an isosurface from a dense
//! 3-D grid of scalar samples. It emits one vertex per grid cell the surface
//! passes through and stitches the vertices of neighbouring cells into quads,
//! keeping only two Z-slices of vertex indices in memory.
//!
//! # Features
//!
//! - **Naive Surface Nets**: single-pass extraction with centroid-based vertex
//!   placement, vertices normalized to `[-1, 1]`
//! - **Reusable scratch**: [`SurfaceNets`] keeps its sliding index buffer
//!   between calls
//! - **Triangle adapter**: [`triangulate::to_triangles`] splits quads for
//!   renderers
//! - **Batch extraction**: [`batch::extract_batch`] meshes independent fields
//!   on rayon's pool
//!
//! # Example
//!
//! ```
//! use isomesh::{surface_nets, MeshConfig, ScalarField};
//!
//! // 2×2×2 grid split along Z: bottom inside, top outside
//! let data = [-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0];
//! let field = ScalarField::new(&data, [2, 2, 2])?;
//!
//! let output = surface_nets::generate(&field, &MeshConfig::default());
//!
//! assert_eq!(output.vertices, vec![[-0.5, -0.5, -0.5]]);
//! assert_eq!(output.face_count(), 0);
//! # Ok::<(), isomesh::ExtractError>(())
//! ```

pub mod edge_table;
pub mod error;
pub mod field;
pub mod types;

// Re-export commonly used items
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE};
pub use error::{ExtractError, Result};
pub use field::ScalarField;
pub use types::{Face, MeshConfig, MeshOutput, MinMaxAABB};

// Surface Nets module
pub mod surface_nets;
pub use surface_nets::{extract, SurfaceNets};

// Renderer-facing triangle conversion
pub mod triangulate;
pub use triangulate::{to_triangles, TriangleMesh};

// Parallel extraction of independent fields
pub mod batch;
pub use batch::{extract_batch, ExtractInput, ExtractResult};

#[cfg(test)]
pub mod test_utils;
