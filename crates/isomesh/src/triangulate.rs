//! Conversion of polygon meshes into renderer-ready triangle lists.
//!
//! Engines consuming the extractor's output generally want a flat triangle
//! index buffer with the opposite winding to the one Surface Nets emits:
//!
//! ```text
//! quad     [a, b, c, d]  →  (c, b, a), (d, c, a)
//! triangle [a, b, c]     →  (c, b, a)
//! ```
//!
//! Vertices are copied unchanged. Normals and other attributes are left to
//! the consumer.

use crate::error::{ExtractError, Result};
use crate::types::MeshOutput;

/// Flat triangle mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
  pub positions: Vec<[f32; 3]>,
  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,
}

impl TriangleMesh {
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }
}

/// Split every face of `mesh` into triangles with reversed winding.
///
/// Polygons with more than four (or fewer than three) vertices are rejected,
/// as are faces that reference missing vertices.
pub fn to_triangles(mesh: &MeshOutput) -> Result<TriangleMesh> {
  let vertex_count = mesh.vertices.len();
  let mut indices = Vec::with_capacity(mesh.triangle_count() * 3);

  for (face_index, face) in mesh.faces.iter().enumerate() {
    let idx = face.indices();

    if let Some(&index) = idx.iter().find(|&&i| i as usize >= vertex_count) {
      tracing::warn!(face = face_index, index, vertex_count, "face index out of range");
      return Err(ExtractError::IndexOutOfRange {
        face: face_index,
        index,
        vertex_count,
      });
    }

    match *idx {
      [a, b, c, d] => indices.extend_from_slice(&[c, b, a, d, c, a]),
      [a, b, c] => indices.extend_from_slice(&[c, b, a]),
      _ => {
        tracing::warn!(face = face_index, len = idx.len(), "unsupported polygon");
        return Err(ExtractError::UnsupportedFace {
          face: face_index,
          len: idx.len(),
        });
      }
    }
  }

  Ok(TriangleMesh {
    positions: mesh.vertices.clone(),
    indices,
  })
}

#[cfg(test)]
#[path = "triangulate_test.rs"]
mod triangulate_test;
