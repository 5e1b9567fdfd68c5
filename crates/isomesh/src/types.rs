//! Core data types for Surface Nets meshing.

use smallvec::SmallVec;

/// Polygon of vertex indices.
///
/// The extractor only ever emits quads, but the type also holds triangles and
/// larger polygons coming from other producers. Up to four indices are stored
/// inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Face(SmallVec<[u32; 4]>);

impl Face {
  pub fn quad(indices: [u32; 4]) -> Self {
    Self(SmallVec::from_buf(indices))
  }

  pub fn triangle(indices: [u32; 3]) -> Self {
    Self(SmallVec::from_slice(&indices))
  }

  pub fn from_slice(indices: &[u32]) -> Self {
    Self(SmallVec::from_slice(indices))
  }

  /// Number of vertices in the polygon.
  #[inline]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[inline]
  pub fn indices(&self) -> &[u32] {
    &self.0
  }
}

impl From<[u32; 4]> for Face {
  fn from(indices: [u32; 4]) -> Self {
    Self::quad(indices)
  }
}

impl From<[u32; 3]> for Face {
  fn from(indices: [u32; 3]) -> Self {
    Self::triangle(indices)
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Mesh extraction result.
///
/// Vertex positions are normalized to `[-1, 1]` per axis. Faces reference
/// vertices by their creation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshOutput {
  pub vertices: Vec<[f32; 3]>,
  pub faces: Vec<Face>,
  /// Bounding box of all vertices (empty when there are none).
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.faces.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn face_count(&self) -> usize {
    self.faces.len()
  }

  /// Triangles produced when every face is fanned from its first vertex.
  pub fn triangle_count(&self) -> usize {
    self.faces.iter().map(|f| f.len().saturating_sub(2)).sum()
  }
}

/// Configuration for mesh extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshConfig {
  /// Threshold the surface is extracted at: `field(p) - isovalue == 0`.
  pub isovalue: f32,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self { isovalue: 0.0 }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_isovalue(mut self, isovalue: f32) -> Self {
    self.isovalue = isovalue;
    self
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
