//! Field fixtures shared by the crate's tests.

use std::collections::HashMap;

use crate::types::MeshOutput;

/// Build an `nx × ny × nz` field (X fastest) by evaluating `f` at every sample.
pub fn field_from_fn(dims: [usize; 3], f: impl Fn(usize, usize, usize) -> f32) -> Vec<f32> {
  let [nx, ny, nz] = dims;
  let mut data = Vec::with_capacity(nx * ny * nz);
  for z in 0..nz {
    for y in 0..ny {
      for x in 0..nx {
        data.push(f(x, y, z));
      }
    }
  }
  data
}

/// Signed distance to a sphere, negative inside.
pub fn sphere_field(dims: [usize; 3], center: [f32; 3], radius: f32) -> Vec<f32> {
  field_from_fn(dims, |x, y, z| {
    let dx = x as f32 - center[0];
    let dy = y as f32 - center[1];
    let dz = z as f32 - center[2];
    (dx * dx + dy * dy + dz * dz).sqrt() - radius
  })
}

/// Field that is `1.0` everywhere except `-1.0` at `point`.
pub fn single_inside_sample(dims: [usize; 3], point: [usize; 3]) -> Vec<f32> {
  field_from_fn(dims, |x, y, z| {
    if [x, y, z] == point {
      -1.0
    } else {
      1.0
    }
  })
}

/// Number of faces using each directed edge `(from, to)`.
pub fn directed_edges(output: &MeshOutput) -> HashMap<(u32, u32), usize> {
  let mut edges = HashMap::new();
  for face in &output.faces {
    let indices = face.indices();
    for i in 0..indices.len() {
      let edge = (indices[i], indices[(i + 1) % indices.len()]);
      *edges.entry(edge).or_insert(0) += 1;
    }
  }
  edges
}

/// True if every edge is used exactly once in each direction.
pub fn is_closed_and_consistently_wound(output: &MeshOutput) -> bool {
  let edges = directed_edges(output);
  edges
    .iter()
    .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
}
