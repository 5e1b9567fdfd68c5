use super::*;

// Face tests
#[test]
fn test_quad_face_is_inline() {
  let face = Face::quad([0, 1, 2, 3]);

  assert_eq!(face.len(), 4);
  assert_eq!(face.indices(), &[0, 1, 2, 3]);
  assert!(!face.0.spilled());
}

#[test]
fn test_triangle_face() {
  let face: Face = [4, 5, 6].into();

  assert_eq!(face.len(), 3);
  assert_eq!(face.indices(), &[4, 5, 6]);
}

#[test]
fn test_large_polygon_spills() {
  let face = Face::from_slice(&[0, 1, 2, 3, 4]);

  assert_eq!(face.len(), 5);
  assert!(face.0.spilled());
}

// General types tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_mesh_output_clear() {
  let mut output = MeshOutput::new();
  output.vertices.push([0.0; 3]);
  output.faces.push(Face::quad([0, 0, 0, 0]));
  output.bounds.encapsulate([0.0; 3]);
  output.clear();

  assert!(output.is_empty());
  assert_eq!(output.face_count(), 0);
  assert!(!output.bounds.is_valid());
}

#[test]
fn test_triangle_count_fans_faces() {
  let mut output = MeshOutput::new();
  output.faces.push(Face::quad([0, 1, 2, 3]));
  output.faces.push(Face::triangle([0, 1, 2]));

  assert_eq!(output.triangle_count(), 3);
}

#[test]
fn test_mesh_config_builder() {
  assert_eq!(MeshConfig::default().isovalue, 0.0);

  let config = MeshConfig::new().with_isovalue(0.25);
  assert_eq!(config.isovalue, 0.25);
}
