use super::*;

#[test]
fn test_edge_corners_layout() {
  let expected: [[u8; 2]; 12] = [
    [0, 1],
    [0, 2],
    [0, 4],
    [1, 3],
    [1, 5],
    [2, 3],
    [2, 6],
    [3, 7],
    [4, 5],
    [4, 6],
    [5, 7],
    [6, 7],
  ];
  assert_eq!(EDGE_CORNERS, expected);
}

#[test]
fn test_axis_edges_leave_corner_zero() {
  for axis in 0..3 {
    assert_eq!(EDGE_CORNERS[axis][0], 0);
    assert_eq!(EDGE_CORNERS[axis][1], 1 << axis);
    assert_eq!(edge_axis(axis), axis);
  }
}

#[test]
fn test_edges_differ_in_one_bit() {
  for (i, edge) in EDGE_CORNERS.iter().enumerate() {
    assert!(edge[0] < 8 && edge[1] < 8, "edge {} out of bounds", i);
    assert_eq!(
      (edge[0] ^ edge[1]).count_ones(),
      1,
      "edge {} must connect adjacent corners",
      i
    );
  }
}

#[test]
fn test_four_edges_per_axis() {
  let mut per_axis = [0; 3];
  for edge in 0..EDGE_COUNT {
    per_axis[edge_axis(edge)] += 1;
  }
  assert_eq!(per_axis, [4, 4, 4]);
}

#[test]
fn test_edge_table_homogeneous() {
  assert_eq!(EDGE_TABLE[0], 0, "All outside should have no edges");
  assert_eq!(EDGE_TABLE[255], 0, "All inside should have no edges");
}

#[test]
fn test_edge_table_single_corner() {
  for corner in 0..8 {
    let mask = 1u8 << corner;
    let edge_count = EDGE_TABLE[mask as usize].count_ones();
    assert_eq!(
      edge_count, 3,
      "Corner {} should have 3 edges, got {}",
      corner, edge_count
    );
  }
  assert_eq!(EDGE_TABLE[1], 0b111);
}

#[test]
fn test_edge_table_symmetry() {
  for i in 0..128 {
    assert_eq!(
      EDGE_TABLE[i],
      EDGE_TABLE[255 - i],
      "Edge masks should be symmetric for {} and {}",
      i,
      255 - i
    );
  }
}

#[test]
fn test_edge_table_fits_twelve_bits() {
  for mask in 0..256 {
    assert_eq!(EDGE_TABLE[mask] >> 12, 0);
  }
}

#[test]
fn test_half_split_crosses_four_edges() {
  // Bottom (z = 0) half inside: only the Z edges cross.
  let mask = 0b0000_1111;
  let edges = EDGE_TABLE[mask];
  assert_eq!(edges.count_ones(), 4);
  for edge in 0..EDGE_COUNT {
    if edges & (1 << edge) != 0 {
      assert_eq!(edge_axis(edge), 2);
    }
  }
}
