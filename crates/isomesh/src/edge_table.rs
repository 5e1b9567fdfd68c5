//! Precomputed cube topology tables for Surface Nets.
//!
//! Both tables are built by `const fn` at compile time, so they exist once per
//! process, are immutable and can be shared freely between threads.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! Corner `i` has coordinate bit `j` set iff `(i >> j) & 1 == 1`.
//!
//! # Edge Layout
//!
//! Edges are enumerated by walking corners in order and, for each axis bit,
//! emitting `(i, i ^ bit)` whenever `i < i ^ bit`:
//!
//! ```text
//! Edge  Axis  Corners
//! ────  ────  ───────
//!   0    X    [0, 1]   ┐
//!   1    Y    [0, 2]   ├ axis edges from corner 0
//!   2    Z    [0, 4]   ┘
//!   3    Y    [1, 3]
//!   4    Z    [1, 5]
//!   5    X    [2, 3]
//!   6    Z    [2, 6]
//!   7    Z    [3, 7]
//!   8    X    [4, 5]
//!   9    Y    [4, 6]
//!  10    Y    [5, 7]
//!  11    X    [6, 7]
//! ```
//!
//! # Edge Table Usage
//!
//! ```text
//! Corner mask: 0b00000001 (only corner 0 is inside)
//! Edge mask:   0b00000111 (edges 0, 1, 2 have crossings)
//! ```

/// Number of corners of a cube cell.
pub const CORNER_COUNT: usize = 8;

/// Number of edges of a cube cell.
pub const EDGE_COUNT: usize = 12;

/// Edge endpoint corner indices, derived from the corner bit labeling.
pub const EDGE_CORNERS: [[u8; 2]; EDGE_COUNT] = generate_edge_corners();

/// Precomputed edge table.
/// Index: 8-bit corner mask (which corners are inside)
/// Value: 12-bit edge mask (which edges have crossings)
///
/// An edge has a crossing if exactly one of its endpoint corners is inside.
pub const EDGE_TABLE: [u16; 256] = generate_edge_table();

const fn generate_edge_corners() -> [[u8; 2]; EDGE_COUNT] {
  let mut edges = [[0u8; 2]; EDGE_COUNT];
  let mut k = 0;
  let mut corner = 0u8;

  while corner < CORNER_COUNT as u8 {
    let mut bit = 1u8;
    while bit <= 4 {
      let other = corner ^ bit;
      if corner < other {
        edges[k] = [corner, other];
        k += 1;
      }
      bit <<= 1;
    }
    corner += 1;
  }

  edges
}

const fn generate_edge_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut corner_mask = 0usize;

  while corner_mask < 256 {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < EDGE_COUNT {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      if (corner_mask >> c0) & 1 != (corner_mask >> c1) & 1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[corner_mask] = edge_mask;
    corner_mask += 1;
  }

  table
}

/// Index of the axis (0 = X, 1 = Y, 2 = Z) an edge runs along.
#[inline]
pub const fn edge_axis(edge: usize) -> usize {
  let diff = EDGE_CORNERS[edge][0] ^ EDGE_CORNERS[edge][1];
  diff.trailing_zeros() as usize
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
