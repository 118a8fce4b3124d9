//! Error type for octree queries and slice export.

use glam::DVec3;
use thiserror::Error;

use crate::octree::{Axis, DAabb3, OctantClass};

/// Errors returned by [`RegionOctree`](crate::RegionOctree) operations.
///
/// Sub-voxel paints and boundary-ambiguous fragments are not errors; they
/// are reported through [`PaintStats`](crate::PaintStats) and `tracing`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OctreeError {
  /// A voxel lookup addressed a cell outside the root bounds.
  #[error("voxel ({x}, {y}, {z}) lies outside {bounds}")]
  VoxelOutOfBounds {
    x: i64,
    y: i64,
    z: i64,
    bounds: DAabb3,
  },

  /// A slice index along `axis` falls outside the root bounds.
  #[error("slice index {index} along {axis} lies outside {bounds}")]
  SliceOutOfBounds {
    axis: Axis,
    index: i64,
    bounds: DAabb3,
  },

  /// Slice elements must be 1, 2 or 4 bytes wide.
  #[error("unsupported element width of {0} bytes (expected 1, 2 or 4)")]
  InvalidByteWidth(u8),

  /// The root box is not a power-of-two cube on integer coordinates, and a
  /// cell center landed on one of its dividing planes.
  #[error("cell center {point} is not addressable: {bounds} is not a power-of-two cube on integer coordinates")]
  UnalignedBounds { point: DVec3, bounds: DAabb3 },

  /// A lookup inside the tree could not be classified into a child octant.
  /// This means the tree's structure is corrupt.
  #[error("octree invariant violated: {point} classified as {class:?} in {bounds}")]
  Inconsistent {
    point: DVec3,
    class: OctantClass,
    bounds: DAabb3,
  },
}
