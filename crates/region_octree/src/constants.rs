//! Geometric tolerances and resolution limits for region painting.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Constant            Value   Used by                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  EPSILON             1e-10   point/box equality, octant test │
//! │  SPLIT_EPSILON       1e-14   degenerate split detection      │
//! │  MIN_VOXEL_VOLUME    1.0     leaf-resolution node threshold  │
//! │  MIN_PAINT_VOLUME    0.5     smallest paint target accepted  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! A split value 1e-12 away from a face still produces a (sliver) split,
//! while point equality treats the same offset as "on the face".

/// Tolerance for point equality and dividing-plane classification.
pub const EPSILON: f64 = 1e-10;

/// Tolerance for deciding that a split value coincides with a box face.
pub const SPLIT_EPSILON: f64 = 1e-14;

/// Nodes at or below this volume are unit voxels and never subdivide.
pub const MIN_VOXEL_VOLUME: f64 = 1.0;

/// Paint targets smaller than this cannot be represented and are ignored.
pub const MIN_PAINT_VOLUME: f64 = 0.5;

/// Offset from a cell index to the interior point sampled for lookups.
pub const CELL_CENTER_OFFSET: f64 = 0.5;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
