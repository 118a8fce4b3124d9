//! RegionOctree - owning facade over the root [`RegionNode`].
//!
//! This is the surface adopters program against: build it over the full
//! volume, paint boxes into it, then read voxels or whole slices back.
//! The tree is single-threaded; wrap it in one exclusive lock if it has to
//! be shared, since a paint rewrites labels and child arrays in place.

use glam::DVec3;
use tracing::{debug, warn};

use super::bounds::{Axis, DAabb3, OctantClass};
use super::node::{Label, RegionNode};
use super::stats::PaintStats;
use crate::constants::CELL_CENTER_OFFSET;
use crate::error::OctreeError;
use crate::slice::{self, SliceEncoding, SliceShape};

/// Sparse label store over a fixed bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionOctree {
  root: RegionNode,
  aligned: bool,
}

impl RegionOctree {
  /// Create a wholly unlabeled tree over `bounds`.
  ///
  /// Unit cells are only fully addressable when `bounds` is a power-of-two
  /// cube on integer coordinates (see [`DAabb3::is_voxel_aligned`]). Other
  /// boxes are accepted, but subdivision stops lining up with unit cells:
  /// some unit-sized paints get dropped as sub-voxel fragments, and lookups
  /// of cells whose center lands on a dividing plane fail with
  /// [`OctreeError::UnalignedBounds`].
  pub fn new(bounds: DAabb3) -> Self {
    let aligned = bounds.is_voxel_aligned();
    if !aligned {
      warn!(%bounds, "octree bounds are not a power-of-two cube on integer coordinates; unit voxels may not be addressable");
    }
    Self {
      root: RegionNode::new(bounds),
      aligned,
    }
  }

  #[inline]
  pub fn bounds(&self) -> &DAabb3 {
    self.root.bounds()
  }

  #[inline]
  pub fn root(&self) -> &RegionNode {
    &self.root
  }

  /// Whether every unit cell inside the bounds can be painted and read.
  #[inline]
  pub fn is_aligned(&self) -> bool {
    self.aligned
  }

  /// Assign `label` to every unit cell inside `target`.
  #[tracing::instrument(skip_all, name = "octree::paint", fields(%target, label))]
  pub fn paint(&mut self, target: &DAabb3, label: Label) -> PaintStats {
    self.apply(target, Some(label))
  }

  /// Reset every unit cell inside `target` to unset.
  #[tracing::instrument(skip_all, name = "octree::erase", fields(%target))]
  pub fn erase(&mut self, target: &DAabb3) -> PaintStats {
    self.apply(target, None)
  }

  /// Drop all labels and children.
  pub fn clear(&mut self) {
    self.root = RegionNode::new(*self.root.bounds());
  }

  fn apply(&mut self, target: &DAabb3, label: Option<Label>) -> PaintStats {
    let mut stats = PaintStats::default();
    if !target.intersects(self.root.bounds()) {
      debug!(bounds = %self.root.bounds(), "target lies outside the octree");
      return stats;
    }
    self.root.paint(target, label, &mut stats);
    if stats.has_diagnostics() {
      debug!(?stats, "paint finished with dropped fragments");
    }
    stats
  }

  /// Label of the unit cell at `(x, y, z)`, or None if it was never painted.
  pub fn voxel(&self, x: i64, y: i64, z: i64) -> Result<Option<Label>, OctreeError> {
    let center = DVec3::new(x as f64, y as f64, z as f64) + CELL_CENTER_OFFSET;
    if !self.bounds().contains(center) {
      return Err(OctreeError::VoxelOutOfBounds {
        x,
        y,
        z,
        bounds: *self.bounds(),
      });
    }
    self.root.lookup(center).map_err(|err| self.caller_fault(err))
  }

  /// Node count.
  pub fn tree_size(&self) -> usize {
    self.root.tree_size()
  }

  /// Longest root-to-leaf edge count plus one.
  pub fn tree_depth(&self) -> usize {
    self.root.tree_depth()
  }

  pub fn leaf_count(&self) -> usize {
    self.root.leaf_count()
  }

  /// Export the cross-section at `index` along `axis` with 1, 2 or 4 byte
  /// elements.
  pub fn slice(&self, axis: Axis, index: i64, byte_width: u8) -> Result<Vec<u8>, OctreeError> {
    self.slice_with(axis, index, SliceEncoding::from_byte_width(byte_width)?)
  }

  /// Export the cross-section at `index` along `axis` in `encoding`.
  #[tracing::instrument(skip_all, name = "octree::slice", fields(%axis, index, ?encoding))]
  pub fn slice_with(
    &self,
    axis: Axis,
    index: i64,
    encoding: SliceEncoding,
  ) -> Result<Vec<u8>, OctreeError> {
    let shape = self.slice_shape(axis, index)?;
    slice::export(&self.root, &shape, encoding).map_err(|err| self.caller_fault(err))
  }

  /// Export the cross-section as host-order packed RGBA pixels.
  pub fn slice_pixels(&self, axis: Axis, index: i64) -> Result<Vec<u32>, OctreeError> {
    let shape = self.slice_shape(axis, index)?;
    slice::export_pixels(&self.root, &shape).map_err(|err| self.caller_fault(err))
  }

  /// Dimensions of the cross-section at `index` along `axis`.
  pub fn slice_shape(&self, axis: Axis, index: i64) -> Result<SliceShape, OctreeError> {
    SliceShape::new(self.bounds(), axis, index)
  }

  /// On unaligned bounds a cell center can sit on a dividing plane; that is
  /// a consequence of the bounds the caller chose, not a corrupt tree.
  fn caller_fault(&self, err: OctreeError) -> OctreeError {
    match err {
      OctreeError::Inconsistent {
        point,
        class: OctantClass::OnBoundary,
        ..
      } if !self.aligned => OctreeError::UnalignedBounds {
        point,
        bounds: *self.bounds(),
      },
      other => other,
    }
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
