//! RegionNode - one node of the region octree.
//!
//! A node is either a uniform leaf (a label, or unset, covering its whole
//! box) or an internal node with exactly 8 children indexed by [`Octant`].
//! Children are created lazily the first time a partial paint forces a
//! split, and are discarded again when a paint covers the node exactly or
//! when all 8 children end up as leaves with the same label.

use glam::DVec3;
use tracing::{debug, trace, warn};

use super::bounds::{DAabb3, Octant, OctantClass};
use super::stats::PaintStats;
use crate::constants::{CELL_CENTER_OFFSET, MIN_PAINT_VOLUME, MIN_VOXEL_VOLUME};
use crate::error::OctreeError;

/// Application label painted into the tree.
pub type Label = u32;

/// Octree node owning a box, an optional label and optionally 8 children.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionNode {
  bounds: DAabb3,
  label: Option<Label>,
  children: Option<Box<[RegionNode; 8]>>,
}

impl RegionNode {
  /// Create an unlabeled leaf covering `bounds`.
  pub fn new(bounds: DAabb3) -> Self {
    Self::leaf(bounds, None)
  }

  fn leaf(bounds: DAabb3, label: Option<Label>) -> Self {
    Self {
      bounds,
      label,
      children: None,
    }
  }

  #[inline]
  pub fn bounds(&self) -> &DAabb3 {
    &self.bounds
  }

  /// Label of a uniform leaf. Internal nodes and unset leaves return None.
  #[inline]
  pub fn label(&self) -> Option<Label> {
    self.label
  }

  #[inline]
  pub fn children(&self) -> Option<&[RegionNode; 8]> {
    self.children.as_deref()
  }

  #[inline]
  pub fn child(&self, octant: Octant) -> Option<&RegionNode> {
    self.children().map(|children| &children[octant.index()])
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  /// Assign `label` to every point of `target` inside this node.
  ///
  /// `None` erases the region back to unset. Requests that cannot be
  /// represented are dropped and counted in `stats`.
  pub fn paint(&mut self, target: &DAabb3, label: Option<Label>, stats: &mut PaintStats) {
    let target = target.clamp(&self.bounds);
    if target.volume() <= 0.0 {
      // At most a shared face; nothing inside this node to paint.
      return;
    }

    // Exact cover replaces whatever was below.
    if target.approx_eq(&self.bounds) {
      self.assign(label, stats);
      return;
    }

    // Unit voxels take the label if the target covers at least half of them.
    if self.bounds.volume() <= MIN_VOXEL_VOLUME {
      if target.volume() >= MIN_PAINT_VOLUME {
        self.assign(label, stats);
      } else {
        stats.ignored_subvoxel += 1;
        debug!(%target, bounds = %self.bounds, "ignoring sub-voxel paint");
      }
      return;
    }

    if target.volume() < MIN_PAINT_VOLUME {
      stats.ignored_subvoxel += 1;
      debug!(%target, bounds = %self.bounds, "ignoring sub-voxel paint");
      return;
    }

    let bounds = self.bounds;
    let children = self.subdivide(stats);

    for fragment in target.shatter(bounds.center()) {
      let fragment = fragment.clamp(&bounds);
      match bounds.octant(fragment.center()) {
        OctantClass::Inside(octant) => {
          stats.fragments_placed += 1;
          children[octant.index()].paint(&fragment, label, stats);
        }
        class => {
          stats.skipped_boundary += 1;
          warn!(?class, %fragment, %bounds, "skipping fragment without a unique octant");
        }
      }
    }

    self.try_merge(stats);
  }

  /// Look up the label of the unit cell at integer coordinates.
  pub fn voxel(&self, x: i64, y: i64, z: i64) -> Result<Option<Label>, OctreeError> {
    self.lookup(DVec3::new(x as f64, y as f64, z as f64) + CELL_CENTER_OFFSET)
  }

  /// Look up the label owning a continuous point.
  ///
  /// Returns `Ok(None)` for unpainted regions. A point that cannot be routed
  /// to a child of an internal node is reported as
  /// [`OctreeError::Inconsistent`].
  pub fn lookup(&self, point: DVec3) -> Result<Option<Label>, OctreeError> {
    let mut node = self;
    loop {
      if let Some(label) = node.label {
        return Ok(Some(label));
      }
      let Some(children) = node.children.as_deref() else {
        return Ok(None);
      };
      match node.bounds.octant(point) {
        OctantClass::Inside(octant) => node = &children[octant.index()],
        class => {
          return Err(OctreeError::Inconsistent {
            point,
            class,
            bounds: node.bounds,
          })
        }
      }
    }
  }

  /// The shared label of 8 uniform-leaf children, if there is one.
  ///
  /// Returns None as soon as the first child carries no label.
  pub fn all_children_same(&self) -> Option<Label> {
    let children = self.children.as_deref()?;
    let first = children[0].label?;
    children
      .iter()
      .all(|child| child.is_leaf() && child.label == Some(first))
      .then_some(first)
  }

  /// Number of nodes in this subtree, including this one.
  pub fn tree_size(&self) -> usize {
    1 + self
      .children()
      .map_or(0, |children| children.iter().map(RegionNode::tree_size).sum())
  }

  /// Longest root-to-leaf path in edges, plus one.
  pub fn tree_depth(&self) -> usize {
    1 + self.children().map_or(0, |children| {
      children.iter().map(RegionNode::tree_depth).max().unwrap_or(0)
    })
  }

  /// Number of leaves in this subtree.
  pub fn leaf_count(&self) -> usize {
    match self.children() {
      Some(children) => children.iter().map(RegionNode::leaf_count).sum(),
      None => 1,
    }
  }

  fn assign(&mut self, label: Option<Label>, stats: &mut PaintStats) {
    self.children = None;
    self.label = label;
    stats.labels_set += 1;
  }

  /// Make sure 8 children exist. A labeled leaf hands its label down so the
  /// parts of it a partial paint does not touch keep their value.
  fn subdivide(&mut self, stats: &mut PaintStats) -> &mut [RegionNode; 8] {
    let bounds = self.bounds;
    let inherited = self.label.take();
    self.children.get_or_insert_with(|| {
      stats.subdivisions += 1;
      trace!(%bounds, ?inherited, "subdividing");
      Box::new(
        bounds
          .shatter8(bounds.center())
          .map(|child| RegionNode::leaf(child, inherited)),
      )
    })
  }

  fn all_children_unset(&self) -> bool {
    self.children().is_some_and(|children| {
      children
        .iter()
        .all(|child| child.is_leaf() && child.label.is_none())
    })
  }

  fn try_merge(&mut self, stats: &mut PaintStats) {
    let merged = match self.all_children_same() {
      Some(label) => Some(label),
      // An erase, or a paint whose fragments were all dropped, can leave 8
      // unset leaves behind.
      None if self.all_children_unset() => None,
      None => return,
    };
    debug!(bounds = %self.bounds, label = ?merged, "merging uniform children");
    self.children = None;
    self.label = merged;
    stats.merges += 1;
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
