//! Point helpers on top of [`glam::DVec3`].
//!
//! Points are plain double-precision vectors; scalar add/multiply come from
//! glam's operators. This module adds the tolerance-aware comparisons the
//! geometry kernel needs.

use glam::{BVec3, DVec3};

/// A coordinate in octree space.
pub type Point = DVec3;

/// Tolerance-aware helpers for [`Point`].
pub trait PointExt {
  /// True if every component differs from `other` by less than `eps`.
  fn approx_eq(&self, other: &Self, eps: f64) -> bool;

  /// Componentwise clamp into `[min, max]`.
  ///
  /// Unlike [`DVec3::clamp`] this never panics: if `min > max` on an axis the
  /// result on that axis is `min`.
  fn clamp_into(&self, min: Self, max: Self) -> Self;

  /// Per-axis flag: is the component a positive integer power of two.
  fn power_of_two_axes(&self) -> BVec3;
}

impl PointExt for DVec3 {
  #[inline]
  fn approx_eq(&self, other: &Self, eps: f64) -> bool {
    (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps && (self.z - other.z).abs() < eps
  }

  #[inline]
  fn clamp_into(&self, min: Self, max: Self) -> Self {
    DVec3::new(
      self.x.min(max.x).max(min.x),
      self.y.min(max.y).max(min.y),
      self.z.min(max.z).max(min.z),
    )
  }

  fn power_of_two_axes(&self) -> BVec3 {
    BVec3::new(is_power_of_two(self.x), is_power_of_two(self.y), is_power_of_two(self.z))
  }
}

fn is_power_of_two(value: f64) -> bool {
  if value < 1.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
    return false;
  }
  (value as u64).is_power_of_two()
}
