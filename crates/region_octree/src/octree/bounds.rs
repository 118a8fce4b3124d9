//! Axis-aligned bounding box with double precision, and the subdivision
//! geometry the region octree is built on.
//!
//! Octants are numbered with x as the least significant bit:
//!
//! ```text
//!  z low  | 2 | 3 |  y      z high  | 6 | 7 |  y
//!         | 0 | 1 |                 | 4 | 5 |
//!           x                         x
//! ```

use std::fmt;

use glam::DVec3;
use smallvec::{smallvec, SmallVec};

use crate::constants::{EPSILON, SPLIT_EPSILON};
use crate::point::PointExt;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
	X,
	Y,
	Z,
}

impl Axis {
	/// All axes in split order.
	pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

	/// Component index into a [`DVec3`].
	#[inline]
	pub fn index(self) -> usize {
		match self {
			Axis::X => 0,
			Axis::Y => 1,
			Axis::Z => 2,
		}
	}

	/// The two remaining axes, lower axis first.
	#[inline]
	pub fn others(self) -> (Axis, Axis) {
		match self {
			Axis::X => (Axis::Y, Axis::Z),
			Axis::Y => (Axis::X, Axis::Z),
			Axis::Z => (Axis::X, Axis::Y),
		}
	}
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Axis::X => "x",
			Axis::Y => "y",
			Axis::Z => "z",
		};
		f.write_str(name)
	}
}

/// A 3-bit octant code: bit 0 = x half, bit 1 = y half, bit 2 = z half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
	/// All octants in index order.
	pub const ALL: [Octant; 8] = [
		Octant(0),
		Octant(1),
		Octant(2),
		Octant(3),
		Octant(4),
		Octant(5),
		Octant(6),
		Octant(7),
	];

	/// Returns None for indices outside 0..8.
	pub fn new(index: u8) -> Option<Self> {
		(index < 8).then_some(Self(index))
	}

	/// Build the code from which half of each axis is selected.
	#[inline]
	pub fn from_halves(x_high: bool, y_high: bool, z_high: bool) -> Self {
		Self(x_high as u8 | (y_high as u8) << 1 | (z_high as u8) << 2)
	}

	#[inline]
	pub fn index(self) -> usize {
		self.0 as usize
	}

	/// True if this octant covers the upper half along `axis`.
	#[inline]
	pub fn is_high(self, axis: Axis) -> bool {
		(self.0 >> axis.index()) & 1 == 1
	}
}

/// Result of classifying a point against a box's octants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OctantClass {
	/// The point lies strictly inside this octant.
	Inside(Octant),
	/// The point is not strictly inside the box.
	OutOfBounds,
	/// The point sits on a dividing plane through the box center.
	OnBoundary,
}

impl OctantClass {
	/// The octant, if the classification was unambiguous.
	#[inline]
	pub fn octant(self) -> Option<Octant> {
		match self {
			OctantClass::Inside(octant) => Some(octant),
			OctantClass::OutOfBounds | OctantClass::OnBoundary => None,
		}
	}
}

/// Double-precision axis-aligned bounding box.
///
/// Construction normalizes the corners so `min <= max` holds on every axis
/// for the lifetime of the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DAabb3 {
	/// Minimum corner.
	pub min: DVec3,
	/// Maximum corner.
	pub max: DVec3,
}

impl DAabb3 {
	/// Create a box spanning two arbitrary corners.
	pub fn new(a: DVec3, b: DVec3) -> Self {
		Self {
			min: a.min(b),
			max: a.max(b),
		}
	}

	/// Create a box from two corners given as scalars.
	pub fn from_coords(x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) -> Self {
		Self::new(DVec3::new(x0, y0, z0), DVec3::new(x1, y1, z1))
	}

	/// Get the center of the box.
	#[inline]
	pub fn center(&self) -> DVec3 {
		(self.min + self.max) * 0.5
	}

	/// Get the size of the box (max - min).
	#[inline]
	pub fn size(&self) -> DVec3 {
		self.max - self.min
	}

	#[inline]
	pub fn volume(&self) -> f64 {
		let size = self.size();
		size.x * size.y * size.z
	}

	/// True for a cube with a power-of-two edge and an integer min corner.
	///
	/// Only such boxes subdivide exactly onto unit cells, so every cell
	/// center stays off the dividing planes of every node.
	pub fn is_voxel_aligned(&self) -> bool {
		let size = self.size();
		size.power_of_two_axes().all()
			&& size.x == size.y
			&& size.y == size.z
			&& self.min.floor() == self.min
	}

	/// Epsilon equality on both corners.
	#[inline]
	pub fn approx_eq(&self, other: &DAabb3) -> bool {
		self.min.approx_eq(&other.min, EPSILON) && self.max.approx_eq(&other.max, EPSILON)
	}

	/// Strict interior test. Points on a face are not contained, so a point
	/// on a subdivision boundary never belongs to two siblings.
	#[inline]
	pub fn contains(&self, point: DVec3) -> bool {
		point.cmpgt(self.min).all() && point.cmplt(self.max).all()
	}

	/// Containment with the boundary widened by [`EPSILON`].
	#[inline]
	pub fn contains_inclusive(&self, point: DVec3) -> bool {
		point.cmpge(self.min - EPSILON).all() && point.cmple(self.max + EPSILON).all()
	}

	/// Check if this box overlaps another. Touching faces count.
	#[inline]
	pub fn intersects(&self, other: &DAabb3) -> bool {
		!(self.max.cmplt(other.min).any() || self.min.cmpgt(other.max).any())
	}

	/// Classify which octant around the center holds `point`.
	pub fn octant(&self, point: DVec3) -> OctantClass {
		if !self.contains(point) {
			return OctantClass::OutOfBounds;
		}

		let center = self.center();
		let on_plane = (center - point).abs().cmplt(DVec3::splat(EPSILON));
		if on_plane.any() {
			return OctantClass::OnBoundary;
		}

		OctantClass::Inside(Octant::from_halves(
			point.x > center.x,
			point.y > center.y,
			point.z > center.z,
		))
	}

	/// Split at `value` along `axis` into a low and a high half.
	///
	/// If `value` lies at or beyond either face the split degenerates and the
	/// box comes back unchanged with no high half.
	pub fn split(&self, axis: Axis, value: f64) -> (DAabb3, Option<DAabb3>) {
		let i = axis.index();
		if value <= self.min[i] + SPLIT_EPSILON || value >= self.max[i] - SPLIT_EPSILON {
			return (*self, None);
		}

		let mut low = *self;
		let mut high = *self;
		low.max[i] = value;
		high.min[i] = value;
		(low, Some(high))
	}

	/// Subdivide into 8 octants around `point`, which must lie strictly
	/// inside the box. Results are indexed by [`Octant`].
	pub fn shatter8(&self, point: DVec3) -> [DAabb3; 8] {
		debug_assert!(self.contains(point), "shatter8 point {} outside {}", point, self);
		Octant::ALL.map(|octant| self.octant_around(octant, point))
	}

	/// Subdivide around an arbitrary point into 1 to 8 non-overlapping boxes
	/// whose union is this box.
	///
	/// Interior points take the [`Self::shatter8`] path. Otherwise the box is
	/// split along x, then y, then z, dropping degenerate halves.
	pub fn shatter(&self, point: DVec3) -> SmallVec<[DAabb3; 8]> {
		if self.contains(point) {
			return SmallVec::from_buf(self.shatter8(point));
		}

		let mut pieces: SmallVec<[DAabb3; 8]> = smallvec![*self];
		for axis in Axis::ALL {
			let value = point[axis.index()];
			pieces = pieces
				.into_iter()
				.flat_map(|piece| {
					let (low, high) = piece.split(axis, value);
					std::iter::once(low).chain(high)
				})
				.collect();
		}
		pieces
	}

	/// Copy of this box with both corners clamped into `bounding`.
	pub fn clamp(&self, bounding: &DAabb3) -> DAabb3 {
		DAabb3::new(
			self.min.clamp_into(bounding.min, bounding.max),
			self.max.clamp_into(bounding.min, bounding.max),
		)
	}

	/// The box of `octant` when this box is divided around its center.
	#[inline]
	pub fn child_bounds(&self, octant: Octant) -> DAabb3 {
		self.octant_around(octant, self.center())
	}

	fn octant_around(&self, octant: Octant, pivot: DVec3) -> DAabb3 {
		let mut min = self.min;
		let mut max = self.max;
		for axis in Axis::ALL {
			let i = axis.index();
			if octant.is_high(axis) {
				min[i] = pivot[i];
			} else {
				max[i] = pivot[i];
			}
		}
		DAabb3 { min, max }
	}
}

impl fmt::Display for DAabb3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"DAabb3(({}, {}, {}), ({}, {}, {}))",
			self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
		)
	}
}

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;
