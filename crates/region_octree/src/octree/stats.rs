//! Per-paint statistics.
//!
//! Paint never fails. Requests it cannot represent are dropped and counted
//! here, alongside the structural changes the paint caused.

use std::ops::AddAssign;

/// Statistics from a single paint (or erase) call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
	/// Fragments routed into a child octant.
	pub fragments_placed: usize,
	/// Nodes whose label was assigned directly.
	pub labels_set: usize,
	/// Leaves split into 8 children.
	pub subdivisions: usize,
	/// Internal nodes collapsed back into a uniform leaf.
	pub merges: usize,
	/// Targets dropped for covering less than half a unit voxel.
	pub ignored_subvoxel: usize,
	/// Fragments dropped because their octant was ambiguous.
	pub skipped_boundary: usize,
}

impl PaintStats {
	/// True if any part of the request was dropped.
	#[inline]
	pub fn has_diagnostics(&self) -> bool {
		self.ignored_subvoxel > 0 || self.skipped_boundary > 0
	}
}

impl AddAssign for PaintStats {
	fn add_assign(&mut self, rhs: Self) {
		self.fragments_placed += rhs.fragments_placed;
		self.labels_set += rhs.labels_set;
		self.subdivisions += rhs.subdivisions;
		self.merges += rhs.merges;
		self.ignored_subvoxel += rhs.ignored_subvoxel;
		self.skipped_boundary += rhs.skipped_boundary;
	}
}
