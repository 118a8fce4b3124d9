//! Scene description parsing.
//!
//! A scene fixes the octree bounds and lists the boxes to paint and erase.
//! Paints are applied in file order, erases after all paints.

use anyhow::{Context, Result};
use region_octree::{DAabb3, Label, PaintStats, RegionOctree};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Root scene file.
#[derive(Debug, Deserialize)]
pub struct Scene {
	/// Full volume of the octree.
	pub bounds: BoxConfig,
	/// Labeled boxes, painted in order.
	#[serde(default)]
	pub paint: Vec<PaintConfig>,
	/// Boxes reset to unset once every paint is applied.
	#[serde(default)]
	pub erase: Vec<BoxConfig>,
}

/// Axis-aligned box given by two corners.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct BoxConfig {
	pub min: [f64; 3],
	pub max: [f64; 3],
}

/// One labeled box.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct PaintConfig {
	pub min: [f64; 3],
	pub max: [f64; 3],
	pub label: Label,
}

impl BoxConfig {
	pub fn to_bounds(self) -> DAabb3 {
		DAabb3::new(self.min.into(), self.max.into())
	}
}

impl PaintConfig {
	pub fn to_bounds(self) -> DAabb3 {
		DAabb3::new(self.min.into(), self.max.into())
	}
}

impl Scene {
	/// Load and validate a scene from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read scene file: {}", path.display()))?;
		Self::parse(&content).with_context(|| format!("Invalid scene: {}", path.display()))
	}

	/// Parse and validate a scene from TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let scene: Scene = toml::from_str(content).context("Failed to parse scene TOML")?;
		scene.validate()?;
		Ok(scene)
	}

	fn validate(&self) -> Result<()> {
		let bounds = self.bounds.to_bounds();
		if bounds.volume() <= 0.0 {
			anyhow::bail!("bounds must have a positive volume, got {}", bounds);
		}
		if !bounds.is_voxel_aligned() {
			anyhow::bail!(
				"bounds must be a cube with a power-of-two edge on integer coordinates, got {}",
				bounds
			);
		}

		for (i, paint) in self.paint.iter().enumerate() {
			let target = paint.to_bounds();
			if !target.intersects(&bounds) {
				anyhow::bail!("paint #{} {} lies outside the bounds {}", i, target, bounds);
			}
		}
		for (i, erase) in self.erase.iter().enumerate() {
			let target = erase.to_bounds();
			if !target.intersects(&bounds) {
				anyhow::bail!("erase #{} {} lies outside the bounds {}", i, target, bounds);
			}
		}

		Ok(())
	}

	/// Paint the scene into a fresh octree.
	pub fn build(&self) -> (RegionOctree, PaintStats) {
		let mut tree = RegionOctree::new(self.bounds.to_bounds());
		let mut stats = PaintStats::default();

		for paint in &self.paint {
			stats += tree.paint(&paint.to_bounds(), paint.label);
		}
		for erase in &self.erase {
			stats += tree.erase(&erase.to_bounds());
		}

		debug!(?stats, nodes = tree.tree_size(), "scene built");
		(tree, stats)
	}
}
