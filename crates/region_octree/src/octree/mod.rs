//! Octree module for region labeling.
//!
//! The tree is explicit: every node owns its box, an optional label, and
//! either no children or exactly 8, indexed by a 3-bit octant code.
//!
//! # Module Structure
//!
//! - [`bounds`]: `DAabb3` - box geometry, octant classification, shattering
//! - [`node`]: `RegionNode` - recursive paint, merge and lookup
//! - [`stats`]: `PaintStats` - what a paint did and what it dropped
//! - [`tree`]: `RegionOctree` - owning facade with bounds-checked queries

pub mod bounds;
pub mod node;
pub mod stats;
pub mod tree;

// Re-exports
pub use bounds::{Axis, DAabb3, Octant, OctantClass};
pub use node::{Label, RegionNode};
pub use stats::PaintStats;
pub use tree::RegionOctree;
