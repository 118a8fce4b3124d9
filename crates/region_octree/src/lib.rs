//! region_octree - sparse label storage for axis-aligned regions
//!
//! A region octree partitions a fixed bounding box on demand. Painting a box
//! with a label subdivides only the nodes the box partially covers, and
//! collapses any node whose 8 children end up sharing one label, so the
//! tree stays proportional to the complexity of the painted boundaries
//! rather than to the volume.
//!
//! # Features
//!
//! - **Geometry kernel**: [`DAabb3`] containment, octant classification,
//!   splitting and shattering with floating-point tolerance
//! - **Painting**: arbitrary (off-center, multi-octant) boxes via
//!   [`RegionOctree::paint`], erasing via [`RegionOctree::erase`]
//! - **Lookup**: [`RegionOctree::voxel`] in time proportional to depth
//! - **Slice export**: one cross-section as 1, 2 or 4 byte elements, or as
//!   host-order packed RGBA pixels
//!
//! # Example
//!
//! ```
//! use region_octree::{DAabb3, RegionOctree};
//!
//! let mut tree = RegionOctree::new(DAabb3::from_coords(0.0, 0.0, 0.0, 8.0, 8.0, 8.0));
//! tree.paint(&DAabb3::from_coords(2.0, 2.0, 2.0, 3.0, 3.0, 5.0), 666);
//!
//! assert_eq!(tree.voxel(2, 2, 4).unwrap(), Some(666));
//! assert_eq!(tree.voxel(0, 0, 0).unwrap(), None);
//! assert_eq!(tree.tree_depth(), 4);
//! ```

pub mod constants;
pub mod error;
pub mod point;

pub use error::OctreeError;
pub use point::{Point, PointExt};

// Octree module: geometry kernel and the recursive label tree
pub mod octree;
pub use octree::{Axis, DAabb3, Label, Octant, OctantClass, PaintStats, RegionNode, RegionOctree};

// Cross-section export for downstream rendering
pub mod slice;
pub use slice::{ChannelLayout, SliceEncoding, SliceShape, HOST_CHANNELS};
