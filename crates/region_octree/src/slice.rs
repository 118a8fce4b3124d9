//! Slice export - sample one axis-aligned cross-section into a flat buffer.
//!
//! # Layout
//!
//! ```text
//! axis   columns (fast)   rows (slow)
//!  x          y               z
//!  y          x               z
//!  z          x               y
//! ```
//!
//! Element `(column, row)` sits at `row * width + column`. Unset cells
//! export as 0; labels wider than the element clamp to the element's max.
//!
//! # RGBA packing
//!
//! [`SliceEncoding::Rgba8`] splits a label into 4 byte channels, low byte
//! first (R = bits 0..8, A = bits 24..32). The packed `u32` uses
//! [`HOST_CHANNELS`] so that storing it in native byte order lays the
//! channels out as R, G, B, A in memory on every host.

use glam::DVec3;

use crate::constants::EPSILON;
use crate::error::OctreeError;
use crate::octree::{Axis, DAabb3, Label, RegionNode};

/// Element format of an exported slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceEncoding {
  /// One byte per cell, labels clamped to 255.
  U8,
  /// Two native-endian bytes per cell, labels clamped to 65535.
  U16,
  /// Four native-endian bytes per cell.
  U32,
  /// Four byte channels per cell in R, G, B, A memory order.
  Rgba8,
}

impl SliceEncoding {
  /// Map an element width in bytes to a plain integer encoding.
  pub fn from_byte_width(width: u8) -> Result<Self, OctreeError> {
    match width {
      1 => Ok(SliceEncoding::U8),
      2 => Ok(SliceEncoding::U16),
      4 => Ok(SliceEncoding::U32),
      other => Err(OctreeError::InvalidByteWidth(other)),
    }
  }

  #[inline]
  pub fn bytes_per_element(self) -> usize {
    match self {
      SliceEncoding::U8 => 1,
      SliceEncoding::U16 => 2,
      SliceEncoding::U32 | SliceEncoding::Rgba8 => 4,
    }
  }

  fn write(self, label: Label, out: &mut Vec<u8>) {
    match self {
      SliceEncoding::U8 => out.push(u8::try_from(label).unwrap_or(u8::MAX)),
      SliceEncoding::U16 => {
        out.extend_from_slice(&u16::try_from(label).unwrap_or(u16::MAX).to_ne_bytes())
      }
      SliceEncoding::U32 => out.extend_from_slice(&label.to_ne_bytes()),
      SliceEncoding::Rgba8 => out.extend_from_slice(&HOST_CHANNELS.pack(label).to_ne_bytes()),
    }
  }
}

/// Bit positions of the R, G, B and A channels inside a packed `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelLayout {
  pub r_shift: u32,
  pub g_shift: u32,
  pub b_shift: u32,
  pub a_shift: u32,
}

impl ChannelLayout {
  /// Layout for hosts that store the least significant byte first.
  pub const LITTLE_ENDIAN: Self = Self {
    r_shift: 0,
    g_shift: 8,
    b_shift: 16,
    a_shift: 24,
  };

  /// Layout for hosts that store the most significant byte first.
  pub const BIG_ENDIAN: Self = Self {
    r_shift: 24,
    g_shift: 16,
    b_shift: 8,
    a_shift: 0,
  };

  /// Layout matching the byte order of the compilation target.
  pub const fn for_host() -> Self {
    if cfg!(target_endian = "little") {
      Self::LITTLE_ENDIAN
    } else {
      Self::BIG_ENDIAN
    }
  }

  /// Pack `[r, g, b, a]` into one word.
  #[inline]
  pub fn pack_channels(&self, [r, g, b, a]: [u8; 4]) -> u32 {
    (r as u32) << self.r_shift
      | (g as u32) << self.g_shift
      | (b as u32) << self.b_shift
      | (a as u32) << self.a_shift
  }

  /// Pack a label, low byte into R.
  #[inline]
  pub fn pack(&self, label: Label) -> u32 {
    self.pack_channels(label.to_le_bytes())
  }

  /// Split a packed word back into `[r, g, b, a]`.
  #[inline]
  pub fn unpack(&self, pixel: u32) -> [u8; 4] {
    [
      (pixel >> self.r_shift) as u8,
      (pixel >> self.g_shift) as u8,
      (pixel >> self.b_shift) as u8,
      (pixel >> self.a_shift) as u8,
    ]
  }
}

/// Channel layout of this build's target, fixed at compile time.
pub const HOST_CHANNELS: ChannelLayout = ChannelLayout::for_host();

/// Dimensions and cell addressing of one cross-section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceShape {
  /// Axis the slice is taken across.
  pub axis: Axis,
  /// Cell index along `axis`.
  pub index: i64,
  /// Cells per row.
  pub width: usize,
  /// Number of rows.
  pub height: usize,
  column_axis: Axis,
  row_axis: Axis,
  origin: [i64; 3],
}

impl SliceShape {
  /// Validate `index` against `bounds` and size the cross-section.
  pub fn new(bounds: &DAabb3, axis: Axis, index: i64) -> Result<Self, OctreeError> {
    // Whole unit cells only; a cell cut by a fractional face is outside.
    let first = (bounds.min - EPSILON).ceil();
    let last = (bounds.max + EPSILON).floor();
    let along = index as f64;
    if along < first[axis.index()] || along + 1.0 > last[axis.index()] {
      return Err(OctreeError::SliceOutOfBounds {
        axis,
        index,
        bounds: *bounds,
      });
    }

    let cells = (last - first).max(DVec3::ZERO);
    let (column_axis, row_axis) = axis.others();

    let mut origin = [first.x as i64, first.y as i64, first.z as i64];
    origin[axis.index()] = index;

    Ok(Self {
      axis,
      index,
      width: cells[column_axis.index()] as usize,
      height: cells[row_axis.index()] as usize,
      column_axis,
      row_axis,
      origin,
    })
  }

  /// Number of cells in the slice.
  #[inline]
  pub fn len(&self) -> usize {
    self.width * self.height
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Cell coordinates of `(column, row)`.
  pub fn cell(&self, column: usize, row: usize) -> [i64; 3] {
    let mut cell = self.origin;
    cell[self.column_axis.index()] += column as i64;
    cell[self.row_axis.index()] += row as i64;
    cell
  }

  /// Cell coordinates in buffer order.
  pub fn cells(&self) -> impl Iterator<Item = [i64; 3]> + '_ {
    (0..self.height).flat_map(move |row| (0..self.width).map(move |column| self.cell(column, row)))
  }
}

fn sample(root: &RegionNode, [x, y, z]: [i64; 3]) -> Result<Option<Label>, OctreeError> {
  root.voxel(x, y, z)
}

/// Sample every cell of `shape` from `root` into a byte buffer.
pub fn export(
  root: &RegionNode,
  shape: &SliceShape,
  encoding: SliceEncoding,
) -> Result<Vec<u8>, OctreeError> {
  let mut out = Vec::with_capacity(shape.len() * encoding.bytes_per_element());
  for cell in shape.cells() {
    let label = sample(root, cell)?.unwrap_or(0);
    encoding.write(label, &mut out);
  }
  Ok(out)
}

/// Sample every cell of `shape` into host-order packed RGBA words.
pub fn export_pixels(root: &RegionNode, shape: &SliceShape) -> Result<Vec<u32>, OctreeError> {
  shape
    .cells()
    .map(|cell| Ok(HOST_CHANNELS.pack(sample(root, cell)?.unwrap_or(0))))
    .collect()
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;
