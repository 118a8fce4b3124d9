use super::*;
use crate::octree::RegionOctree;

fn cube(min: f64, max: f64) -> DAabb3 {
  DAabb3::from_coords(min, min, min, max, max, max)
}

// =========================================================================
// Encodings
// =========================================================================

#[test]
fn test_from_byte_width() {
  assert_eq!(SliceEncoding::from_byte_width(1), Ok(SliceEncoding::U8));
  assert_eq!(SliceEncoding::from_byte_width(2), Ok(SliceEncoding::U16));
  assert_eq!(SliceEncoding::from_byte_width(4), Ok(SliceEncoding::U32));
  assert_eq!(SliceEncoding::from_byte_width(0), Err(OctreeError::InvalidByteWidth(0)));
  assert_eq!(SliceEncoding::from_byte_width(8), Err(OctreeError::InvalidByteWidth(8)));
}

/// Labels wider than the element saturate instead of wrapping.
#[test]
fn test_narrow_encodings_clamp() {
  let mut out = Vec::new();
  SliceEncoding::U8.write(300, &mut out);
  SliceEncoding::U8.write(12, &mut out);
  assert_eq!(out, vec![255, 12]);

  let mut out = Vec::new();
  SliceEncoding::U16.write(70_000, &mut out);
  assert_eq!(out, u16::MAX.to_ne_bytes().to_vec());

  let mut out = Vec::new();
  SliceEncoding::U32.write(70_000, &mut out);
  assert_eq!(out, 70_000u32.to_ne_bytes().to_vec());
}

// =========================================================================
// Channel layout
// =========================================================================

/// Whatever the host, a native-endian store of a packed label yields
/// R, G, B, A in memory order.
#[test]
fn test_host_channels_memory_order() {
  let packed = HOST_CHANNELS.pack(0xDDCC_BBAA);
  assert_eq!(packed.to_ne_bytes(), [0xAA, 0xBB, 0xCC, 0xDD]);
}

#[test]
fn test_host_channels_detected_from_target() {
  let expected = if cfg!(target_endian = "little") {
    ChannelLayout::LITTLE_ENDIAN
  } else {
    ChannelLayout::BIG_ENDIAN
  };
  assert_eq!(HOST_CHANNELS, expected);
}

#[test]
fn test_big_endian_layout() {
  let packed = ChannelLayout::BIG_ENDIAN.pack_channels([1, 2, 3, 4]);
  assert_eq!(packed, 0x0102_0304);
  assert_eq!(packed.to_be_bytes(), [1, 2, 3, 4]);
}

#[test]
fn test_unpack_inverts_pack() {
  for layout in [ChannelLayout::LITTLE_ENDIAN, ChannelLayout::BIG_ENDIAN] {
    let channels = [9, 80, 255, 0];
    assert_eq!(layout.unpack(layout.pack_channels(channels)), channels);
  }
}

// =========================================================================
// Shape and layout
// =========================================================================

#[test]
fn test_shape_dimensions_per_axis() {
  let bounds = DAabb3::from_coords(0.0, 0.0, 0.0, 2.0, 4.0, 8.0);

  let x = SliceShape::new(&bounds, Axis::X, 1).expect("x slice");
  assert_eq!((x.width, x.height), (4, 8));

  let y = SliceShape::new(&bounds, Axis::Y, 3).expect("y slice");
  assert_eq!((y.width, y.height), (2, 8));

  let z = SliceShape::new(&bounds, Axis::Z, 7).expect("z slice");
  assert_eq!((z.width, z.height), (2, 4));
  assert_eq!(z.len(), 8);
  assert!(!z.is_empty());
}

#[test]
fn test_shape_cells_row_major() {
  let bounds = DAabb3::from_coords(0.0, 0.0, 0.0, 2.0, 2.0, 2.0);
  let shape = SliceShape::new(&bounds, Axis::Y, 1).expect("y slice");
  let cells: Vec<_> = shape.cells().collect();
  assert_eq!(cells, vec![[0, 1, 0], [1, 1, 0], [0, 1, 1], [1, 1, 1]]);
}

#[test]
fn test_shape_index_bounds() {
  let bounds = DAabb3::from_coords(-2.0, 0.0, 0.0, 2.0, 1.0, 1.0);
  assert!(SliceShape::new(&bounds, Axis::X, -2).is_ok());
  assert!(SliceShape::new(&bounds, Axis::X, 1).is_ok());
  assert!(SliceShape::new(&bounds, Axis::X, 2).is_err());
  assert!(SliceShape::new(&bounds, Axis::X, -3).is_err());
}

/// Only cells lying wholly inside a box with fractional faces are slices.
#[test]
fn test_shape_fractional_bounds() {
  let bounds = DAabb3::from_coords(0.5, 0.0, 0.0, 4.5, 2.0, 8.5);

  assert!(SliceShape::new(&bounds, Axis::X, 0).is_err());
  assert!(SliceShape::new(&bounds, Axis::X, 1).is_ok());
  assert!(SliceShape::new(&bounds, Axis::X, 3).is_ok());
  assert!(SliceShape::new(&bounds, Axis::X, 4).is_err());

  assert!(SliceShape::new(&bounds, Axis::Z, 7).is_ok());
  assert!(SliceShape::new(&bounds, Axis::Z, 8).is_err());

  let z = SliceShape::new(&bounds, Axis::Z, 0).expect("z slice");
  assert_eq!((z.width, z.height), (3, 2));
  assert_eq!(z.cell(0, 0), [1, 0, 0]);
}

/// The top cell of a box with a fractional max face is rejected before any
/// sampling happens.
#[test]
fn test_export_rejects_cell_cut_by_face() {
  let mut tree = RegionOctree::new(DAabb3::from_coords(0.0, 0.0, 0.0, 8.0, 8.0, 8.5));
  tree.paint(&DAabb3::from_coords(0.0, 0.0, 0.0, 1.0, 1.0, 1.0), 7);

  match tree.slice(Axis::Z, 8, 1) {
    Err(OctreeError::SliceOutOfBounds { axis: Axis::Z, index: 8, .. }) => {}
    other => panic!("index 8 should be rejected, got {:?}", other),
  }
  assert_eq!(tree.slice(Axis::Z, 7, 1), Ok(vec![0; 64]));
}

// =========================================================================
// Export
// =========================================================================

/// A z slice through the boundary-crossing region shows its footprint.
#[test]
fn test_export_footprint() {
  let mut tree = RegionOctree::new(cube(0.0, 8.0));
  let stats = tree.paint(&DAabb3::from_coords(2.0, 2.0, 2.0, 3.0, 3.0, 5.0), 666);
  assert!(!stats.has_diagnostics());

  for (index, painted) in [(1, false), (2, true), (4, true), (5, false)] {
    let shape = SliceShape::new(tree.bounds(), Axis::Z, index).expect("z slice");
    let bytes = export(tree.root(), &shape, SliceEncoding::U16).expect("export");
    assert_eq!(bytes.len(), 64 * 2);

    let values: Vec<u16> = bytes
      .chunks_exact(2)
      .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
      .collect();
    let hit = values[2 * 8 + 2];
    assert_eq!(hit, if painted { 666 } else { 0 }, "slice z={}", index);
    assert_eq!(values.iter().filter(|&&v| v != 0).count(), painted as usize);
  }
}

#[test]
fn test_export_pixels_unset_is_zero() {
  let tree = RegionOctree::new(cube(0.0, 2.0));
  let shape = SliceShape::new(tree.bounds(), Axis::X, 0).expect("x slice");
  let pixels = export_pixels(tree.root(), &shape).expect("export");
  assert_eq!(pixels, vec![0; 4]);
}
