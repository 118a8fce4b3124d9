//! Slice rendering and file output.
//!
//! Output formats:
//! - gray8: 8-bit grayscale PNG, labels above 255 saturate
//! - gray16: 16-bit grayscale PNG, labels above 65535 saturate
//! - rgba: label bytes as R=bits 0-7, G=8-15, B=16-23, A=24-31
//! - raw32: headerless native-endian u32 buffer, row-major

use anyhow::{Context, Result};
use clap::ValueEnum;
use image::{GrayImage, ImageBuffer, Luma, RgbaImage};
use region_octree::{Axis, RegionOctree, SliceEncoding};
use std::path::Path;

/// File format written for a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Gray8,
	Gray16,
	Rgba,
	Raw32,
}

impl OutputFormat {
	pub fn encoding(self) -> SliceEncoding {
		match self {
			OutputFormat::Gray8 => SliceEncoding::U8,
			OutputFormat::Gray16 => SliceEncoding::U16,
			OutputFormat::Rgba => SliceEncoding::Rgba8,
			OutputFormat::Raw32 => SliceEncoding::U32,
		}
	}

	pub fn extension(self) -> &'static str {
		match self {
			OutputFormat::Raw32 => "raw",
			_ => "png",
		}
	}
}

/// One exported slice, ready to save.
#[derive(Debug)]
pub enum RenderedSlice {
	Gray8(GrayImage),
	Gray16(ImageBuffer<Luma<u16>, Vec<u16>>),
	Rgba(RgbaImage),
	Raw(Vec<u8>),
}

/// Export the slice at `index` along `axis` and wrap it for `format`.
///
/// With `opaque`, RGBA output ignores the label's top byte and writes full
/// alpha so labels below 2^24 stay visible.
pub fn render(
	tree: &RegionOctree,
	axis: Axis,
	index: i64,
	format: OutputFormat,
	opaque: bool,
) -> Result<RenderedSlice> {
	let shape = tree.slice_shape(axis, index)?;
	let mut bytes = tree.slice_with(axis, index, format.encoding())?;
	let (width, height) = (
		u32::try_from(shape.width).context("Slice too wide for an image")?,
		u32::try_from(shape.height).context("Slice too tall for an image")?,
	);

	let rendered = match format {
		OutputFormat::Gray8 => RenderedSlice::Gray8(
			GrayImage::from_raw(width, height, bytes).context("Gray8 buffer size mismatch")?,
		),
		OutputFormat::Gray16 => {
			let values = bytes
				.chunks_exact(2)
				.map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
				.collect();
			RenderedSlice::Gray16(
				ImageBuffer::from_raw(width, height, values).context("Gray16 buffer size mismatch")?,
			)
		}
		OutputFormat::Rgba => {
			if opaque {
				for pixel in bytes.chunks_exact_mut(4) {
					pixel[3] = u8::MAX;
				}
			}
			RenderedSlice::Rgba(
				RgbaImage::from_raw(width, height, bytes).context("RGBA buffer size mismatch")?,
			)
		}
		OutputFormat::Raw32 => RenderedSlice::Raw(bytes),
	};
	Ok(rendered)
}

impl RenderedSlice {
	/// Write the slice to `path`.
	pub fn save(&self, path: &Path) -> Result<()> {
		let saved = match self {
			RenderedSlice::Gray8(img) => img.save(path),
			RenderedSlice::Gray16(img) => img.save(path),
			RenderedSlice::Rgba(img) => img.save(path),
			RenderedSlice::Raw(bytes) => {
				return std::fs::write(path, bytes)
					.with_context(|| format!("Failed to write raw slice: {}", path.display()));
			}
		};
		saved.with_context(|| format!("Failed to save image: {}", path.display()))
	}

	pub fn dimensions(&self) -> Option<(u32, u32)> {
		match self {
			RenderedSlice::Gray8(img) => Some(img.dimensions()),
			RenderedSlice::Gray16(img) => Some(img.dimensions()),
			RenderedSlice::Rgba(img) => Some(img.dimensions()),
			RenderedSlice::Raw(_) => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use region_octree::DAabb3;

	fn painted_tree() -> RegionOctree {
		let mut tree = RegionOctree::new(DAabb3::from_coords(0.0, 0.0, 0.0, 4.0, 4.0, 4.0));
		tree.paint(&DAabb3::from_coords(1.0, 0.0, 0.0, 2.0, 1.0, 4.0), 300);
		tree.paint(&DAabb3::from_coords(0.0, 3.0, 0.0, 1.0, 4.0, 4.0), 0x0403_0201);
		tree
	}

	#[test]
	fn test_gray8_saturates() {
		let rendered = render(&painted_tree(), Axis::Z, 2, OutputFormat::Gray8, false).unwrap();
		let RenderedSlice::Gray8(img) = rendered else {
			panic!("expected gray8 image");
		};
		assert_eq!(img.dimensions(), (4, 4));
		assert_eq!(img.get_pixel(1, 0).0, [255]);
		assert_eq!(img.get_pixel(0, 0).0, [0]);
	}

	#[test]
	fn test_gray16_keeps_label() {
		let rendered = render(&painted_tree(), Axis::Z, 0, OutputFormat::Gray16, false).unwrap();
		let RenderedSlice::Gray16(img) = rendered else {
			panic!("expected gray16 image");
		};
		assert_eq!(img.get_pixel(1, 0).0, [300]);
		assert_eq!(img.get_pixel(0, 3).0, [u16::MAX]);
	}

	#[test]
	fn test_rgba_channels() {
		let tree = painted_tree();

		let RenderedSlice::Rgba(img) = render(&tree, Axis::Z, 1, OutputFormat::Rgba, false).unwrap()
		else {
			panic!("expected rgba image");
		};
		assert_eq!(img.get_pixel(0, 3).0, [1, 2, 3, 4]);
		assert_eq!(img.get_pixel(1, 0).0, [44, 1, 0, 0]);

		let RenderedSlice::Rgba(img) = render(&tree, Axis::Z, 1, OutputFormat::Rgba, true).unwrap()
		else {
			panic!("expected rgba image");
		};
		assert_eq!(img.get_pixel(1, 0).0, [44, 1, 0, 255]);
		assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0, 255]);
	}

	#[test]
	fn test_raw32_is_native_endian() {
		let rendered = render(&painted_tree(), Axis::Z, 3, OutputFormat::Raw32, false).unwrap();
		let RenderedSlice::Raw(bytes) = rendered else {
			panic!("expected raw buffer");
		};
		assert_eq!(bytes.len(), 16 * 4);
		assert_eq!(&bytes[4..8], &300u32.to_ne_bytes());
		assert_eq!(&bytes[12 * 4..13 * 4], &0x0403_0201u32.to_ne_bytes());
	}

	#[test]
	fn test_out_of_range_index() {
		assert!(render(&painted_tree(), Axis::X, 4, OutputFormat::Gray8, false).is_err());
	}
}
