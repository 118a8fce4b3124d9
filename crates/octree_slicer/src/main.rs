//! Region octree slice exporter.
//!
//! Paints the boxes of a TOML scene into a region octree and writes one
//! axis-aligned cross-section as a PNG or a raw label buffer.
//!
//! Set `RUST_LOG=region_octree=debug` to see dropped fragments and merges.

mod output;
mod scene;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use region_octree::Axis;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use output::OutputFormat;
use scene::Scene;

/// Axis the slice is taken across.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisArg {
	X,
	Y,
	Z,
}

impl From<AxisArg> for Axis {
	fn from(axis: AxisArg) -> Self {
		match axis {
			AxisArg::X => Axis::X,
			AxisArg::Y => Axis::Y,
			AxisArg::Z => Axis::Z,
		}
	}
}

/// Region octree slice exporter.
#[derive(Parser, Debug)]
#[command(name = "octree_slice")]
#[command(about = "Paints a scene into a region octree and exports one slice")]
struct Args {
	/// Path to the scene TOML file.
	#[arg(short, long)]
	scene: PathBuf,

	/// Axis the slice is taken across.
	#[arg(short, long, value_enum, default_value_t = AxisArg::Z)]
	axis: AxisArg,

	/// Cell index along the axis.
	#[arg(short, long, allow_negative_numbers = true)]
	index: i64,

	/// Output format.
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Gray8)]
	format: OutputFormat,

	/// Force full alpha in rgba output.
	#[arg(long)]
	opaque: bool,

	/// Output file (default: scene name plus axis and index).
	#[arg(short, long)]
	output: Option<PathBuf>,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let args = Args::parse();
	let axis = Axis::from(args.axis);

	info!("Loading scene from: {}", args.scene.display());
	let scene = Scene::load(&args.scene)?;

	let (tree, stats) = scene.build();
	info!(
		paints = scene.paint.len(),
		erases = scene.erase.len(),
		nodes = tree.tree_size(),
		leaves = tree.leaf_count(),
		depth = tree.tree_depth(),
		"Scene painted"
	);
	if stats.has_diagnostics() {
		warn!(
			ignored_subvoxel = stats.ignored_subvoxel,
			skipped_boundary = stats.skipped_boundary,
			"Some paint fragments were dropped"
		);
	}

	let output = args.output.unwrap_or_else(|| {
		let stem = args
			.scene
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_else(|| "slice".to_owned());
		PathBuf::from(format!(
			"{}_{}{}.{}",
			stem,
			axis,
			args.index,
			args.format.extension()
		))
	});

	let rendered = output::render(&tree, axis, args.index, args.format, args.opaque)?;
	rendered.save(&output)?;

	match rendered.dimensions() {
		Some((width, height)) => info!("Wrote {}x{} slice to {}", width, height, output.display()),
		None => info!("Wrote raw slice to {}", output.display()),
	}

	Ok(())
}
