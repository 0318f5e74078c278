//! Keyframe volume tree report.
//!
//! Loads a keyframe mesh description, builds the per-frame bounding-volume
//! levels and prints how many cells each level kept. Useful for tuning the
//! leaf depth and density limit of a model before shipping it.

mod config;
mod mesh;

use anyhow::Result;
use clap::Parser;
use keyframe_lod::{LevelOfDetailArray, ModelVolumeTree};
use std::path::PathBuf;

use config::Settings;
use mesh::MeshFile;

/// Builds keyframe volume trees and prints level statistics.
#[derive(Parser, Debug)]
#[command(name = "volume_report")]
#[command(about = "Builds per-frame bounding-volume levels for a keyframe mesh")]
struct Args {
	/// Path to the mesh JSON file.
	#[arg(short, long)]
	mesh: PathBuf,

	/// Path to a build settings TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Override the leaf level divisions.
	#[arg(long)]
	max_level: Option<u32>,

	/// Build frames on the rayon thread pool.
	#[arg(long)]
	parallel: bool,

	/// Also print the finest level's cells in frame-local space.
	#[arg(long)]
	cells: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let mut settings = match &args.config {
		Some(path) => {
			println!("Loading config from: {}", path.display());
			Settings::load(path)?
		}
		None => Settings::default(),
	};
	if let Some(max_level) = args.max_level {
		settings.max_level = max_level;
	}
	let build_config = settings.build_config();
	build_config.validate()?;

	println!("Loading mesh from: {}", args.mesh.display());
	let mesh = MeshFile::load(&args.mesh)?.into_mesh()?;
	println!(
		"{} frames, {} triangles, leaf divisions {}",
		mesh.frames.len(),
		mesh.triangles.len(),
		build_config.max_level
	);

	let result = if args.parallel {
		ModelVolumeTree::build_parallel(&mesh, &build_config)
	} else {
		ModelVolumeTree::build(&mesh, &build_config)
	};

	let tree = match result {
		Ok(tree) => tree,
		Err(err) => {
			// Not a tool failure: the model simply gets no LOD acceleration.
			println!("\nNo volume tree: {}", err);
			return Ok(());
		}
	};

	println!();
	for (index, lods) in tree.frames().enumerate() {
		println!("frame {:>4}: {}", index, describe_levels(lods));

		if args.cells {
			if let (Some(finest), Some(bounds)) = (lods.finest(), mesh.frames.get(index).map(|f| f.bounds)) {
				for cell in finest.iter() {
					let local = cell.denormalize(&bounds);
					println!("    {:?} .. {:?}", local.min.to_array(), local.max.to_array());
				}
			}
		}
	}

	let stats = tree.stats();
	println!(
		"\nDone! {} levels over {} frames ({:.2} per frame), {} truncated, {} cells, {} us",
		stats.levels_built,
		stats.frames_built,
		stats.average_levels_per_frame(),
		stats.truncated_frames,
		stats.occupied_cells,
		stats.build_time_us
	);

	Ok(())
}

/// One line per frame: occupied / total cells at each present level.
fn describe_levels(lods: &LevelOfDetailArray) -> String {
	let mut parts: Vec<String> = lods
		.iter()
		.map(|level| {
			format!(
				"d{}={}/{}",
				level.divisions(),
				level.occupied_count(),
				level.total_cells()
			)
		})
		.collect();
	if !lods.is_complete() {
		parts.push("(truncated)".to_string());
	}
	parts.join(" ")
}
