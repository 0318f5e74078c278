//! Keyframe mesh description read from JSON.
//!
//! ```json
//! {
//!   "triangles": [[0, 1, 2]],
//!   "frames": [
//!     { "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]] },
//!     { "vertices": [[0, 0, 0], [2, 0, 0], [0, 2, 0]],
//!       "bounds": { "min": [0, 0, 0], "max": [2, 2, 1] } }
//!   ]
//! }
//! ```
//!
//! Frames without explicit bounds use the tight box around their vertices.

use anyhow::{Context, Result};
use glam::Vec3;
use keyframe_lod::{FrameBounds, Keyframe, KeyframeMesh};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct MeshFile {
	pub triangles: Vec<[u32; 3]>,
	pub frames: Vec<FrameFile>,
}

#[derive(Debug, Deserialize)]
pub struct FrameFile {
	pub vertices: Vec<[f32; 3]>,
	#[serde(default)]
	pub bounds: Option<BoundsFile>,
}

#[derive(Debug, Deserialize)]
pub struct BoundsFile {
	pub min: [f32; 3],
	pub max: [f32; 3],
}

impl MeshFile {
	/// Load a mesh description from a JSON file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read mesh file: {}", path.display()))?;
		Self::parse(&content)
	}

	pub fn parse(content: &str) -> Result<Self> {
		serde_json::from_str(content).with_context(|| "Failed to parse mesh JSON")
	}

	/// Convert into the builder's owned mesh.
	pub fn into_mesh(self) -> Result<KeyframeMesh> {
		let mut mesh = KeyframeMesh::new(self.triangles);
		for (index, frame) in self.frames.into_iter().enumerate() {
			let vertices: Vec<Vec3> = frame.vertices.into_iter().map(Vec3::from).collect();
			let keyframe = match frame.bounds {
				Some(bounds) => {
					let (min, max) = (Vec3::from(bounds.min), Vec3::from(bounds.max));
					if !min.cmple(max).all() {
						anyhow::bail!("frame {} has bounds with min > max", index);
					}
					Keyframe::new(vertices, FrameBounds::new(min, max))
				}
				None => Keyframe::from_vertices(vertices),
			};
			mesh.push_frame(keyframe);
		}
		Ok(mesh)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use keyframe_lod::AnimatedGeometry;

	const SAMPLE: &str = r#"{
		"triangles": [[0, 1, 2]],
		"frames": [
			{ "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]] },
			{ "vertices": [[0, 0, 0], [2, 0, 0], [0, 2, 0]],
			  "bounds": { "min": [0, 0, 0], "max": [2, 2, 1] } }
		]
	}"#;

	#[test]
	fn test_parse_sample() {
		let mesh = MeshFile::parse(SAMPLE).unwrap().into_mesh().unwrap();
		assert_eq!(mesh.frame_count(), 2);
		assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
		assert_eq!(mesh.frame_bounds(0).unwrap().max, Vec3::new(1.0, 1.0, 0.0));
		assert_eq!(mesh.frame_bounds(1).unwrap().max, Vec3::new(2.0, 2.0, 1.0));
	}

	#[test]
	fn test_inverted_bounds_rejected() {
		let json = r#"{
			"triangles": [],
			"frames": [{ "vertices": [], "bounds": { "min": [1, 0, 0], "max": [0, 1, 1] } }]
		}"#;
		assert!(MeshFile::parse(json).unwrap().into_mesh().is_err());
	}

	#[test]
	fn test_malformed_json_rejected() {
		assert!(MeshFile::parse("{ \"triangles\": [[0, 1]] }").is_err());
	}
}
