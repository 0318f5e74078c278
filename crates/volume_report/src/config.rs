//! Build settings read from a TOML file.

use anyhow::{Context, Result};
use keyframe_lod::{BuildConfig, EmptyLevelPolicy, DEFAULT_DENSITY_LIMIT, DEFAULT_MAX_LEVEL};
use serde::Deserialize;
use std::path::Path;

/// Volume build settings.
#[derive(Debug, Deserialize)]
pub struct Settings {
	/// Divisions of the leaf level.
	#[serde(default = "default_max_level")]
	pub max_level: u32,
	/// Occupancy fraction at which a level is rejected.
	#[serde(default = "default_density_limit")]
	pub density_limit: f32,
	/// Keep levels with no occupied cells.
	#[serde(default)]
	pub keep_empty_levels: bool,
}

fn default_max_level() -> u32 {
	DEFAULT_MAX_LEVEL
}

fn default_density_limit() -> f32 {
	DEFAULT_DENSITY_LIMIT
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			max_level: default_max_level(),
			density_limit: default_density_limit(),
			keep_empty_levels: false,
		}
	}
}

impl Settings {
	/// Load settings from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	pub fn parse(content: &str) -> Result<Self> {
		let settings: Settings =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
		settings.build_config().validate()?;
		Ok(settings)
	}

	pub fn build_config(&self) -> BuildConfig {
		let policy = if self.keep_empty_levels {
			EmptyLevelPolicy::Accept
		} else {
			EmptyLevelPolicy::Reject
		};
		BuildConfig::new()
			.with_max_level(self.max_level)
			.with_density_limit(self.density_limit)
			.with_empty_level_policy(policy)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_file_uses_defaults() {
		let settings = Settings::parse("").unwrap();
		assert_eq!(settings.max_level, 3);
		assert_eq!(settings.density_limit, 0.75);
		assert!(!settings.keep_empty_levels);
	}

	#[test]
	fn test_parse_all_fields() {
		let settings = Settings::parse(
			"max_level = 5\ndensity_limit = 0.5\nkeep_empty_levels = true\n",
		)
		.unwrap();
		let config = settings.build_config();
		assert_eq!(config.max_level, 5);
		assert_eq!(config.density_limit, 0.5);
		assert_eq!(config.empty_level_policy, EmptyLevelPolicy::Accept);
	}

	#[test]
	fn test_parse_rejects_invalid_settings() {
		assert!(Settings::parse("max_level = 12").is_err());
		assert!(Settings::parse("density_limit = 2.0").is_err());
		assert!(Settings::parse("max_level = \"deep\"").is_err());
	}
}
