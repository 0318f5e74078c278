//! BuildConfig - subdivision depth and level acceptance rules.

use crate::constants::{DEFAULT_DENSITY_LIMIT, DEFAULT_MAX_LEVEL, MAX_DIVISIONS};
use crate::error::{BuildError, RejectReason};

/// What an all-empty level means.
///
/// An empty level carries no occupancy for the culling code to test against,
/// and the single-cell base case of coarsening needs a non-empty child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyLevelPolicy {
  /// Treat an empty level like any other rejected level.
  #[default]
  Reject,
  /// Keep an empty level. Coarsening it to 0 divisions is still rejected.
  Accept,
}

/// Configuration for building the per-frame level hierarchy.
#[derive(Clone, Debug)]
pub struct BuildConfig {
  /// Divisions of the finest (leaf) level. Levels `0..=max_level` are built.
  pub max_level: u32,

  /// A level is rejected once `occupied >= density_limit * total`.
  pub density_limit: f32,

  /// How a level with no occupied cells is treated.
  pub empty_level_policy: EmptyLevelPolicy,
}

impl BuildConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_max_level(mut self, max_level: u32) -> Self {
    self.max_level = max_level;
    self
  }

  pub fn with_density_limit(mut self, limit: f32) -> Self {
    self.density_limit = limit;
    self
  }

  pub fn with_empty_level_policy(mut self, policy: EmptyLevelPolicy) -> Self {
    self.empty_level_policy = policy;
    self
  }

  /// Check the configuration before any frame is touched.
  pub fn validate(&self) -> Result<(), BuildError> {
    if self.max_level > MAX_DIVISIONS {
      return Err(BuildError::InvalidConfig(format!(
        "max_level {} exceeds {}",
        self.max_level, MAX_DIVISIONS
      )));
    }
    if !(self.density_limit > 0.0 && self.density_limit <= 1.0) {
      return Err(BuildError::InvalidConfig(format!(
        "density_limit {} is outside (0, 1]",
        self.density_limit
      )));
    }
    Ok(())
  }

  /// Density heuristic shared by leaf and coarsened levels.
  ///
  /// The single-cell level produced by coarsening to 0 divisions bypasses
  /// this check.
  pub fn check_occupancy(&self, occupied: usize, total: usize) -> Result<(), RejectReason> {
    if occupied == 0 {
      return match self.empty_level_policy {
        EmptyLevelPolicy::Reject => Err(RejectReason::Empty),
        EmptyLevelPolicy::Accept => Ok(()),
      };
    }
    if occupied == total {
      return Err(RejectReason::FullyDense { total });
    }
    // A NaN limit fails the comparison and rejects.
    if !((occupied as f64) < self.density_limit as f64 * total as f64) {
      return Err(RejectReason::TooDense { occupied, total });
    }
    Ok(())
  }
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      max_level: DEFAULT_MAX_LEVEL,
      density_limit: DEFAULT_DENSITY_LIMIT,
      empty_level_policy: EmptyLevelPolicy::default(),
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
