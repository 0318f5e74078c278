//! Counters collected while building a model's volume tree.

use crate::octree::LevelOfDetailArray;

/// Statistics from one model build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
  /// Number of frames with a leaf level.
  pub frames_built: usize,
  /// Levels stored across all frames.
  pub levels_built: usize,
  /// Frames whose coarsening stopped before level 0.
  pub truncated_frames: usize,
  /// Occupied cells across all stored levels.
  pub occupied_cells: usize,
  /// Wall-clock time of the build in microseconds.
  pub build_time_us: u64,
}

impl BuildStats {
  /// Account for one finished frame.
  pub fn record_frame(&mut self, lods: &LevelOfDetailArray, truncated: bool) {
    self.frames_built += 1;
    self.levels_built += lods.len();
    self.occupied_cells += lods.iter().map(|level| level.occupied_count()).sum::<usize>();
    if truncated {
      self.truncated_frames += 1;
    }
  }

  /// Average number of stored levels per frame.
  #[inline]
  pub fn average_levels_per_frame(&self) -> f64 {
    if self.frames_built == 0 {
      0.0
    } else {
      self.levels_built as f64 / self.frames_built as f64
    }
  }

  /// True when no frame lost any of its coarse levels.
  #[inline]
  pub fn is_complete(&self) -> bool {
    self.truncated_frames == 0
  }
}
