//! ModelVolumeTree - per-frame level hierarchies of one model.
//!
//! # Failure Policy
//!
//! The two ways a level can fail are handled differently:
//!
//! - **Leaf rejected** on any frame: the whole tree is discarded and the
//!   model has no LOD acceleration at all ([`FrameBuild::Fatal`]).
//! - **Coarsening rejected**: that frame keeps the levels already built and
//!   stops descending; other frames are unaffected ([`FrameBuild::Truncated`]).
//!
//! Builds are deterministic, so a failed build is never retried.

use rayon::prelude::*;

use crate::error::{BuildError, RejectReason};
use crate::geometry::{AnimatedGeometry, FrameGeometry};
use crate::octree::{coarsen, rasterize_leaf, BoundingBoxLevel, BuildConfig, LevelOfDetailArray};
use crate::stats::BuildStats;

/// Outcome of building one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameBuild {
  /// Every level from the leaf down to level 0 was built.
  Complete(LevelOfDetailArray),
  /// Coarsening to `failed_level` was rejected; coarser levels are absent.
  Truncated {
    lods: LevelOfDetailArray,
    failed_level: u32,
    reason: RejectReason,
  },
  /// The leaf level was rejected. Fatal for the whole model.
  Fatal(RejectReason),
}

impl FrameBuild {
  /// Levels of the frame, unless the build was fatal.
  pub fn lods(&self) -> Option<&LevelOfDetailArray> {
    match self {
      Self::Complete(lods) | Self::Truncated { lods, .. } => Some(lods),
      Self::Fatal(_) => None,
    }
  }

  pub fn is_fatal(&self) -> bool {
    matches!(self, Self::Fatal(_))
  }
}

/// Build the leaf level of a frame, then coarsen down to level 0.
pub fn build_frame(frame: &FrameGeometry<'_>, config: &BuildConfig) -> FrameBuild {
  let mut finer = match rasterize_leaf(frame, config.max_level, config) {
    Ok(leaf) => leaf,
    Err(reason) => return FrameBuild::Fatal(reason),
  };
  let mut lods = LevelOfDetailArray::with_max_level(config.max_level);

  for level in (0..config.max_level).rev() {
    match coarsen(&finer, config) {
      Ok(coarser) => lods.insert(std::mem::replace(&mut finer, coarser)),
      Err(reason) => {
        lods.insert(finer);
        return FrameBuild::Truncated {
          lods,
          failed_level: level,
          reason,
        };
      }
    }
  }

  lods.insert(finer);
  FrameBuild::Complete(lods)
}

fn build_frame_at<G: AnimatedGeometry + ?Sized>(
  geometry: &G,
  frame: usize,
  config: &BuildConfig,
) -> FrameBuild {
  match geometry.frame(frame) {
    Some(frame_geometry) => build_frame(&frame_geometry, config),
    None => FrameBuild::Fatal(RejectReason::FrameOutOfRange { frame }),
  }
}

/// Bounding-volume levels for every animation frame of one model.
///
/// Read-only once built. Culling code queries the finest level of a frame
/// first and falls back to coarser ones.
#[derive(Clone, Debug, Default)]
pub struct ModelVolumeTree {
  frames: Vec<LevelOfDetailArray>,
  stats: BuildStats,
}

impl ModelVolumeTree {
  /// Create an empty tree.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a tree with empty per-frame arrays for levels `0..=max_level`.
  pub fn with_frames(frame_count: usize, max_level: u32) -> Self {
    Self {
      frames: vec![LevelOfDetailArray::with_max_level(max_level); frame_count],
      stats: BuildStats::default(),
    }
  }

  /// Build levels for every frame of `geometry`, one frame after another.
  ///
  /// Stops at the first frame whose leaf level is rejected.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "model::build", fields(frames = geometry.frame_count()))
  )]
  pub fn build<G: AnimatedGeometry + ?Sized>(
    geometry: &G,
    config: &BuildConfig,
  ) -> Result<Self, BuildError> {
    let frame_count = Self::check_input(geometry.frame_count(), config)?;
    let started = web_time::Instant::now();

    let results = (0..frame_count).map(|frame| build_frame_at(geometry, frame, config));
    Self::assemble(results, started)
  }

  /// Same result as [`Self::build`], with frames built concurrently.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "model::build_parallel", fields(frames = geometry.frame_count()))
  )]
  pub fn build_parallel<G: AnimatedGeometry + Sync + ?Sized>(
    geometry: &G,
    config: &BuildConfig,
  ) -> Result<Self, BuildError> {
    let frame_count = Self::check_input(geometry.frame_count(), config)?;
    let started = web_time::Instant::now();

    let results: Vec<FrameBuild> = (0..frame_count)
      .into_par_iter()
      .map(|frame| build_frame_at(geometry, frame, config))
      .collect();
    Self::assemble(results, started)
  }

  /// Replace this tree with a fresh build.
  ///
  /// On failure the tree is left empty.
  pub fn rebuild<G: AnimatedGeometry + ?Sized>(
    &mut self,
    geometry: &G,
    config: &BuildConfig,
  ) -> Result<(), BuildError> {
    self.clear();
    *self = Self::build(geometry, config)?;
    Ok(())
  }

  fn check_input(frame_count: usize, config: &BuildConfig) -> Result<usize, BuildError> {
    config.validate()?;
    if frame_count == 0 {
      return Err(BuildError::NoFrames);
    }
    Ok(frame_count)
  }

  /// Collect frame results in frame order. The first fatal frame wins.
  fn assemble(
    results: impl IntoIterator<Item = FrameBuild>,
    started: web_time::Instant,
  ) -> Result<Self, BuildError> {
    let mut tree = Self::new();

    for (frame, result) in results.into_iter().enumerate() {
      match result {
        FrameBuild::Complete(lods) => {
          tree.stats.record_frame(&lods, false);
          tree.frames.push(lods);
        }
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        FrameBuild::Truncated {
          lods,
          failed_level,
          reason,
        } => {
          #[cfg(feature = "tracing")]
          tracing::debug!(frame, failed_level, %reason, "coarsening stopped");
          tree.stats.record_frame(&lods, true);
          tree.frames.push(lods);
        }
        FrameBuild::Fatal(reason) => {
          #[cfg(feature = "tracing")]
          tracing::debug!(frame, %reason, "leaf level rejected, discarding volume tree");
          tree.clear();
          return Err(BuildError::LeafRejected { frame, reason });
        }
      }
    }

    tree.stats.build_time_us = started.elapsed().as_micros() as u64;
    Ok(tree)
  }

  /// Number of frames with levels.
  #[inline]
  pub fn frame_count(&self) -> usize {
    self.frames.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.frames.is_empty()
  }

  /// Levels of one frame.
  pub fn frame(&self, frame: usize) -> Option<&LevelOfDetailArray> {
    self.frames.get(frame)
  }

  /// Iterate over frames in order.
  pub fn frames(&self) -> impl Iterator<Item = &LevelOfDetailArray> {
    self.frames.iter()
  }

  /// One level of one frame, if it exists.
  pub fn level(&self, frame: usize, divisions: u32) -> Option<&BoundingBoxLevel> {
    self.frame(frame)?.level(divisions)
  }

  /// Finest level available for a frame.
  pub fn finest_level(&self, frame: usize) -> Option<&BoundingBoxLevel> {
    self.frame(frame)?.finest()
  }

  pub fn stats(&self) -> &BuildStats {
    &self.stats
  }

  /// Release every frame and level. Safe to call on an empty tree.
  pub fn clear(&mut self) {
    for lods in &mut self.frames {
      lods.clear();
    }
    self.frames = Vec::new();
    self.stats = BuildStats::default();
  }

  /// Clear, then allocate empty per-frame arrays.
  pub fn reset(&mut self, frame_count: usize, max_level: u32) {
    self.clear();
    *self = Self::with_frames(frame_count, max_level);
  }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
