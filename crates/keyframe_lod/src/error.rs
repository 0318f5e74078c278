//! Failure types for level and model construction.
//!
//! A rejected level is an expected outcome, not a fault: most models reject
//! their densest levels. Only a rejected leaf level escalates to a
//! [`BuildError`] for the whole model.

use thiserror::Error;

/// Why a single level was not produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
  /// The geometry source has no data for this frame.
  #[error("frame {frame} is out of range")]
  FrameOutOfRange { frame: usize },

  /// The frame has no vertex positions.
  #[error("frame has no vertices")]
  NoVertices,

  /// The model has no triangles.
  #[error("model has no triangles")]
  NoTriangles,

  /// Requested subdivision depth exceeds [`crate::MAX_DIVISIONS`].
  #[error("{divisions} divisions exceeds the supported maximum of {max}")]
  DivisionsTooLarge { divisions: u32, max: u32 },

  /// Scratch storage for the marking pass could not be allocated.
  #[error("could not allocate {cells} cells")]
  OutOfMemory { cells: usize },

  /// A level cannot be coarsened past a single cell.
  #[error("level with 0 divisions has no coarser level")]
  NoCoarserLevel,

  /// No cell was marked and the empty-level policy rejects empty levels.
  #[error("no cells occupied")]
  Empty,

  /// Every cell is occupied; the level cannot prune anything.
  #[error("all {total} cells occupied")]
  FullyDense { total: usize },

  /// Occupancy reached the configured density limit.
  #[error("{occupied} of {total} cells occupied")]
  TooDense { occupied: usize, total: usize },
}

impl RejectReason {
  /// True when the level was rejected because of its occupancy rather than
  /// because the input was unusable.
  pub fn is_density(&self) -> bool {
    matches!(self, Self::FullyDense { .. } | Self::TooDense { .. })
  }
}

/// Model-level failure: no volume tree exists for the model.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BuildError {
  /// The geometry source reports zero animation frames.
  #[error("model has no animation frames")]
  NoFrames,

  /// Build configuration is unusable.
  #[error("invalid build config: {0}")]
  InvalidConfig(String),

  /// The finest level of a frame could not be built.
  #[error("leaf level of frame {frame} rejected: {reason}")]
  LeafRejected {
    frame: usize,
    #[source]
    reason: RejectReason,
  },
}
