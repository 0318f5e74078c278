//! Level coarsening: derive the parent level from a child level.
//!
//! Each occupied child cell marks the parent cell one bit up on every axis,
//! so 8 children merge into 1 parent. Coarsening never marks a parent that has
//! no occupied child, and never drops one that does.

use crate::error::RejectReason;

use super::level::MarkingGrid;
use super::{BoundingBoxLevel, BuildConfig};

/// Build the level with one division less than `child`.
///
/// Coarsening to 0 divisions yields the unit cell whenever the child has any
/// occupied cell, without applying the density heuristic. Every other depth
/// is subject to the same heuristic as the leaf level.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "octree::coarsen", fields(divisions = child.divisions()))
)]
pub fn coarsen(child: &BoundingBoxLevel, config: &BuildConfig) -> Result<BoundingBoxLevel, RejectReason> {
  let Some(divisions) = child.divisions().checked_sub(1) else {
    return Err(RejectReason::NoCoarserLevel);
  };

  if divisions == 0 {
    if child.is_empty() {
      return Err(RejectReason::Empty);
    }
    return Ok(BoundingBoxLevel::unit());
  }

  let mut grid = MarkingGrid::new(divisions)?;
  for coord in child.coords() {
    if let Some(parent) = coord.parent() {
      grid.mark(parent.x, parent.y, parent.z);
    }
  }
  debug_assert_eq!(grid.divisions(), divisions);

  grid.finish(config)
}

#[cfg(test)]
#[path = "coarsen_test.rs"]
mod coarsen_test;
