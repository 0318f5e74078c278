//! Leaf-level rasterization.
//!
//! Each triangle marks every cell of its bounding cuboid of cells. This is
//! conservative: a thin triangle running along a cell diagonal also marks the
//! neighbouring cells it never touches. No exact triangle/cell test is done.

use glam::{UVec3, Vec3};

use crate::constants::cells_per_axis;
use crate::error::RejectReason;
use crate::geometry::FrameGeometry;

use super::level::MarkingGrid;
use super::{BoundingBoxLevel, BuildConfig};

/// Cell index along one axis for a normalized fraction.
///
/// Truncates toward the lower cell; fractions on or past the upper face land
/// in the last cell, negative fractions in the first.
#[inline]
fn axis_cell(fraction: f32, n: u32) -> u32 {
  ((fraction * n as f32).floor().max(0.0) as u32).min(n - 1)
}

#[inline]
fn cell_of(fraction: Vec3, n: u32) -> UVec3 {
  UVec3::new(
    axis_cell(fraction.x, n),
    axis_cell(fraction.y, n),
    axis_cell(fraction.z, n),
  )
}

/// Build the finest level of a frame directly from its triangles.
///
/// Triangles with any vertex index out of range for the frame are skipped.
/// The level is rejected if the frame has no usable input or if the marked
/// cells fail the density heuristic of `config`.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "octree::rasterize_leaf", fields(divisions = divisions))
)]
pub fn rasterize_leaf(
  frame: &FrameGeometry<'_>,
  divisions: u32,
  config: &BuildConfig,
) -> Result<BoundingBoxLevel, RejectReason> {
  if frame.vertices.is_empty() {
    return Err(RejectReason::NoVertices);
  }
  if frame.triangles.is_empty() {
    return Err(RejectReason::NoTriangles);
  }

  let mut grid = MarkingGrid::new(divisions)?;
  let n = cells_per_axis(divisions);

  for triangle in frame.triangles {
    let Some(local) = frame.triangle_bounds(triangle) else {
      continue;
    };
    let lo = cell_of(frame.bounds.normalize(local.min), n);
    let hi = cell_of(frame.bounds.normalize(local.max), n);

    for iz in lo.z..=hi.z {
      for iy in lo.y..=hi.y {
        for ix in lo.x..=hi.x {
          grid.mark(ix, iy, iz);
        }
      }
    }
  }

  #[cfg(feature = "tracing")]
  tracing::trace!(occupied = grid.occupied(), "leaf cells marked");

  grid.finish(config)
}

#[cfg(test)]
#[path = "rasterize_test.rs"]
mod rasterize_test;
