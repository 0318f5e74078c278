//! CellCoord - integer position of a cell at its subdivision level.
//!
//! Coordinates are at the cell's own level, not the finest level, so
//! parent/child relationships are a shift by one bit per axis.

use crate::constants::{cells_per_axis, deinterleave, interleave, MAX_DIVISIONS};

use super::AxisAlignedCell;

/// Integer cell coordinate - immutable value type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellCoord {
  /// Cell X index in `[0, 2^divisions)`
  pub x: u32,
  /// Cell Y index in `[0, 2^divisions)`
  pub y: u32,
  /// Cell Z index in `[0, 2^divisions)`
  pub z: u32,
  /// Subdivision depth (0 = one cell spanning the frame, higher = finer)
  pub divisions: u32,
}

impl CellCoord {
  /// Create a new coordinate at the given depth.
  pub fn new(x: u32, y: u32, z: u32, divisions: u32) -> Self {
    debug_assert!(
      x < cells_per_axis(divisions) && y < cells_per_axis(divisions) && z < cells_per_axis(divisions),
      "cell coordinate out of range for {} divisions",
      divisions
    );
    Self { x, y, z, divisions }
  }

  /// Coordinate addressed by an interleaved index.
  pub fn from_index(index: usize, divisions: u32) -> Self {
    let (x, y, z) = deinterleave(index, divisions);
    Self { x, y, z, divisions }
  }

  /// Recover the coordinate of a non-sentinel cell at the given depth.
  ///
  /// Uses the cell midpoint, which sits half a cell away from every boundary
  /// on all three axes, so no per-axis epsilon is needed.
  pub fn from_cell(cell: &AxisAlignedCell, divisions: u32) -> Self {
    let n = cells_per_axis(divisions);
    let scaled = cell.center() * n as f32;
    let axis = |v: f32| (v.floor().max(0.0) as u32).min(n - 1);
    Self {
      x: axis(scaled.x),
      y: axis(scaled.y),
      z: axis(scaled.z),
      divisions,
    }
  }

  #[inline]
  pub fn cells_per_axis(&self) -> u32 {
    cells_per_axis(self.divisions)
  }

  /// Interleaved index of this coordinate.
  #[inline]
  pub fn index(&self) -> usize {
    interleave(self.x, self.y, self.z, self.divisions)
  }

  /// Get parent coordinate (coarser: divisions - 1).
  ///
  /// Returns None at 0 divisions (already the whole frame).
  pub fn parent(&self) -> Option<Self> {
    if self.divisions == 0 {
      return None;
    }
    Some(Self {
      x: self.x >> 1,
      y: self.y >> 1,
      z: self.z >> 1,
      divisions: self.divisions - 1,
    })
  }

  /// Get child coordinate (finer: divisions + 1).
  ///
  /// Octant bits: X (bit 0), Y (bit 1), Z (bit 2).
  /// Returns None at [`MAX_DIVISIONS`].
  pub fn child(&self, octant: u8) -> Option<Self> {
    if self.divisions >= MAX_DIVISIONS {
      return None;
    }
    Some(Self {
      x: (self.x << 1) | (octant & 1) as u32,
      y: (self.y << 1) | ((octant >> 1) & 1) as u32,
      z: (self.z << 1) | ((octant >> 2) & 1) as u32,
      divisions: self.divisions + 1,
    })
  }

  /// Boundaries of this cell.
  #[inline]
  pub fn to_cell(&self) -> AxisAlignedCell {
    AxisAlignedCell::from_coord(*self)
  }
}

#[cfg(test)]
#[path = "coord_test.rs"]
mod coord_test;
