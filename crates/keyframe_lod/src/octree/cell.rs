//! AxisAlignedCell - one box of a subdivision level.

use glam::Vec3;

use super::{CellCoord, FrameBounds};

/// Axis-aligned cell in the frame's normalized `[0, 1]` space.
///
/// Boundaries are always multiples of `1 / cells_per_axis`. A cell with
/// `mins.x == maxs.x` is the unoccupied sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAlignedCell {
  /// Minimum corner as a fraction of the frame bounds.
  pub mins: Vec3,
  /// Maximum corner as a fraction of the frame bounds.
  pub maxs: Vec3,
}

impl AxisAlignedCell {
  /// Unoccupied cell. Degenerate on all three axes.
  pub const SENTINEL: Self = Self {
    mins: Vec3::ZERO,
    maxs: Vec3::ZERO,
  };

  /// The whole normalized frame box.
  pub const UNIT: Self = Self {
    mins: Vec3::ZERO,
    maxs: Vec3::ONE,
  };

  /// Cell boundaries for an integer coordinate.
  pub fn from_coord(coord: CellCoord) -> Self {
    let scale = 1.0 / coord.cells_per_axis() as f32;
    let min = Vec3::new(coord.x as f32, coord.y as f32, coord.z as f32);
    Self {
      mins: min * scale,
      maxs: (min + Vec3::ONE) * scale,
    }
  }

  /// Emptiness test. Only the X axis is checked.
  #[inline]
  pub fn is_sentinel(&self) -> bool {
    self.mins.x == self.maxs.x
  }

  /// Center of the cell in normalized space.
  #[inline]
  pub fn center(&self) -> Vec3 {
    (self.mins + self.maxs) * 0.5
  }

  /// Map the cell into the frame's local space.
  ///
  /// Corners map through `bounds` as given, so inverted frame bounds yield an
  /// inverted box rather than a panic.
  pub fn denormalize(&self, bounds: &FrameBounds) -> FrameBounds {
    FrameBounds {
      min: bounds.denormalize(self.mins),
      max: bounds.denormalize(self.maxs),
    }
  }
}

impl Default for AxisAlignedCell {
  fn default() -> Self {
    Self::SENTINEL
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sentinel_is_default() {
    assert!(AxisAlignedCell::default().is_sentinel());
    assert!(!AxisAlignedCell::UNIT.is_sentinel());
  }

  /// Only X decides emptiness, even if other axes are degenerate.
  #[test]
  fn test_sentinel_checks_x_only() {
    let cell = AxisAlignedCell {
      mins: Vec3::new(0.0, 0.5, 0.5),
      maxs: Vec3::new(0.25, 0.5, 0.5),
    };
    assert!(!cell.is_sentinel());

    let cell = AxisAlignedCell {
      mins: Vec3::new(0.5, 0.0, 0.0),
      maxs: Vec3::new(0.5, 1.0, 1.0),
    };
    assert!(cell.is_sentinel());
  }

  #[test]
  fn test_from_coord_boundaries() {
    let cell = AxisAlignedCell::from_coord(CellCoord::new(1, 0, 3, 2));
    assert_eq!(cell.mins, Vec3::new(0.25, 0.0, 0.75));
    assert_eq!(cell.maxs, Vec3::new(0.5, 0.25, 1.0));
  }

  #[test]
  fn test_from_coord_zero_divisions_is_unit() {
    assert_eq!(
      AxisAlignedCell::from_coord(CellCoord::new(0, 0, 0, 0)),
      AxisAlignedCell::UNIT
    );
  }

  #[test]
  fn test_denormalize() {
    let frame = FrameBounds::new(Vec3::new(-4.0, 0.0, 0.0), Vec3::new(4.0, 2.0, 8.0));
    let cell = AxisAlignedCell::from_coord(CellCoord::new(1, 0, 1, 1));
    let local = cell.denormalize(&frame);
    assert_eq!(local.min, Vec3::new(0.0, 0.0, 4.0));
    assert_eq!(local.max, Vec3::new(4.0, 1.0, 8.0));
  }

  #[test]
  fn test_denormalize_inverted_frame_bounds() {
    let frame = FrameBounds {
      min: Vec3::new(1.0, 0.0, 0.0),
      max: Vec3::new(-1.0, 2.0, 2.0),
    };
    let local = AxisAlignedCell::UNIT.denormalize(&frame);
    assert_eq!(local.min, frame.min);
    assert_eq!(local.max, frame.max);
  }
}
