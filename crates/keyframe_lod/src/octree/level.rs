//! BoundingBoxLevel - occupied cells of one subdivision level.
//!
//! Levels are built in two steps. A [`MarkingGrid`] holds one flag per cell,
//! addressed by interleaved index, while triangles or child cells are
//! stamped in. `finish` then applies the density heuristic and compacts the
//! marked flags into a dense list of occupied cells. Nothing downstream sees
//! the interleaved layout.

use crate::constants::{cells_per_axis, total_cells, MAX_DIVISIONS};
use crate::error::RejectReason;

use super::{AxisAlignedCell, BuildConfig, CellCoord};

/// Occupied cells of one level, stored densely.
///
/// Every stored cell is occupied. Cells are ordered by interleaved index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundingBoxLevel {
  divisions: u32,
  cells: Vec<AxisAlignedCell>,
}

impl BoundingBoxLevel {
  /// Create an empty level with no storage.
  pub fn new() -> Self {
    Self::default()
  }

  /// Single cell spanning the whole frame.
  pub(crate) fn unit() -> Self {
    Self {
      divisions: 0,
      cells: vec![AxisAlignedCell::UNIT],
    }
  }

  #[inline]
  pub fn divisions(&self) -> u32 {
    self.divisions
  }

  #[inline]
  pub fn cells_per_axis(&self) -> u32 {
    cells_per_axis(self.divisions)
  }

  #[inline]
  pub fn total_cells(&self) -> usize {
    total_cells(self.divisions)
  }

  #[inline]
  pub fn occupied_count(&self) -> usize {
    self.cells.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Occupied cells in normalized frame space.
  #[inline]
  pub fn cells(&self) -> &[AxisAlignedCell] {
    &self.cells
  }

  pub fn iter(&self) -> impl Iterator<Item = &AxisAlignedCell> {
    self.cells.iter()
  }

  /// Integer coordinates of the occupied cells.
  pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
    let divisions = self.divisions;
    self.cells.iter().map(move |cell| CellCoord::from_cell(cell, divisions))
  }

  /// Check if the cell at `coord` is occupied.
  pub fn contains(&self, coord: &CellCoord) -> bool {
    if coord.divisions != self.divisions {
      return false;
    }
    let divisions = self.divisions;
    self
      .cells
      .binary_search_by_key(&coord.index(), |cell| {
        CellCoord::from_cell(cell, divisions).index()
      })
      .is_ok()
  }

  /// Release all cells. Safe to call on an empty level.
  pub fn clear(&mut self) {
    self.cells = Vec::new();
    self.divisions = 0;
  }
}

/// Scratch occupancy flags for one level under construction.
pub(crate) struct MarkingGrid {
  divisions: u32,
  marked: Vec<bool>,
  occupied: usize,
}

impl MarkingGrid {
  /// Allocate `8^divisions` unmarked cells.
  pub fn new(divisions: u32) -> Result<Self, RejectReason> {
    if divisions > MAX_DIVISIONS {
      return Err(RejectReason::DivisionsTooLarge {
        divisions,
        max: MAX_DIVISIONS,
      });
    }
    let total = total_cells(divisions);
    let mut marked = Vec::new();
    marked
      .try_reserve_exact(total)
      .map_err(|_| RejectReason::OutOfMemory { cells: total })?;
    marked.resize(total, false);
    Ok(Self {
      divisions,
      marked,
      occupied: 0,
    })
  }

  #[inline]
  pub fn divisions(&self) -> u32 {
    self.divisions
  }

  #[inline]
  pub fn occupied(&self) -> usize {
    self.occupied
  }

  /// Mark a cell. Returns true the first time the cell is reached.
  #[inline]
  pub fn mark(&mut self, ix: u32, iy: u32, iz: u32) -> bool {
    let index = crate::constants::interleave(ix, iy, iz, self.divisions);
    let slot = &mut self.marked[index];
    if *slot {
      return false;
    }
    *slot = true;
    self.occupied += 1;
    true
  }

  /// Apply the density heuristic and compact the marked cells.
  pub fn finish(self, config: &BuildConfig) -> Result<BoundingBoxLevel, RejectReason> {
    config.check_occupancy(self.occupied, self.marked.len())?;

    let divisions = self.divisions;
    let mut cells = Vec::new();
    cells
      .try_reserve_exact(self.occupied)
      .map_err(|_| RejectReason::OutOfMemory { cells: self.occupied })?;
    cells.extend(
      self
        .marked
        .iter()
        .enumerate()
        .filter(|(_, marked)| **marked)
        .map(|(index, _)| CellCoord::from_index(index, divisions).to_cell()),
    );

    Ok(BoundingBoxLevel { divisions, cells })
  }
}

#[cfg(test)]
#[path = "level_test.rs"]
mod level_test;
