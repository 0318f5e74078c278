//! LevelOfDetailArray - the levels of one animation frame.
//!
//! Slot `d` holds the level with `d` divisions: slot 0 is the single cell
//! covering the frame, the last slot is the leaf level. Present levels always
//! form a contiguous run ending at the leaf; coarsening that gave up partway
//! leaves the coarse slots empty.

use super::BoundingBoxLevel;

/// Per-frame levels, indexed by divisions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelOfDetailArray {
  slots: Vec<Option<BoundingBoxLevel>>,
}

impl LevelOfDetailArray {
  /// Create an array with no slots.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an array with empty slots for levels `0..=max_level`.
  pub fn with_max_level(max_level: u32) -> Self {
    Self {
      slots: vec![None; max_level as usize + 1],
    }
  }

  /// Store a level in the slot matching its divisions.
  pub(crate) fn insert(&mut self, level: BoundingBoxLevel) {
    let slot = level.divisions() as usize;
    if slot >= self.slots.len() {
      self.slots.resize(slot + 1, None);
    }
    self.slots[slot] = Some(level);
  }

  /// Number of slots requested, present or not.
  #[inline]
  pub fn requested_levels(&self) -> usize {
    self.slots.len()
  }

  /// Number of levels actually built.
  pub fn len(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.iter().all(|slot| slot.is_none())
  }

  /// True when every requested level was built.
  pub fn is_complete(&self) -> bool {
    !self.slots.is_empty() && self.slots.iter().all(|slot| slot.is_some())
  }

  /// Level with the given divisions, if it was built.
  pub fn level(&self, divisions: u32) -> Option<&BoundingBoxLevel> {
    self.slots.get(divisions as usize)?.as_ref()
  }

  /// Finest level built.
  pub fn finest(&self) -> Option<&BoundingBoxLevel> {
    self.slots.iter().rev().find_map(Option::as_ref)
  }

  /// Coarsest level built.
  pub fn coarsest(&self) -> Option<&BoundingBoxLevel> {
    self.slots.iter().find_map(Option::as_ref)
  }

  /// Present levels, coarsest to finest.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &BoundingBoxLevel> {
    self.slots.iter().filter_map(Option::as_ref)
  }

  /// Present levels, finest to coarsest. The order culling code queries in.
  pub fn iter_finest_first(&self) -> impl Iterator<Item = &BoundingBoxLevel> {
    self.iter().rev()
  }

  /// Release every level and slot. Safe to call on an empty array.
  pub fn clear(&mut self) {
    for level in self.slots.iter_mut().flatten() {
      level.clear();
    }
    self.slots = Vec::new();
  }

  /// Clear, then allocate empty slots for levels `0..=max_level`.
  pub fn reset(&mut self, max_level: u32) {
    self.clear();
    *self = Self::with_max_level(max_level);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::octree::level::MarkingGrid;
  use crate::octree::BuildConfig;

  fn level_at(divisions: u32) -> BoundingBoxLevel {
    if divisions == 0 {
      return BoundingBoxLevel::unit();
    }
    let mut grid = MarkingGrid::new(divisions).unwrap();
    grid.mark(0, 0, 0);
    grid.finish(&BuildConfig::default()).unwrap()
  }

  #[test]
  fn test_with_max_level_has_empty_slots() {
    let lods = LevelOfDetailArray::with_max_level(3);
    assert_eq!(lods.requested_levels(), 4);
    assert_eq!(lods.len(), 0);
    assert!(lods.is_empty());
    assert!(!lods.is_complete());
    assert!(lods.finest().is_none());
  }

  /// Coarse levels missing: present levels still iterate in order.
  #[test]
  fn test_truncated_array() {
    let mut lods = LevelOfDetailArray::with_max_level(3);
    lods.insert(level_at(3));
    lods.insert(level_at(2));

    assert_eq!(lods.len(), 2);
    assert!(!lods.is_complete());
    assert!(lods.level(0).is_none());
    assert!(lods.level(1).is_none());
    assert_eq!(lods.finest().unwrap().divisions(), 3);
    assert_eq!(lods.coarsest().unwrap().divisions(), 2);

    let order: Vec<u32> = lods.iter().map(|l| l.divisions()).collect();
    assert_eq!(order, vec![2, 3]);
    let order: Vec<u32> = lods.iter_finest_first().map(|l| l.divisions()).collect();
    assert_eq!(order, vec![3, 2]);
  }

  #[test]
  fn test_complete_array() {
    let mut lods = LevelOfDetailArray::with_max_level(2);
    for divisions in (0..=2).rev() {
      lods.insert(level_at(divisions));
    }
    assert!(lods.is_complete());
    assert_eq!(lods.coarsest().unwrap().cells(), &[crate::AxisAlignedCell::UNIT]);
  }

  #[test]
  fn test_level_out_of_range() {
    let lods = LevelOfDetailArray::with_max_level(1);
    assert!(lods.level(7).is_none());
  }

  #[test]
  fn test_clear_is_idempotent() {
    let mut lods = LevelOfDetailArray::with_max_level(2);
    lods.insert(level_at(2));
    lods.clear();
    assert_eq!(lods.requested_levels(), 0);
    assert!(lods.level(2).is_none());
    lods.clear();
    assert_eq!(lods, LevelOfDetailArray::new());
  }

  #[test]
  fn test_reset_reallocates_slots() {
    let mut lods = LevelOfDetailArray::with_max_level(2);
    lods.insert(level_at(2));
    lods.reset(4);
    assert_eq!(lods.requested_levels(), 5);
    assert!(lods.is_empty());
  }
}
