use super::*;

// =========================================================================
// CellCoord Tests
// =========================================================================

/// Parent halves each axis and drops one division.
#[test]
fn test_parent_halves_coordinates() {
  let coord = CellCoord::new(5, 2, 7, 3);
  let parent = coord.parent().expect("3 divisions has a parent");

  assert_eq!(parent, CellCoord::new(2, 1, 3, 2));
}

#[test]
fn test_parent_at_zero_divisions_is_none() {
  assert!(CellCoord::new(0, 0, 0, 0).parent().is_none());
}

/// All 8 octants of a parent produce distinct children that map back to it.
#[test]
fn test_child_parent_roundtrip() {
  let original = CellCoord::new(1, 2, 3, 2);
  let mut children = Vec::new();

  for octant in 0u8..8 {
    let child = original.child(octant).expect("2 divisions can subdivide");
    assert_eq!(child.divisions, 3, "Octant {} depth mismatch", octant);
    assert_eq!(
      child.parent(),
      Some(original),
      "Roundtrip failed for octant {}",
      octant
    );
    assert!(!children.contains(&child), "Octant {} duplicated", octant);
    children.push(child);
  }
}

#[test]
fn test_child_at_max_divisions_is_none() {
  let coord = CellCoord::new(0, 0, 0, MAX_DIVISIONS);
  assert!(coord.child(0).is_none());
}

#[test]
fn test_index_matches_interleave() {
  let coord = CellCoord::new(1, 2, 3, 2);
  assert_eq!(coord.index(), 1 | (2 << 2) | (3 << 4));
  assert_eq!(CellCoord::from_index(coord.index(), 2), coord);
}

/// Every cell of a level recovers its own coordinate from its boundaries.
#[test]
fn test_from_cell_recovers_every_coordinate() {
  for divisions in 0..=5 {
    let n = 1u32 << divisions;
    for z in 0..n {
      for y in 0..n {
        for x in 0..n {
          let coord = CellCoord::new(x, y, z, divisions);
          let cell = coord.to_cell();
          assert_eq!(
            CellCoord::from_cell(&cell, divisions),
            coord,
            "coordinate lost at {} divisions",
            divisions
          );
        }
      }
    }
  }
}

/// Cells touching the upper face of the frame box stay in range.
#[test]
fn test_from_cell_last_cell_in_range() {
  let cell = CellCoord::new(3, 3, 3, 2).to_cell();
  assert_eq!(cell.maxs, glam::Vec3::ONE);
  assert_eq!(CellCoord::from_cell(&cell, 2), CellCoord::new(3, 3, 3, 2));
}
