//! Subdivision constants and interleaved cell addressing.
//!
//! A level with `d` divisions splits the normalized frame box into
//! `2^d` cells per axis, `8^d` cells in total.
//!
//! # Interleaved Index
//!
//! While a level is being marked, cells are addressed by packing the three
//! axis coordinates into one integer, X in the low bits:
//!
//! ```text
//! index = ix | iy << d | iz << 2d
//!
//! d = 2 (4 cells per axis):
//!   bits:  [iz iz][iy iy][ix ix]
//!   (1, 0, 0) -> 0b00_00_01 = 1
//!   (0, 1, 0) -> 0b00_01_00 = 4
//!   (3, 3, 3) -> 0b11_11_11 = 63
//! ```
//!
//! The index only has meaning during marking. Compacted levels are plain
//! lists of occupied cells.

/// Deepest subdivision the builder accepts (256 cells per axis, 16M cells).
pub const MAX_DIVISIONS: u32 = 8;

/// Leaf divisions used when no level is configured.
pub const DEFAULT_MAX_LEVEL: u32 = 3;

/// Occupancy fraction at which a level stops being useful for pruning.
pub const DEFAULT_DENSITY_LIMIT: f32 = 0.75;

/// Cells along one axis at the given subdivision depth.
#[inline(always)]
pub const fn cells_per_axis(divisions: u32) -> u32 {
  1 << divisions
}

/// Total cells at the given subdivision depth.
#[inline(always)]
pub const fn total_cells(divisions: u32) -> usize {
  1usize << (3 * divisions)
}

/// Pack per-axis cell coordinates into the interleaved index.
#[inline(always)]
pub const fn interleave(ix: u32, iy: u32, iz: u32, divisions: u32) -> usize {
  (ix as usize) | ((iy as usize) << divisions) | ((iz as usize) << (2 * divisions))
}

/// Inverse of [`interleave`].
#[inline(always)]
pub const fn deinterleave(index: usize, divisions: u32) -> (u32, u32, u32) {
  let mask = (1usize << divisions) - 1;
  (
    (index & mask) as u32,
    ((index >> divisions) & mask) as u32,
    ((index >> (2 * divisions)) & mask) as u32,
  )
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
