//! Octree module for per-frame bounding-volume levels.
//!
//! Each animation frame gets its own set of levels over the frame's bounding
//! box, normalized to `[0, 1]` on every axis.
//!
//! # Level Convention
//!
//! Levels are numbered by divisions: level 0 is one cell covering the frame,
//! higher = finer.
//!
//! ```text
//! Cells per axis = 2^divisions
//! Cell size      = frame_size / 2^divisions
//! ```
//!
//! # Module Structure
//!
//! - [`bounds`]: `FrameBounds` - frame box and normalization
//! - [`cell`]: `AxisAlignedCell` - normalized cell value type
//! - [`coord`]: `CellCoord` - integer cell position, parent/child math
//! - [`config`]: `BuildConfig` - depth and density heuristic
//! - [`level`]: `BoundingBoxLevel` - compacted occupied cells of one level
//! - [`lod_array`]: `LevelOfDetailArray` - all levels of one frame
//! - [`rasterize`]: leaf level from triangles
//! - [`coarsen`]: parent level from child level

pub mod bounds;
pub mod cell;
pub mod coarsen;
pub mod config;
pub mod coord;
pub mod level;
pub mod lod_array;
pub mod rasterize;

// Re-exports
pub use bounds::FrameBounds;
pub use cell::AxisAlignedCell;
pub use coarsen::coarsen;
pub use config::{BuildConfig, EmptyLevelPolicy};
pub use coord::CellCoord;
pub use level::BoundingBoxLevel;
pub use lod_array::LevelOfDetailArray;
pub use rasterize::rasterize_leaf;
