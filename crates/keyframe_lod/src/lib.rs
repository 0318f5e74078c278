//! keyframe_lod - per-frame bounding-volume octrees for animated meshes
//!
//! This crate builds a level-of-detail hierarchy of axis-aligned cells for
//! every animation frame of a keyframe mesh. Collision and visibility code use
//! the cells to reject geometry before running exact tests against triangles.
//!
//! # Features
//!
//! - **Leaf rasterization**: Triangles are stamped into the finest level using
//!   their bounding cuboid of cells (conservative, no exact clipping)
//! - **Coarsening**: Each coarser level is derived from the next finer one by
//!   merging 8 children into 1 parent
//! - **Density heuristic**: Levels that are full or too dense to prune anything
//!   are rejected and never stored
//! - **Parallel build**: Frames are independent and can be built with rayon
//!
//! # Example
//!
//! ```ignore
//! use keyframe_lod::{BuildConfig, KeyframeMesh, ModelVolumeTree};
//!
//! let mesh: KeyframeMesh = load_mesh();
//! let config = BuildConfig::default().with_max_level(3);
//!
//! match ModelVolumeTree::build(&mesh, &config) {
//!   Ok(tree) => {
//!     let finest = tree.finest_level(0).unwrap();
//!     println!("frame 0: {} occupied cells", finest.occupied_count());
//!   }
//!   // No LOD acceleration for this model, use its overall bounds instead.
//!   Err(err) => println!("no volume tree: {err}"),
//! }
//! ```

pub mod constants;
pub mod error;
pub mod geometry;
pub mod stats;

// Re-export commonly used items
pub use constants::{cells_per_axis, total_cells, DEFAULT_DENSITY_LIMIT, DEFAULT_MAX_LEVEL, MAX_DIVISIONS};
pub use error::{BuildError, RejectReason};
pub use geometry::{AnimatedGeometry, FrameGeometry, Keyframe, KeyframeMesh, Triangle};
pub use stats::BuildStats;

// Octree module: cells, levels, rasterization and coarsening
pub mod octree;
pub use octree::{
  AxisAlignedCell, BoundingBoxLevel, BuildConfig, CellCoord, EmptyLevelPolicy, FrameBounds,
  LevelOfDetailArray,
};

// Per-model orchestration and lifecycle
pub mod model;
pub use model::{build_frame, FrameBuild, ModelVolumeTree};
