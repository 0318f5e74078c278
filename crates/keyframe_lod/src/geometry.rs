//! Geometry source seam.
//!
//! The builder only reads animated mesh data: per-frame vertex positions, the
//! per-frame bounding box, and a triangle index list shared by all frames.
//! Loaders and animation systems implement [`AnimatedGeometry`]; the builder
//! sees one frame at a time through [`FrameGeometry`].

use glam::Vec3;

use crate::octree::FrameBounds;

/// Three vertex indices.
pub type Triangle = [u32; 3];

/// Read-only view of one animation frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameGeometry<'a> {
  /// Vertex positions of this frame.
  pub vertices: &'a [Vec3],
  /// Bounding box of this frame. Cells are fractions of it.
  pub bounds: FrameBounds,
  /// Triangle list indexing into `vertices`.
  pub triangles: &'a [Triangle],
}

impl<'a> FrameGeometry<'a> {
  pub fn new(vertices: &'a [Vec3], bounds: FrameBounds, triangles: &'a [Triangle]) -> Self {
    Self {
      vertices,
      bounds,
      triangles,
    }
  }

  /// Bounding box of one triangle in local space.
  ///
  /// Returns None if any index is out of range for this frame.
  #[inline]
  pub fn triangle_bounds(&self, triangle: &Triangle) -> Option<FrameBounds> {
    let a = *self.vertices.get(triangle[0] as usize)?;
    let b = *self.vertices.get(triangle[1] as usize)?;
    let c = *self.vertices.get(triangle[2] as usize)?;
    Some(FrameBounds {
      min: a.min(b).min(c),
      max: a.max(b).max(c),
    })
  }
}

/// Animated mesh data the volume builder consumes.
pub trait AnimatedGeometry {
  /// Number of animation frames.
  fn frame_count(&self) -> usize;

  /// Vertex positions of a frame, or None if the frame does not exist.
  fn frame_vertices(&self, frame: usize) -> Option<&[Vec3]>;

  /// Bounding box of a frame, or None if the frame does not exist.
  fn frame_bounds(&self, frame: usize) -> Option<FrameBounds>;

  /// Triangle list shared by every frame.
  fn triangles(&self) -> &[Triangle];

  /// Bundle one frame for the builder.
  fn frame(&self, frame: usize) -> Option<FrameGeometry<'_>> {
    Some(FrameGeometry::new(
      self.frame_vertices(frame)?,
      self.frame_bounds(frame)?,
      self.triangles(),
    ))
  }
}

/// Blanket impl for boxed geometry sources.
impl<G: AnimatedGeometry + ?Sized> AnimatedGeometry for Box<G> {
  fn frame_count(&self) -> usize {
    (**self).frame_count()
  }

  fn frame_vertices(&self, frame: usize) -> Option<&[Vec3]> {
    (**self).frame_vertices(frame)
  }

  fn frame_bounds(&self, frame: usize) -> Option<FrameBounds> {
    (**self).frame_bounds(frame)
  }

  fn triangles(&self) -> &[Triangle] {
    (**self).triangles()
  }
}

/// Vertex positions and bounds of one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
  pub vertices: Vec<Vec3>,
  pub bounds: FrameBounds,
}

impl Keyframe {
  pub fn new(vertices: Vec<Vec3>, bounds: FrameBounds) -> Self {
    Self { vertices, bounds }
  }

  /// Keyframe whose bounds are the tight box around its vertices.
  pub fn from_vertices(vertices: Vec<Vec3>) -> Self {
    let bounds =
      FrameBounds::from_points(&vertices).unwrap_or(FrameBounds::new(Vec3::ZERO, Vec3::ZERO));
    Self { vertices, bounds }
  }
}

/// Owned keyframe mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframeMesh {
  pub frames: Vec<Keyframe>,
  pub triangles: Vec<Triangle>,
}

impl KeyframeMesh {
  pub fn new(triangles: Vec<Triangle>) -> Self {
    Self {
      frames: Vec::new(),
      triangles,
    }
  }

  pub fn with_frame(mut self, frame: Keyframe) -> Self {
    self.frames.push(frame);
    self
  }

  pub fn push_frame(&mut self, frame: Keyframe) {
    self.frames.push(frame);
  }
}

impl AnimatedGeometry for KeyframeMesh {
  fn frame_count(&self) -> usize {
    self.frames.len()
  }

  fn frame_vertices(&self, frame: usize) -> Option<&[Vec3]> {
    self.frames.get(frame).map(|f| f.vertices.as_slice())
  }

  fn frame_bounds(&self, frame: usize) -> Option<FrameBounds> {
    self.frames.get(frame).map(|f| f.bounds)
  }

  fn triangles(&self) -> &[Triangle] {
    &self.triangles
  }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
