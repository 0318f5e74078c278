//! Per-frame axis-aligned bounding box.

use glam::Vec3;

/// Bounding box of one animation frame in the model's local space.
///
/// All cells of that frame's levels are expressed as fractions of this box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBounds {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl FrameBounds {
	/// Create bounds from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"frame bounds min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Tightest bounds around a set of points. `None` for an empty slice.
	pub fn from_points(points: &[Vec3]) -> Option<Self> {
		let (first, rest) = points.split_first()?;
		let (min, max) = rest
			.iter()
			.fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
		Some(Self { min, max })
	}

	/// Get the size of the box (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Check if the box contains a point.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	/// Map a local-space point to the box fraction `[0, 1]` per axis.
	///
	/// Points outside the box map outside `[0, 1]`. An axis with zero extent
	/// maps every point to 0.
	#[inline]
	pub fn normalize(&self, point: Vec3) -> Vec3 {
		let size = self.size();
		let offset = point - self.min;
		Vec3::new(
			if size.x > 0.0 { offset.x / size.x } else { 0.0 },
			if size.y > 0.0 { offset.y / size.y } else { 0.0 },
			if size.z > 0.0 { offset.z / size.z } else { 0.0 },
		)
	}

	/// Map a box fraction back into local space.
	#[inline]
	pub fn denormalize(&self, fraction: Vec3) -> Vec3 {
		self.min + fraction * self.size()
	}
}
