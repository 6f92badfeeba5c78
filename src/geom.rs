use glam::{Quat, Vec3};

/// A tracked position and orientation. Poses are values; two poses are only ever compared by the
/// distance between their positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
	pub position: Vec3,
	pub orientation: Quat,
}

impl Default for Pose {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl Pose {
	pub const IDENTITY: Self = Self::new(Vec3::ZERO, Quat::IDENTITY);

	pub const fn new(position: Vec3, orientation: Quat) -> Self {
		Self {
			position,
			orientation,
		}
	}

	pub const fn from_position(position: Vec3) -> Self {
		Self::new(position, Quat::IDENTITY)
	}

	pub fn distance_squared(&self, other: &Pose) -> f32 {
		self.position.distance_squared(other.position)
	}
}

/// The tool's own reference frame, relative to its parent (world, for our purposes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
	pub translation: Vec3,
	pub rotation: Quat,
}

impl Default for Transform {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl Transform {
	pub const IDENTITY: Self = Self {
		translation: Vec3::ZERO,
		rotation: Quat::IDENTITY,
	};

	pub fn set_pose(&mut self, pose: Pose) {
		self.translation = pose.position;
		self.rotation = pose.orientation;
	}

	pub fn reset(&mut self) {
		*self = Self::IDENTITY;
	}

	pub fn is_identity(&self) -> bool {
		*self == Self::IDENTITY
	}

	/// Maps a point from this frame into the parent frame.
	pub fn transform_point(&self, point: Vec3) -> Vec3 {
		self.translation + self.rotation * point
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
	min: Vec3,
	max: Vec3,
}

impl AABox {
	pub fn new(min: Vec3, max: Vec3) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec3::MAX, Vec3::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
	}

	pub fn min(&self) -> Vec3 {
		self.min
	}

	pub fn max(&self) -> Vec3 {
		self.max
	}

	pub fn center(&self) -> Vec3 {
		0.5 * (self.min + self.max)
	}

	pub fn size(&self) -> Vec3 {
		if self.is_empty() {
			Vec3::ZERO
		} else {
			self.max - self.min
		}
	}

	pub fn expanded_to_contain(self, point: Vec3) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec3>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use glam::vec3;

	#[test]
	fn transform_point_rotates_then_translates() {
		let transform = Transform {
			translation: vec3(1.0, 2.0, 3.0),
			rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
		};
		let p = transform.transform_point(2.0 * Vec3::X);
		assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-6);
		assert_abs_diff_eq!(p.y, 4.0, epsilon = 1e-6);
		assert_abs_diff_eq!(p.z, 3.0, epsilon = 1e-6);
	}

	#[test]
	fn reset() {
		let mut transform = Transform::IDENTITY;
		transform.set_pose(Pose::from_position(Vec3::ONE));
		assert!(!transform.is_identity());
		transform.reset();
		assert!(transform.is_identity());
	}

	#[test]
	fn bounds() {
		assert!(AABox::empty().is_empty());
		assert_eq!(AABox::empty().size(), Vec3::ZERO);

		let b = AABox::containing([vec3(0.0, 1.0, 2.0), vec3(-1.0, 3.0, 0.0)].into_iter());
		assert!(!b.is_empty());
		assert_eq!(b.min(), vec3(-1.0, 1.0, 0.0));
		assert_eq!(b.max(), vec3(0.0, 3.0, 2.0));
		assert_eq!(b.center(), vec3(-0.5, 2.0, 1.0));
	}
}
