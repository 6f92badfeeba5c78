use crate::geom::{AABox, Pose};
use glam::{Quat, Vec3};
use itertools::Itertools;

/// Once seeded, a buffer always shows at least a start cap and a tip.
pub const MIN_POSES: usize = 2;

/// The frame the poses in a [`PoseBuffer`] are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Space {
	/// Relative to the owning tool's reference transform.
	#[display("local")]
	Local,
	/// World space. The owning tool's reference transform is identity while the buffer is in
	/// this frame, so renderers must not apply it a second time.
	#[display("world")]
	World,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoseBufferError {
	#[error("offset {offset} is past the end of a buffer of {count} poses")]
	OffsetOutOfRange { offset: usize, count: usize },

	#[error("replacement would leave {count} poses, at least 2 are required")]
	TooShort { count: usize },
}

static_assertions::assert_impl_all!(PoseBufferError: std::error::Error, Send, Sync);

/// An ordered polyline of brush poses. Insertion order is stroke order.
#[derive(Debug, Clone)]
pub struct PoseBuffer {
	space: Space,
	poses: Vec<Pose>,
}

impl PoseBuffer {
	/// The idle affordance: a point `end_cap_length` behind the local origin, then the origin.
	pub fn indicator(end_cap_length: f32) -> Self {
		Self::indicator_with_capacity(end_cap_length, MIN_POSES)
	}

	/// Like [`PoseBuffer::indicator`], but can hold `capacity` poses before reallocating.
	pub fn indicator_with_capacity(end_cap_length: f32, capacity: usize) -> Self {
		let mut buffer = Self::unseeded(capacity);
		buffer.seed(Space::Local, indicator_poses(end_cap_length));
		buffer
	}

	fn unseeded(capacity: usize) -> Self {
		Self {
			space: Space::Local,
			poses: Vec::with_capacity(capacity.max(MIN_POSES)),
		}
	}

	pub fn space(&self) -> Space {
		self.space
	}

	pub fn count(&self) -> usize {
		self.poses.len()
	}

	pub fn is_empty(&self) -> bool {
		self.poses.is_empty()
	}

	pub fn as_slice(&self) -> &[Pose] {
		&self.poses
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
		self.poses.iter()
	}

	pub fn first(&self) -> &Pose {
		self.poses.first().expect("pose buffer read before it was seeded")
	}

	/// The most recently accepted sample, or the live tip.
	///
	/// # Panics
	///
	/// If the buffer is empty. A seeded buffer never is.
	pub fn last(&self) -> &Pose {
		self.poses.last().expect("pose buffer read before it was seeded")
	}

	pub fn append(&mut self, pose: Pose) {
		self.poses.push(pose);
	}

	/// Replaces the entire content with `poses`, in order.
	pub fn replace_and_truncate(
		&mut self,
		space: Space,
		poses: impl IntoIterator<Item = Pose>,
	) -> Result<(), PoseBufferError> {
		self.replace_from(space, 0, poses)
	}

	/// Keeps the first `offset` poses, drops everything after them and appends `poses`.
	///
	/// Either the whole replacement is applied or, on error, the buffer is left untouched.
	pub fn replace_from(
		&mut self,
		space: Space,
		offset: usize,
		poses: impl IntoIterator<Item = Pose>,
	) -> Result<(), PoseBufferError> {
		let count = self.poses.len();
		if offset > count {
			return Err(PoseBufferError::OffsetOutOfRange { offset, count });
		}

		// Stage the new poses past the current end so that failure can roll back.
		self.poses.extend(poses);
		let added = self.poses.len() - count;
		if offset + added < MIN_POSES {
			self.poses.truncate(count);
			return Err(PoseBufferError::TooShort {
				count: offset + added,
			});
		}
		self.poses.drain(offset..count);
		self.space = space;
		Ok(())
	}

	/// Infallible replacement for callers that already hold exactly a cap and a tip.
	pub(crate) fn seed(&mut self, space: Space, poses: [Pose; MIN_POSES]) {
		self.poses.clear();
		self.poses.extend(poses);
		self.space = space;
	}

	/// Consecutive pairs of poses, i.e. the segments of the polyline.
	pub fn segments(&self) -> impl Iterator<Item = (&Pose, &Pose)> + '_ {
		self.poses.iter().tuple_windows()
	}

	pub fn arc_length(&self) -> f32 {
		self
			.segments()
			.map(|(a, b)| a.position.distance(b.position))
			.sum()
	}

	pub fn bounds(&self) -> AABox {
		AABox::containing(self.poses.iter().map(|p| p.position))
	}
}

impl Default for PoseBuffer {
	fn default() -> Self {
		Self::indicator(crate::config::DEFAULT_END_CAP_LENGTH)
	}
}

impl<'a> IntoIterator for &'a PoseBuffer {
	type Item = &'a Pose;
	type IntoIter = std::slice::Iter<'a, Pose>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

pub(crate) fn indicator_poses(end_cap_length: f32) -> [Pose; MIN_POSES] {
	[
		Pose::new(Vec3::new(-end_cap_length, 0.0, 0.0), Quat::IDENTITY),
		Pose::IDENTITY,
	]
}
