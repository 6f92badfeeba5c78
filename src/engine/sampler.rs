use super::pose_buffer::{PoseBuffer, Space};
use crate::geom::Pose;

/// Decides, once per tick while drawing, how the live pose changes the stroke.
pub trait Sampler {
	/// Returns whether `brush` changed.
	fn sample(&mut self, brush: &mut PoseBuffer, live: Pose, min_distance_squared: f32) -> bool;
}

/// Records a new pose whenever the controller has moved far enough from the last recorded one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DistanceGated;

impl Sampler for DistanceGated {
	fn sample(&mut self, brush: &mut PoseBuffer, live: Pose, min_distance_squared: f32) -> bool {
		let distance_squared = live.distance_squared(brush.last());
		if distance_squared < min_distance_squared {
			tracing::trace!(distance_squared, "sample rejected");
			return false;
		}
		brush.append(live);
		tracing::trace!(distance_squared, count = brush.count(), "sample accepted");
		true
	}
}

/// Draws a single straight segment: the start of the stroke stays put and the tip follows the
/// controller.
#[derive(Debug, Default, Clone, Copy)]
pub struct RubberBand;

impl RubberBand {
	/// The start cap and the first real pose.
	const ANCHOR: usize = 2;
}

impl Sampler for RubberBand {
	fn sample(&mut self, brush: &mut PoseBuffer, live: Pose, min_distance_squared: f32) -> bool {
		if live.distance_squared(brush.last()) < min_distance_squared {
			return false;
		}
		let offset = Self::ANCHOR.min(brush.count());
		match brush.replace_from(Space::World, offset, [live]) {
			Ok(()) => true,
			Err(error) => {
				tracing::warn!(%error, "tip not moved");
				false
			}
		}
	}
}
