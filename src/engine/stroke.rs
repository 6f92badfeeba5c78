use super::input::{ControllerInput, FeedbackCues, NoFeedback};
use super::pose_buffer::{indicator_poses, PoseBuffer, Space};
use super::sampler::{DistanceGated, Sampler};
use crate::config::StrokeConfig;
use crate::geom::{Pose, Transform};
use crate::util::{Callbacks, SubscriptionId};
use glam::Vec3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StrokeState {
	#[default]
	#[display("idle")]
	Idle,
	#[display("drawing")]
	Drawing,
}

/// Turns a tracked controller into a stroke.
///
/// While idle, the brush holds a two-pose indicator in [`Space::Local`] and the tool's reference
/// transform follows the controller, so the indicator is drawn where the stroke would start. While
/// drawing, the brush holds the stroke in [`Space::World`] and the reference transform is pinned to
/// identity.
#[derive(Debug)]
pub struct StrokeController<I, F = NoFeedback, S = DistanceGated> {
	config: StrokeConfig,
	state: StrokeState,
	transform: Transform,
	brush: PoseBuffer,
	input: I,
	feedback: F,
	sampler: S,
	poses_added: Callbacks<PoseBuffer>,
	stroke_completed: Callbacks<PoseBuffer>,
}

impl<I: ControllerInput> StrokeController<I> {
	pub fn new(input: I, config: StrokeConfig) -> Self {
		Self::with_parts(input, NoFeedback, DistanceGated, config)
	}
}

impl<I: ControllerInput, F: FeedbackCues, S: Sampler> StrokeController<I, F, S> {
	pub fn with_parts(input: I, feedback: F, sampler: S, config: StrokeConfig) -> Self {
		Self {
			brush: PoseBuffer::indicator(config.end_cap_length),
			config,
			state: StrokeState::Idle,
			transform: Transform::IDENTITY,
			input,
			feedback,
			sampler,
			poses_added: Callbacks::new(),
			stroke_completed: Callbacks::new(),
		}
	}

	pub fn config(&self) -> &StrokeConfig {
		&self.config
	}

	pub fn state(&self) -> StrokeState {
		self.state
	}

	pub fn brush(&self) -> &PoseBuffer {
		&self.brush
	}

	/// The tool's own reference transform. Identity while drawing.
	pub fn transform(&self) -> &Transform {
		&self.transform
	}

	pub fn input(&self) -> &I {
		&self.input
	}

	pub fn input_mut(&mut self) -> &mut I {
		&mut self.input
	}

	pub fn feedback(&self) -> &F {
		&self.feedback
	}

	pub fn feedback_mut(&mut self) -> &mut F {
		&mut self.feedback
	}

	/// Called after every change to the brush, including the reset when a stroke ends.
	pub fn on_poses_added(&mut self, handler: impl FnMut(&PoseBuffer) + 'static) -> SubscriptionId {
		self.poses_added.subscribe(handler)
	}

	/// Called once per stroke, with the finished stroke, before the brush is reset.
	pub fn on_stroke_completed(
		&mut self,
		handler: impl FnMut(&PoseBuffer) + 'static,
	) -> SubscriptionId {
		self.stroke_completed.subscribe(handler)
	}

	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.poses_added.unsubscribe(id) || self.stroke_completed.unsubscribe(id)
	}

	/// Starts a stroke at the controller. Returns `false`, changing nothing, if already drawing or
	/// if the controller is not tracked.
	#[tracing::instrument(skip(self), fields(state = %self.state))]
	pub fn begin_stroke(&mut self) -> bool {
		if self.state != StrokeState::Idle {
			tracing::debug!("already drawing");
			return false;
		}
		let Some(live) = self.input.tracked_pose() else {
			tracing::debug!("controller not tracked, stroke not started");
			return false;
		};

		// The cap is placed using the idle frame, so it must be computed before the reset.
		let cap = self
			.transform
			.transform_point(Vec3::NEG_X * self.config.end_cap_length);
		self.transform.reset();
		self
			.brush
			.seed(Space::World, [Pose::new(cap, live.orientation), live]);
		self.state = StrokeState::Drawing;
		tracing::debug!(position = ?live.position, "stroke started");

		self.poses_added.notify(&self.brush);
		self.feedback.play_draw_start_cue();
		true
	}

	/// Finishes the current stroke. Returns `false`, changing nothing, if not drawing.
	#[tracing::instrument(skip(self), fields(state = %self.state))]
	pub fn end_stroke(&mut self) -> bool {
		if self.state != StrokeState::Drawing {
			tracing::debug!("not drawing");
			return false;
		}
		self.state = StrokeState::Idle;
		tracing::debug!(
			count = self.brush.count(),
			length = self.brush.arc_length(),
			"stroke completed"
		);
		self.stroke_completed.notify(&self.brush);

		self
			.brush
			.seed(Space::Local, indicator_poses(self.config.end_cap_length));
		self.poses_added.notify(&self.brush);
		self.feedback.play_draw_end_cue();
		true
	}

	/// Per-frame hook.
	pub fn update(&mut self) {
		match self.state {
			StrokeState::Idle => {
				if let Some(live) = self.input.tracked_pose() {
					self.transform.set_pose(live);
				}
			}
			StrokeState::Drawing => {
				self.transform.reset();
				let Some(live) = self.input.tracked_pose() else {
					tracing::trace!("controller not tracked, sample skipped");
					return;
				};
				let min_distance_squared = self.config.min_distance_squared();
				if self
					.sampler
					.sample(&mut self.brush, live, min_distance_squared)
				{
					self.poses_added.notify(&self.brush);
				}
			}
		}
	}
}
