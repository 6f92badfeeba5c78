use crate::geom::Pose;

/// A tracked controller sampled once per tick.
pub trait ControllerInput {
	/// Whether the controller is currently tracked and within the usable field of view.
	fn is_controller_pose_valid(&self) -> bool;

	/// The live world-space pose. Only meaningful while [`is_controller_pose_valid`] holds.
	///
	/// [`is_controller_pose_valid`]: ControllerInput::is_controller_pose_valid
	fn current_controller_pose(&self) -> Pose;

	fn tracked_pose(&self) -> Option<Pose> {
		self
			.is_controller_pose_valid()
			.then(|| self.current_controller_pose())
	}
}

/// A pose source that is always valid, e.g. for replaying recorded input.
impl ControllerInput for Pose {
	fn is_controller_pose_valid(&self) -> bool {
		true
	}

	fn current_controller_pose(&self) -> Pose {
		*self
	}
}

/// `None` while the controller is untracked.
impl ControllerInput for Option<Pose> {
	fn is_controller_pose_valid(&self) -> bool {
		self.is_some()
	}

	fn current_controller_pose(&self) -> Pose {
		self.unwrap_or_default()
	}
}

/// Fire-and-forget cues, typically audio.
pub trait FeedbackCues {
	fn play_draw_start_cue(&mut self) {}
	fn play_draw_end_cue(&mut self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl FeedbackCues for NoFeedback {}
