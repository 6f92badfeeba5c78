use super::input::{ControllerInput, FeedbackCues};
use super::pose_buffer::PoseBuffer;
use super::sampler::Sampler;
use super::stroke::{StrokeController, StrokeState};

/// Discrete signals delivered by whatever routes device actions to the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ToolAction {
	#[display("begin stroke")]
	BeginStroke,
	#[display("end stroke")]
	EndStroke,
}

/// What an input router and frame scheduler need from a tool that draws strokes.
pub trait DrawingTool {
	/// Returns whether a stroke was started.
	fn begin_stroke(&mut self) -> bool;

	/// Returns whether a stroke was finished.
	fn end_stroke(&mut self) -> bool;

	/// Called once per frame.
	fn update(&mut self);

	fn state(&self) -> StrokeState;

	fn brush(&self) -> &PoseBuffer;

	/// Returns whether the action changed the tool's state.
	fn handle(&mut self, action: ToolAction) -> bool {
		match action {
			ToolAction::BeginStroke => self.begin_stroke(),
			ToolAction::EndStroke => self.end_stroke(),
		}
	}
}

impl<I: ControllerInput, F: FeedbackCues, S: Sampler> DrawingTool for StrokeController<I, F, S> {
	fn begin_stroke(&mut self) -> bool {
		StrokeController::begin_stroke(self)
	}

	fn end_stroke(&mut self) -> bool {
		StrokeController::end_stroke(self)
	}

	fn update(&mut self) {
		StrokeController::update(self)
	}

	fn state(&self) -> StrokeState {
		StrokeController::state(self)
	}

	fn brush(&self) -> &PoseBuffer {
		StrokeController::brush(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::{DistanceGated, RubberBand};
	use crate::geom::Pose;
	use glam::Vec3;

	fn tools() -> Vec<Box<dyn DrawingTool>> {
		let start = Some(Pose::from_position(Vec3::ZERO));
		vec![
			Box::new(StrokeController::new(start, Default::default())),
			Box::new(StrokeController::with_parts(
				start,
				crate::engine::NoFeedback,
				RubberBand,
				Default::default(),
			)),
			Box::new(StrokeController::with_parts(
				start,
				crate::engine::NoFeedback,
				DistanceGated,
				Default::default(),
			)),
		]
	}

	#[test]
	fn routes_actions() {
		for mut tool in tools() {
			assert!(!tool.handle(ToolAction::EndStroke));
			assert!(tool.handle(ToolAction::BeginStroke));
			assert_eq!(tool.state(), StrokeState::Drawing);
			assert!(!tool.handle(ToolAction::BeginStroke));
			tool.update();
			assert!(tool.handle(ToolAction::EndStroke));
			assert_eq!(tool.state(), StrokeState::Idle);
			assert_eq!(tool.brush().count(), 2);
		}
	}

	#[test]
	fn display() {
		assert_eq!(ToolAction::BeginStroke.to_string(), "begin stroke");
		assert_eq!(StrokeState::Drawing.to_string(), "drawing");
	}
}
