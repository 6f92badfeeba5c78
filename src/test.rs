use crate::engine::{FeedbackCues, PoseBuffer};
use crate::geom::Pose;
use std::cell::RefCell;
use std::rc::Rc;

/// Counts the cues a controller plays.
#[derive(Debug, Default)]
pub struct CueRecorder {
	pub starts: usize,
	pub ends: usize,
}

impl FeedbackCues for CueRecorder {
	fn play_draw_start_cue(&mut self) {
		self.starts += 1;
	}

	fn play_draw_end_cue(&mut self) {
		self.ends += 1;
	}
}

/// Keeps a snapshot of the brush for every notification it receives.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Vec<Pose>>>>);

impl Recorder {
	pub fn handler(&self) -> impl FnMut(&PoseBuffer) + 'static {
		let snapshots = self.0.clone();
		move |brush: &PoseBuffer| snapshots.borrow_mut().push(brush.as_slice().to_vec())
	}

	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	pub fn last(&self) -> Option<Vec<Pose>> {
		self.0.borrow().last().cloned()
	}
}
