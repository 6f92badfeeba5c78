pub(crate) mod util;

pub mod config;
pub mod engine;
pub mod geom;

#[cfg(test)]
pub mod test;

pub use config::StrokeConfig;
pub use engine::{
	ControllerInput, DistanceGated, DrawingTool, FeedbackCues, NoFeedback, PoseBuffer,
	PoseBufferError, RubberBand, Sampler, Space, StrokeController, StrokeState, ToolAction,
};
pub use geom::{AABox, Pose, Transform};
pub use util::{ResultExt, SubscriptionId};
