use glam::{vec3, Quat};
use std::f32::consts::TAU;
use stroke3d::*;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	Ok(tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)?)
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. Because we enable the "log" feature on the `tracing` crate, the
	// reverse is what happens if we fail to set the global subscriber above.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

struct LoggedCues;

impl FeedbackCues for LoggedCues {
	fn play_draw_start_cue(&mut self) {
		tracing::info!("cue: draw start");
	}

	fn play_draw_end_cue(&mut self) {
		tracing::info!("cue: draw end");
	}
}

const FRAMES: u32 = 180;
const BEGIN_FRAME: u32 = 10;
const END_FRAME: u32 = 150;

/// A controller tracing a helix, dropping out of view for a few frames.
fn controller_pose(frame: u32) -> Option<Pose> {
	if (40..45).contains(&frame) {
		return None;
	}
	let t = frame as f32 / 120.0;
	let angle = TAU * t;
	Some(Pose::new(
		vec3(0.2 * angle.cos(), 1.2 + 0.1 * t, 0.2 * angle.sin() - 0.5),
		Quat::from_rotation_y(angle),
	))
}

fn drive<S: Sampler>(name: &str, config: StrokeConfig, sampler: S) {
	let _span = tracing::info_span!("tool", name).entered();

	let mut tool = StrokeController::with_parts(None::<Pose>, LoggedCues, sampler, config);
	tool.on_poses_added(|brush| tracing::trace!(count = brush.count(), space = %brush.space()));
	tool.on_stroke_completed(|brush| {
		tracing::info!(
			count = brush.count(),
			length = brush.arc_length(),
			center = ?brush.bounds().center(),
			size = ?brush.bounds().size(),
			"stroke finished"
		);
	});

	for frame in 0..FRAMES {
		*tool.input_mut() = controller_pose(frame);
		let action = match frame {
			BEGIN_FRAME => Some(ToolAction::BeginStroke),
			END_FRAME => Some(ToolAction::EndStroke),
			_ => None,
		};
		if let Some(action) = action {
			if !tool.handle(action) {
				tracing::warn!(%action, frame, "action ignored");
			}
		}
		tool.update();
	}
}

fn main() {
	// We can technically continue without logging.
	configure_logging().ok_or_log("configure logging");

	let config = StrokeConfig::builder().min_distance(0.01).build();
	drive("freehand", config, DistanceGated);
	drive("straight", config, RubberBand);
}
