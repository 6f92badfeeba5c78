/// Length of the synthetic start cap placed behind the first pose of a stroke.
pub const DEFAULT_END_CAP_LENGTH: f32 = 0.001;

/// Minimum distance the controller must travel before another pose is recorded.
pub const DEFAULT_MIN_DISTANCE: f32 = 0.0025;

#[derive(Debug, Clone, Copy, PartialEq, bon::Builder)]
pub struct StrokeConfig {
	#[builder(default = DEFAULT_END_CAP_LENGTH)]
	pub end_cap_length: f32,
	#[builder(default = DEFAULT_MIN_DISTANCE)]
	pub min_distance: f32,
}

impl Default for StrokeConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl StrokeConfig {
	/// Samples are compared by squared distance, so the threshold is squared once up front.
	pub fn min_distance_squared(&self) -> f32 {
		self.min_distance * self.min_distance
	}
}
