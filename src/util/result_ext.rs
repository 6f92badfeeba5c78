/// Logs and discards errors where the caller can carry on without the value.
pub trait ResultExt<T, E> {
	fn ok_or_log(self, context: &str) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self, context: &str) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self
			.inspect_err(|error| tracing::error!(%error, context))
			.ok()
	}
}
