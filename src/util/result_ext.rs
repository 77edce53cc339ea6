pub trait ResultExt<T, E> {
	/// Logs the error, if any, under `context` and discards it.
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
			.inspect_err(|error| tracing::error!(%error, "{context}"))
			.ok()
	}
}

pub trait OptionExt<T> {
	/// Logs `message` at `warn` when empty.
	fn or_warn(self, message: &str) -> Option<T>;
}

impl<T> OptionExt<T> for Option<T> {
	fn or_warn(self, message: &str) -> Option<T> {
		if self.is_none() {
			tracing::warn!("{message}");
		}
		self
	}
}
