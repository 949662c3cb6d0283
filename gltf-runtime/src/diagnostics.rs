use parking_lot::Mutex;

/// Sink for human-readable loader diagnostics. Extensions report through this instead of
/// logging directly, so embedders can reroute or capture messages.
pub trait DiagnosticSink {
	fn error(&self, message: &str);
	fn warning(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
	fn error(&self, message: &str) {
		log::error!("{message}");
	}

	fn warning(&self, message: &str) {
		log::warn!("{message}");
	}
}

/// Buffers diagnostics in memory, for tests and embedders without a logger.
#[derive(Default)]
pub struct BufferedDiagnostics {
	errors: Mutex<Vec<String>>,
	warnings: Mutex<Vec<String>>,
}

impl BufferedDiagnostics {
	pub fn errors(&self) -> Vec<String> {
		self.errors.lock().clone()
	}

	pub fn warnings(&self) -> Vec<String> {
		self.warnings.lock().clone()
	}
}

impl DiagnosticSink for BufferedDiagnostics {
	fn error(&self, message: &str) {
		self.errors.lock().push(message.to_owned());
	}

	fn warning(&self, message: &str) {
		self.warnings.lock().push(message.to_owned());
	}
}
