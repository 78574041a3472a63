use anyhow::{Result, bail};
use std::sync::{
	Arc,
	atomic::{AtomicBool, Ordering},
};

/// Cooperative cancellation flag shared between an operation and its caller.
///
/// Long-running operations call [`CancelToken::check`] between chunks and between
/// random sub-views. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
	cancelled: Arc<AtomicBool>,
}

impl CancelToken {
	pub fn new() -> Self {
		Self::default()
	}

	/// Requests cancellation. The running operation stops at its next checkpoint.
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Relaxed);
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Relaxed)
	}

	/// Returns an error once cancellation was requested.
	pub fn check(&self) -> Result<()> {
		if self.is_cancelled() {
			bail!("operation was cancelled")
		}
		Ok(())
	}
}
