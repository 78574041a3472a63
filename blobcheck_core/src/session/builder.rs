//! Builder pattern for constructing [`Session`] instances

use super::{Session, SessionInner};
use crate::{
	CancelToken, EngineConfig,
	progress::EventBus,
	random::{OsRandom, RandomFiller},
};
use std::sync::{Arc, Mutex, atomic::AtomicU32};
use tokio::sync::RwLock;

/// Builder for creating customized sessions
///
/// # Examples
///
/// ```rust
/// use blobcheck_core::{EngineConfig, Session, random::SequenceFiller};
///
/// let session = Session::builder()
///     .config(EngineConfig { chunk_size: 1024, ..EngineConfig::default() })
///     .random_filler(Box::new(SequenceFiller::new(0)))
///     .silent(true)
///     .build();
/// assert_eq!(session.config().chunk_size, 1024);
/// ```
#[derive(Default)]
pub struct SessionBuilder {
	config: Option<EngineConfig>,
	filler: Option<Box<dyn RandomFiller>>,
	silent: bool,
}

impl SessionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set chunk size, view size and mismatch cap
	pub fn config(mut self, config: EngineConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Replace the operating system random source, e.g. with a deterministic one in tests
	pub fn random_filler(mut self, filler: Box<dyn RandomFiller>) -> Self {
		self.filler = Some(filler);
		self
	}

	/// Do not draw progress bars on stderr
	pub fn silent(mut self, silent: bool) -> Self {
		self.silent = silent;
		self
	}

	pub fn build(self) -> Session {
		Session {
			inner: Arc::new(SessionInner {
				config: self.config.unwrap_or_default(),
				reference: RwLock::new(None),
				filler: tokio::sync::Mutex::new(self.filler.unwrap_or_else(|| Box::new(OsRandom))),
				event_bus: EventBus::new(),
				current: Mutex::new(CancelToken::new()),
				next_progress_id: AtomicU32::new(0),
				stderr: !self.silent,
			}),
		}
	}
}
