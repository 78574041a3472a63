//! A session owns the current reference blob and runs generations and verifications
//! against it.

mod builder;

pub use builder::SessionBuilder;

use crate::{
	CancelToken, EngineConfig, ReferenceBlob, bytes_from_megabytes,
	engine::{VerificationOutcome, generate_blob, verify_blob},
	io::{DataReader, DataReaderFile, DataReaderTrait},
	progress::{EventBus, ProgressHandle, ProgressId},
	random::RandomFiller,
};
use anyhow::Result;
use std::{
	path::Path,
	sync::{
		Arc, Mutex, PoisonError,
		atomic::{AtomicU32, Ordering},
	},
};
use tokio::sync::RwLock;

pub(crate) struct SessionInner {
	pub(crate) config: EngineConfig,
	pub(crate) reference: RwLock<Option<Arc<ReferenceBlob>>>,
	pub(crate) filler: tokio::sync::Mutex<Box<dyn RandomFiller>>,
	pub(crate) event_bus: EventBus,
	pub(crate) current: Mutex<CancelToken>,
	pub(crate) next_progress_id: AtomicU32,
	pub(crate) stderr: bool,
}

/// Handle to one reference slot
///
/// `Session` is cheap to clone; clones share the reference, the random source and the
/// event bus. A generation holds the slot exclusively until the new blob is complete,
/// so concurrent verifications wait for it and never observe a partial blob. A failed
/// or cancelled generation leaves the previous reference in place.
#[derive(Clone)]
pub struct Session {
	pub(crate) inner: Arc<SessionInner>,
}

impl Session {
	/// A session with default configuration that draws progress bars on stderr
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> SessionBuilder {
		SessionBuilder::default()
	}

	pub fn config(&self) -> &EngineConfig {
		&self.inner.config
	}

	/// Subscribe here to receive progress, step and warning events.
	pub fn events(&self) -> &EventBus {
		&self.inner.event_bus
	}

	/// Snapshot of the current reference, if one was generated.
	pub async fn reference(&self) -> Option<Arc<ReferenceBlob>> {
		self.inner.reference.read().await.clone()
	}

	/// Generates a new reference of exactly `bytes` bytes and makes it current.
	pub async fn generate(&self, bytes: u64) -> Result<Arc<ReferenceBlob>> {
		let (blob, ()) = self.generate_and_export(bytes, |_| Ok(())).await?;
		Ok(blob)
	}

	/// Generates a new reference and passes it to `export` before making it current.
	///
	/// If generation or `export` fails, the previous reference stays in place.
	pub async fn generate_and_export<T, F>(&self, bytes: u64, export: F) -> Result<(Arc<ReferenceBlob>, T)>
	where
		F: FnOnce(&ReferenceBlob) -> Result<T>,
	{
		let mut slot = self.inner.reference.write().await;
		let mut filler = self.inner.filler.lock().await;
		let cancel = self.begin_operation();

		let progress = self.create_progress("generating", 0);
		let blob = generate_blob(
			bytes,
			&self.inner.config,
			&mut **filler,
			&progress,
			&self.inner.event_bus,
			&cancel,
		)
		.await?;
		let exported = export(&blob)?;

		let blob = Arc::new(blob);
		if let Some(previous) = slot.replace(blob.clone()) {
			log::debug!("discarding previous reference {}", previous.name());
		}
		log::info!("generated {}", blob.size_label());
		Ok((blob, exported))
	}

	/// Generates a new reference of `size_mb` megabytes, rounded down to whole bytes.
	///
	/// Sizes that are not positive and finite are rejected before anything changes.
	pub async fn generate_megabytes(&self, size_mb: f64) -> Result<Arc<ReferenceBlob>> {
		let bytes = bytes_from_megabytes(size_mb)?;
		self.generate(bytes).await
	}

	/// Verifies `candidate` against the current reference.
	///
	/// Without a reference this returns [`VerificationOutcome::NoReference`].
	pub async fn verify(&self, candidate: &dyn DataReaderTrait) -> Result<VerificationOutcome> {
		self.inner.config.validate()?;
		let Some(reference) = self.reference().await else {
			log::warn!("verification requested before any blob was generated");
			return Ok(VerificationOutcome::NoReference);
		};

		let cancel = self.begin_operation();
		let progress = self.create_progress("verifying", 0);
		let outcome = verify_blob(
			candidate,
			&reference,
			&self.inner.config,
			&progress,
			&self.inner.event_bus,
			&cancel,
		)
		.await?;

		if outcome.is_match() {
			log::info!("{} matches {}", candidate.get_name(), reference.name());
		} else {
			log::info!(
				"{} differs from {}: {} finding(s)",
				candidate.get_name(),
				reference.name(),
				outcome.findings().len()
			);
		}
		Ok(outcome)
	}

	/// Verifies the file at `path` against the current reference.
	pub async fn verify_file(&self, path: &Path) -> Result<VerificationOutcome> {
		if self.reference().await.is_none() {
			return Ok(VerificationOutcome::NoReference);
		}
		let reader: DataReader = DataReaderFile::open(path)?;
		self.verify(reader.as_ref()).await
	}

	/// Asks the running operation to stop at its next checkpoint.
	pub fn cancel(&self) {
		self.current_token().cancel();
	}

	/// Create a progress handle reporting through this session's event bus
	pub fn create_progress(&self, message: &str, total: u64) -> ProgressHandle {
		let id = ProgressId(self.inner.next_progress_id.fetch_add(1, Ordering::Relaxed));
		ProgressHandle::new(
			id,
			message.to_string(),
			total,
			self.inner.event_bus.clone(),
			self.inner.stderr,
		)
	}

	fn begin_operation(&self) -> CancelToken {
		let token = CancelToken::new();
		*self.inner.current.lock().unwrap_or_else(PoisonError::into_inner) = token.clone();
		token
	}

	fn current_token(&self) -> CancelToken {
		self.inner.current.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("config", &self.inner.config)
			.field("stderr", &self.inner.stderr)
			.finish_non_exhaustive()
	}
}
