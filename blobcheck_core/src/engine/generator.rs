//! Chunked generation of a random reference blob.

use crate::{
	Blob, ByteRange, CancelToken, EngineConfig, ReferenceBlob,
	progress::{EventBus, ProgressHandle},
	random::{RandomFiller, random_file_name},
};
use anyhow::{Context, Result, ensure};

/// Generates a reference blob of exactly `total` bytes.
///
/// `[0, total)` is split into chunks of `config.chunk_size` bytes, and each chunk is
/// filled from `filler` in sub-views of at most `config.view_size` bytes. The task
/// yields after every sub-view and checks `cancel` between sub-views and chunks.
/// The artifact name is drawn from `filler` before any content.
pub async fn generate_blob(
	total: u64,
	config: &EngineConfig,
	filler: &mut dyn RandomFiller,
	progress: &ProgressHandle,
	events: &EventBus,
	cancel: &CancelToken,
) -> Result<ReferenceBlob> {
	config.validate()?;
	ensure!(
		usize::try_from(total).is_ok(),
		"a blob of {total} bytes cannot be addressed in memory"
	);
	let view_size = usize::try_from(config.view_size).unwrap_or(usize::MAX);

	let name = random_file_name(filler)?;
	let ranges = ByteRange::split(total, config.chunk_size);
	let count = ranges.len();
	log::debug!("generating {name}: {total} bytes in {count} chunk(s)");
	progress.set_max_value(count as u64);

	let mut chunks = Vec::with_capacity(count);
	for (index, range) in ranges.iter().enumerate() {
		cancel.check()?;
		events.step(format!("generating chunk {} of {count}", index + 1));

		let mut chunk = allocate_chunk(range)?;
		for view in chunk.as_mut_slice().chunks_mut(view_size) {
			filler.fill(view)?;
			tokio::task::yield_now().await;
			cancel.check()?;
		}

		chunks.push(chunk);
		progress.inc(1);
	}
	progress.finish();

	ReferenceBlob::new(name, chunks, config.chunk_size)
}

fn allocate_chunk(range: &ByteRange) -> Result<Blob> {
	let length = usize::try_from(range.length)?;
	let mut bytes = Vec::new();
	bytes
		.try_reserve_exact(length)
		.with_context(|| format!("failed to allocate chunk of {length} bytes at offset {}", range.offset))?;
	bytes.resize(length, 0);
	Ok(Blob::from(bytes))
}
