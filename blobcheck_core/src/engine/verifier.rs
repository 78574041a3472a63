//! Streaming comparison of a candidate against the reference, one chunk at a time.

use super::{MismatchReport, VerificationOutcome};
use crate::{
	CancelToken, EngineConfig, ReferenceBlob,
	io::DataReaderTrait,
	progress::{EventBus, ProgressHandle},
};
use anyhow::{Context, Result, ensure};

/// Compares `candidate` with `reference` byte for byte.
///
/// A length difference is reported first and does not stop the scan. The candidate is
/// then read chunk by chunk along the reference grid, never past its own end, so at
/// most one candidate chunk is held in memory. The scan ends early when the report
/// reaches `config.error_max` findings.
pub async fn verify_blob(
	candidate: &dyn DataReaderTrait,
	reference: &ReferenceBlob,
	config: &EngineConfig,
	progress: &ProgressHandle,
	events: &EventBus,
	cancel: &CancelToken,
) -> Result<VerificationOutcome> {
	let expected_len = reference.len();
	let actual_len = candidate.get_size();
	log::debug!(
		"verifying {} ({actual_len} bytes) against {}",
		candidate.get_name(),
		reference.size_label()
	);

	let mut report = MismatchReport::new(config.error_max);
	if expected_len != actual_len {
		report.push_size_mismatch(expected_len, actual_len);
		events.warn(format!(
			"{} has {actual_len} bytes, the reference has {expected_len}",
			candidate.get_name()
		));
	}

	let count = reference.chunk_count();
	progress.set_max_value(count as u64);

	for (index, (range, chunk)) in reference.iter_chunks().enumerate() {
		cancel.check()?;

		let wanted = range.clamp_end(actual_len);
		if wanted.length == 0 {
			log::debug!("candidate ends at byte {actual_len}, stopping before chunk {}", index + 1);
			break;
		}
		events.step(format!("verifying chunk {} of {count}", index + 1));

		let actual = candidate
			.read_range(&wanted)
			.await
			.with_context(|| format!("failed to read {wanted:?} from {}", candidate.get_name()))?;
		ensure!(
			actual.len() == wanted.length,
			"candidate returned {} bytes for {wanted:?}",
			actual.len()
		);

		let stop = report.compare(range.offset, chunk.as_slice(), actual.as_slice()).is_break();
		drop(actual);
		progress.inc(1);
		if stop {
			log::debug!(
				"more than {} mismatches, stopping after chunk {}",
				report.error_max(),
				index + 1
			);
			break;
		}

		tokio::task::yield_now().await;
	}
	progress.finish();

	Ok(VerificationOutcome::from_report(report))
}
