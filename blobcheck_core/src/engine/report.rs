//! Findings of a verification run and the capped report that collects them.

use std::{fmt, ops::ControlFlow};

/// Line printed when a candidate matches the reference exactly.
pub const SUCCESS_MESSAGE: &str = "Blob verification succeeded: Blobs match exactly.";

/// Line printed when verification is requested before any generation.
pub const NO_REFERENCE_MESSAGE: &str = "Nothing to verify against: generate a blob first.";

/// A single difference between candidate and reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finding {
	/// Candidate and reference lengths differ.
	SizeMismatch { expected: u64, actual: u64 },
	/// The byte at `offset` differs.
	ByteMismatch { offset: u64, expected: u8, actual: u8 },
	/// The cap was hit; scanning stopped here.
	TooManyMismatches,
}

impl fmt::Display for Finding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Finding::SizeMismatch { expected, actual } => write!(
				f,
				"Blob verification failed: Size mismatch, expected {expected} bytes, got {actual} bytes."
			),
			Finding::ByteMismatch {
				offset,
				expected,
				actual,
			} => write!(
				f,
				"Blob verification failed: Mismatch at byte {offset}, expected 0x{expected:02X}, got 0x{actual:02X}."
			),
			Finding::TooManyMismatches => write!(f, "Blob verification failed: Too many mismatches."),
		}
	}
}

/// Ordered findings with a hard cap.
///
/// The size finding, if any, comes first and counts toward the cap. A finding that
/// arrives while the report already holds `error_max` entries is replaced by a single
/// [`Finding::TooManyMismatches`] and the report tells the caller to stop, so it never
/// holds more than `error_max + 1` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MismatchReport {
	findings: Vec<Finding>,
	error_max: usize,
}

impl MismatchReport {
	pub fn new(error_max: usize) -> Self {
		Self {
			findings: Vec::new(),
			error_max,
		}
	}

	/// Records the length difference. Always accepted.
	pub fn push_size_mismatch(&mut self, expected: u64, actual: u64) {
		self.findings.push(Finding::SizeMismatch { expected, actual });
	}

	/// Records `finding`, or the terminal sentinel if the cap is already reached.
	pub fn push(&mut self, finding: Finding) -> ControlFlow<()> {
		if self.is_truncated() {
			return ControlFlow::Break(());
		}
		if self.findings.len() >= self.error_max {
			self.findings.push(Finding::TooManyMismatches);
			return ControlFlow::Break(());
		}
		self.findings.push(finding);
		ControlFlow::Continue(())
	}

	/// Compares the overlapping prefix of two slices; `offset` is the absolute position
	/// of their first byte.
	pub fn compare(&mut self, offset: u64, expected: &[u8], actual: &[u8]) -> ControlFlow<()> {
		let length = expected.len().min(actual.len());
		let (expected, actual) = (&expected[..length], &actual[..length]);
		if expected == actual {
			return ControlFlow::Continue(());
		}

		for (index, (&e, &a)) in expected.iter().zip(actual).enumerate() {
			if e != a {
				let finding = Finding::ByteMismatch {
					offset: offset + index as u64,
					expected: e,
					actual: a,
				};
				if self.push(finding).is_break() {
					return ControlFlow::Break(());
				}
			}
		}
		ControlFlow::Continue(())
	}

	pub fn findings(&self) -> &[Finding] {
		&self.findings
	}

	pub fn len(&self) -> usize {
		self.findings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.findings.is_empty()
	}

	pub fn error_max(&self) -> usize {
		self.error_max
	}

	/// True once the sentinel was appended.
	pub fn is_truncated(&self) -> bool {
		self.findings.last() == Some(&Finding::TooManyMismatches)
	}
}

/// Result of verifying a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
	Match,
	Mismatch(MismatchReport),
	/// No reference has been generated yet.
	NoReference,
}

impl VerificationOutcome {
	/// `Match` for an empty report, `Mismatch` otherwise.
	pub fn from_report(report: MismatchReport) -> Self {
		if report.is_empty() {
			VerificationOutcome::Match
		} else {
			VerificationOutcome::Mismatch(report)
		}
	}

	pub fn is_match(&self) -> bool {
		matches!(self, VerificationOutcome::Match)
	}

	pub fn findings(&self) -> &[Finding] {
		match self {
			VerificationOutcome::Mismatch(report) => report.findings(),
			_ => &[],
		}
	}

	/// Plain-text lines as shown to the operator.
	pub fn lines(&self) -> Vec<String> {
		match self {
			VerificationOutcome::Match => vec![SUCCESS_MESSAGE.to_string()],
			VerificationOutcome::Mismatch(report) => report.findings().iter().map(ToString::to_string).collect(),
			VerificationOutcome::NoReference => vec![NO_REFERENCE_MESSAGE.to_string()],
		}
	}
}

impl fmt::Display for VerificationOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.lines().join("\n"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(
		Finding::SizeMismatch { expected: 1_048_576, actual: 1_048_575 },
		"Blob verification failed: Size mismatch, expected 1048576 bytes, got 1048575 bytes."
	)]
	#[case(
		Finding::ByteMismatch { offset: 17, expected: 0xAB, actual: 0x00 },
		"Blob verification failed: Mismatch at byte 17, expected 0xAB, got 0x00."
	)]
	#[case(
		Finding::ByteMismatch { offset: 0, expected: 0x0f, actual: 0xf0 },
		"Blob verification failed: Mismatch at byte 0, expected 0x0F, got 0xF0."
	)]
	#[case(Finding::TooManyMismatches, "Blob verification failed: Too many mismatches.")]
	fn finding_messages(#[case] finding: Finding, #[case] expected: &str) {
		assert_eq!(finding.to_string(), expected);
	}

	#[test]
	fn compare_equal_slices() {
		let mut report = MismatchReport::new(20);
		assert!(report.compare(0, &[1, 2, 3], &[1, 2, 3]).is_continue());
		assert!(report.is_empty());
	}

	#[test]
	fn compare_uses_overlapping_prefix() {
		let mut report = MismatchReport::new(20);
		assert!(report.compare(100, &[1, 2, 3, 4], &[1, 9]).is_continue());
		assert_eq!(
			report.findings(),
			&[Finding::ByteMismatch {
				offset: 101,
				expected: 2,
				actual: 9
			}]
		);
	}

	#[test]
	fn cap_appends_single_sentinel() {
		let mut report = MismatchReport::new(3);
		assert!(report.compare(0, &[1; 10], &[0; 10]).is_break());
		assert_eq!(report.len(), 4);
		assert!(report.is_truncated());
		assert_eq!(report.findings()[3], Finding::TooManyMismatches);

		// nothing is added after the sentinel
		assert!(report.compare(10, &[1; 10], &[0; 10]).is_break());
		assert_eq!(report.len(), 4);
	}

	#[test]
	fn exactly_error_max_findings_is_not_truncated() {
		let mut report = MismatchReport::new(3);
		assert!(report.compare(0, &[1, 1, 1, 0], &[0, 0, 0, 0]).is_continue());
		assert_eq!(report.len(), 3);
		assert!(!report.is_truncated());
	}

	#[test]
	fn size_finding_counts_toward_cap() {
		let mut report = MismatchReport::new(2);
		report.push_size_mismatch(10, 8);
		assert!(report.compare(0, &[1, 1, 1], &[0, 0, 0]).is_break());
		assert_eq!(
			report.findings(),
			&[
				Finding::SizeMismatch { expected: 10, actual: 8 },
				Finding::ByteMismatch {
					offset: 0,
					expected: 1,
					actual: 0
				},
				Finding::TooManyMismatches,
			]
		);
	}

	#[test]
	fn outcome_lines() {
		assert_eq!(VerificationOutcome::Match.lines(), vec![SUCCESS_MESSAGE]);
		assert_eq!(VerificationOutcome::NoReference.to_string(), NO_REFERENCE_MESSAGE);
		assert!(VerificationOutcome::from_report(MismatchReport::new(1)).is_match());

		let mut report = MismatchReport::new(5);
		report.push_size_mismatch(2, 1);
		let outcome = VerificationOutcome::from_report(report);
		assert!(!outcome.is_match());
		assert_eq!(
			outcome.to_string(),
			"Blob verification failed: Size mismatch, expected 2 bytes, got 1 bytes."
		);
	}
}
