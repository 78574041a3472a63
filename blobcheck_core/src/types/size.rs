//! Conversions between the megabyte sizes operators type and byte counts.

use anyhow::{Context, Result, ensure};

/// Bytes per megabyte (MiB).
pub const MB_BYTES: u64 = 1024 * 1024;

/// Converts a size in megabytes into bytes, rounding down to a whole byte.
///
/// Fractional megabytes are allowed. Zero, negative and non-finite sizes are rejected.
///
/// # Examples
///
/// ```rust
/// use blobcheck_core::bytes_from_megabytes;
///
/// assert_eq!(bytes_from_megabytes(1.0).unwrap(), 1_048_576);
/// assert_eq!(bytes_from_megabytes(0.5).unwrap(), 524_288);
/// assert!(bytes_from_megabytes(-1.0).is_err());
/// ```
pub fn bytes_from_megabytes(size_mb: f64) -> Result<u64> {
	ensure!(size_mb.is_finite(), "size must be a finite number, got {size_mb}");
	ensure!(size_mb > 0.0, "size must be greater than zero, got {size_mb}");

	let bytes = (size_mb * MB_BYTES as f64).floor();
	ensure!(bytes < u64::MAX as f64, "size of {size_mb} MB is too large");
	Ok(bytes as u64)
}

/// Parses a megabyte size typed by an operator, e.g. `"1"` or `"0.25"`, and checks
/// that it converts into a byte count.
pub fn parse_megabytes(text: &str) -> Result<f64> {
	let size_mb = text
		.trim()
		.parse::<f64>()
		.with_context(|| format!("size must be a number of megabytes, got {text:?}"))?;
	bytes_from_megabytes(size_mb)?;
	Ok(size_mb)
}

/// Formats a byte count as megabytes without trailing zeros, e.g. `1`, `0.5`, `1536`.
pub fn format_megabytes(bytes: u64) -> String {
	format!("{}", bytes as f64 / MB_BYTES as f64)
}
