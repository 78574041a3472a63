//! Byte ranges and the chunk grid.
//!
//! Generation and verification walk the same grid: [`ByteRange::split`] cuts
//! `[0, total)` into chunk ranges, and the verifier clamps each one to the candidate
//! length before reading.
//!
//! ```rust
//! use blobcheck_core::ByteRange;
//!
//! let grid = ByteRange::split(10, 4);
//! assert_eq!(grid, vec![ByteRange::new(0, 4), ByteRange::new(4, 4), ByteRange::new(8, 2)]);
//!
//! // a candidate of 6 bytes only covers part of the second chunk
//! assert_eq!(grid[1].clamp_end(6), ByteRange::new(4, 2));
//! ```

use std::{fmt, ops::Range};

/// `length` bytes starting at `offset`.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ByteRange {
	pub offset: u64,
	pub length: u64,
}

impl ByteRange {
	pub fn new(offset: u64, length: u64) -> Self {
		Self { offset, length }
	}

	/// Exclusive end offset.
	pub fn end(&self) -> u64 {
		self.offset + self.length
	}

	/// The part of this range before `limit`; empty if the range starts at or after it.
	pub fn clamp_end(&self, limit: u64) -> Self {
		Self::new(self.offset, self.end().min(limit).saturating_sub(self.offset))
	}

	/// Index range into an in-memory buffer.
	pub fn as_range_usize(&self) -> Range<usize> {
		self.offset as usize..self.end() as usize
	}

	/// Splits `[0, total)` into ascending, gap-free ranges of `size` bytes; the last one
	/// may be shorter. A `total` of zero yields no ranges.
	///
	/// # Panics
	///
	/// Panics if `size` is zero.
	pub fn split(total: u64, size: u64) -> Vec<ByteRange> {
		assert!(size > 0, "chunk size must be greater than zero");
		(0..total.div_ceil(size))
			.map(|index| {
				let offset = index * size;
				ByteRange::new(offset, size.min(total - offset))
			})
			.collect()
	}
}

impl fmt::Debug for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ByteRange[{},{}]", self.offset, self.length)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn end_and_index_range() {
		let range = ByteRange::new(23, 42);
		assert_eq!(range.end(), 65);
		assert_eq!(range.as_range_usize(), 23..65);
		assert_eq!(format!("{range:?}"), "ByteRange[23,42]");
	}

	#[rstest]
	#[case(ByteRange::new(10, 10), 100, 10)]
	#[case(ByteRange::new(10, 10), 15, 5)]
	#[case(ByteRange::new(10, 10), 10, 0)]
	#[case(ByteRange::new(10, 10), 3, 0)]
	fn clamp_end(#[case] range: ByteRange, #[case] limit: u64, #[case] length: u64) {
		let clamped = range.clamp_end(limit);
		assert_eq!(clamped.offset, range.offset);
		assert_eq!(clamped.length, length);
	}

	#[test]
	fn split_zero_total() {
		assert!(ByteRange::split(0, 16).is_empty());
	}

	#[rstest]
	#[case(1, 16)]
	#[case(16, 16)]
	#[case(17, 16)]
	#[case(1000, 7)]
	#[case(1 << 20, 1 << 18)]
	fn split_covers_total(#[case] total: u64, #[case] size: u64) {
		let ranges = ByteRange::split(total, size);

		let mut expected_offset = 0;
		for range in &ranges {
			assert_eq!(range.offset, expected_offset, "ranges must be contiguous");
			assert!(range.length > 0 && range.length <= size);
			expected_offset = range.end();
		}
		assert_eq!(expected_offset, total);
		assert_eq!(ranges.len() as u64, total.div_ceil(size));
	}

	#[test]
	#[should_panic(expected = "chunk size must be greater than zero")]
	fn split_rejects_zero_size() {
		let _ = ByteRange::split(10, 0);
	}
}
