//! Owned byte buffers.
//!
//! Reference chunks and candidate reads are both carried as [`Blob`]s, so the verifier
//! compares them without caring where the bytes came from.
//!
//! ```rust
//! use blobcheck_core::{Blob, ByteRange};
//!
//! let chunk = Blob::from(&[0x10, 0x20, 0x30, 0x40]);
//! let part = chunk.read_range(&ByteRange::new(1, 2)).unwrap();
//! assert_eq!(part.as_slice(), &[0x20, 0x30]);
//! assert!(chunk.read_range(&ByteRange::new(3, 2)).is_err());
//! ```

use super::ByteRange;
use anyhow::{Result, ensure};
use std::fmt;

/// Bytes shown by `Debug` before the output is cut off.
const DEBUG_PREVIEW: usize = 32;

/// A run of bytes: one chunk of a reference blob, or a range read from a candidate.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Copies `range` into a new blob. Fails if the range ends past the last byte.
	pub fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		ensure!(
			range.end() <= self.len(),
			"{range:?} reaches past the end of a blob of {} bytes",
			self.len()
		);
		Ok(Blob::from(&self.0[range.as_range_usize()]))
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Mutable access, used to fill a freshly allocated chunk.
	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		&mut self.0
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Length in bytes; `u64` like every other offset in the crate.
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Blob(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Blob(bytes.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(bytes: &[u8; N]) -> Self {
		Blob(bytes.to_vec())
	}
}

/// `Blob(<len>): <hex>`, cut off after the first 32 bytes.
impl fmt::Debug for Blob {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Blob({}):", self.0.len())?;
		for byte in self.0.iter().take(DEBUG_PREVIEW) {
			write!(f, " {byte:02x}")?;
		}
		if self.0.len() > DEBUG_PREVIEW {
			write!(f, " ...")?;
		}
		Ok(())
	}
}
