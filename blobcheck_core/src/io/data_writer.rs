//! This module defines the `DataWriterTrait`, the sink generated blobs are exported to.

use crate::{Blob, ByteRange};
use anyhow::Result;

/// An append-only byte sink.
pub trait DataWriterTrait: Send {
	/// Appends `blob` and returns the range it now occupies.
	fn append(&mut self, blob: &Blob) -> Result<ByteRange>;

	/// Gets the current write position.
	fn get_position(&mut self) -> Result<u64>;

	/// Pushes buffered bytes to the destination.
	fn flush(&mut self) -> Result<()> {
		Ok(())
	}
}
