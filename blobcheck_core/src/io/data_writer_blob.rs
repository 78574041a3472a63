use super::DataWriterTrait;
use crate::{Blob, ByteRange};
use anyhow::Result;

/// Writes into a growing in-memory buffer.
#[derive(Clone, Debug, Default)]
pub struct DataWriterBlob {
	bytes: Vec<u8>,
}

impl DataWriterBlob {
	pub fn new() -> DataWriterBlob {
		DataWriterBlob::default()
	}

	pub fn into_blob(self) -> Blob {
		Blob::from(self.bytes)
	}
}

impl DataWriterTrait for DataWriterBlob {
	fn append(&mut self, blob: &Blob) -> Result<ByteRange> {
		let pos = self.bytes.len() as u64;
		self.bytes.extend_from_slice(blob.as_slice());
		Ok(ByteRange::new(pos, blob.len()))
	}

	fn get_position(&mut self) -> Result<u64> {
		Ok(self.bytes.len() as u64)
	}
}
