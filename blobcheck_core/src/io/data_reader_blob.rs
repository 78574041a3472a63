//! In-memory candidate source.
//!
//! # Examples
//!
//! ```rust
//! use blobcheck_core::{io::{DataReaderBlob, DataReaderTrait}, ByteRange};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let reader = DataReaderBlob::from(vec![1, 2, 3, 4, 5]);
//!
//!     let partial_data = reader.read_range(&ByteRange::new(1, 3)).await?;
//!     assert_eq!(partial_data.as_slice(), &[2, 3, 4]);
//!     Ok(())
//! }
//! ```

use super::DataReaderTrait;
use crate::{Blob, ByteRange};
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug)]
pub struct DataReaderBlob {
	blob: Blob,
}

#[async_trait]
impl DataReaderTrait for DataReaderBlob {
	async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		self.blob.read_range(range)
	}

	async fn read_all(&self) -> Result<Blob> {
		Ok(self.blob.clone())
	}

	fn get_size(&self) -> u64 {
		self.blob.len()
	}

	fn get_name(&self) -> &str {
		"memory"
	}
}

impl From<Blob> for DataReaderBlob {
	fn from(blob: Blob) -> Self {
		DataReaderBlob { blob }
	}
}

impl From<Vec<u8>> for DataReaderBlob {
	fn from(value: Vec<u8>) -> Self {
		DataReaderBlob { blob: Blob::from(value) }
	}
}
