//! The byte source a candidate is verified from.
//!
//! A reader knows its total size up front and hands out byte ranges on request, so the
//! verifier holds at most one chunk of candidate bytes at a time.
//!
//! ```rust
//! use anyhow::{Result, ensure};
//! use async_trait::async_trait;
//! use blobcheck_core::{Blob, ByteRange, io::DataReaderTrait};
//!
//! /// A candidate of `size` bytes that are all `0xAA`.
//! #[derive(Debug)]
//! struct Constant {
//!     size: u64,
//! }
//!
//! #[async_trait]
//! impl DataReaderTrait for Constant {
//!     async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
//!         ensure!(range.end() <= self.size, "out of range");
//!         Ok(Blob::from(vec![0xAA; range.length as usize]))
//!     }
//!
//!     async fn read_all(&self) -> Result<Blob> {
//!         self.read_range(&ByteRange::new(0, self.size)).await
//!     }
//!
//!     fn get_size(&self) -> u64 {
//!         self.size
//!     }
//!
//!     fn get_name(&self) -> &str {
//!         "constant"
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let reader = Constant { size: 8 };
//!     assert_eq!(reader.read_range(&ByteRange::new(6, 2)).await?.as_slice(), &[0xAA, 0xAA]);
//!     assert!(reader.read_range(&ByteRange::new(6, 3)).await.is_err());
//!     Ok(())
//! }
//! ```

use crate::{Blob, ByteRange};
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

pub type DataReader = Box<dyn DataReaderTrait>;

/// A byte source of known length that can be read by range.
#[async_trait]
pub trait DataReaderTrait: Debug + Send + Sync {
	/// Reads `range`. Implementations fail if it ends past [`get_size`](Self::get_size).
	async fn read_range(&self, range: &ByteRange) -> Result<Blob>;

	async fn read_all(&self) -> Result<Blob>;

	fn get_size(&self) -> u64;

	/// File path or other label used in log messages.
	fn get_name(&self) -> &str;
}
