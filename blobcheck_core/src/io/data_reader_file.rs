//! This module provides functionality for reading candidate data from files.
//!
//! The file size is captured when the file is opened. Every range read clones the
//! file handle, seeks and reads exactly the requested bytes.
//!
//! # Examples
//!
//! ```rust
//! use blobcheck_core::{io::{DataReaderFile, DataReaderTrait}, ByteRange};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let path = std::env::temp_dir().join("blobcheck_doc_reader.bin");
//!     std::fs::write(&path, b"Hello, world!")?;
//!
//!     let reader = DataReaderFile::open(&path)?;
//!     let blob = reader.read_range(&ByteRange::new(7, 5)).await?;
//!     assert_eq!(blob.as_slice(), b"world");
//!     assert_eq!(reader.get_size(), 13);
//!
//!     std::fs::remove_file(&path)?;
//!     Ok(())
//! }
//! ```

use super::DataReaderTrait;
use crate::{Blob, ByteRange};
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use std::{
	fs::File,
	io::{Read, Seek, SeekFrom},
	path::Path,
};

/// A struct that provides reading capabilities from a file.
#[derive(Debug)]
pub struct DataReaderFile {
	name: String,
	file: File,
	size: u64,
}

impl DataReaderFile {
	/// Opens a file for range reads.
	///
	/// # Errors
	///
	/// Fails if the path does not exist, is not a regular file or cannot be opened.
	pub fn open(path: &Path) -> Result<Box<DataReaderFile>> {
		ensure!(path.exists(), "file {path:?} does not exist");
		ensure!(path.is_file(), "path {path:?} must be a file");

		let path = path.canonicalize()?;
		let file = File::open(&path).with_context(|| format!("failed to open file {path:?}"))?;
		let size = file.metadata()?.len();

		Ok(Box::new(DataReaderFile {
			name: path.to_string_lossy().into_owned(),
			file,
			size,
		}))
	}
}

#[async_trait]
impl DataReaderTrait for DataReaderFile {
	async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		ensure!(
			range.end() <= self.size,
			"{range:?} reaches past the end of file '{}' ({} bytes)",
			self.name,
			self.size
		);

		let mut buffer = vec![0; range.length as usize];
		let mut file = self
			.file
			.try_clone()
			.with_context(|| format!("failed to clone file '{}'", self.name))?;
		file
			.seek(SeekFrom::Start(range.offset))
			.with_context(|| format!("failed to seek to offset {} in file '{}'", range.offset, self.name))?;
		file.read_exact(&mut buffer).with_context(|| {
			format!(
				"failed to read {} bytes at offset {} in file '{}'",
				range.length, range.offset, self.name
			)
		})?;
		Ok(Blob::from(buffer))
	}

	async fn read_all(&self) -> Result<Blob> {
		self.read_range(&ByteRange::new(0, self.size)).await
	}

	fn get_size(&self) -> u64 {
		self.size
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert_wildcard;
	use assert_fs::NamedTempFile;
	use assert_fs::prelude::*;

	fn temp_file(name: &str, content: &[u8]) -> Result<NamedTempFile> {
		let file = NamedTempFile::new(name)?;
		file.write_binary(content)?;
		Ok(file)
	}

	#[tokio::test]
	async fn open() -> Result<()> {
		let file = temp_file("testfile.bin", b"Hello, world!")?;
		assert!(DataReaderFile::open(file.path()).is_ok());

		let missing = NamedTempFile::new("nonexistent.bin")?;
		assert!(DataReaderFile::open(missing.path()).is_err());
		Ok(())
	}

	#[tokio::test]
	async fn open_directory_fails() -> Result<()> {
		let dir = assert_fs::TempDir::new()?;
		assert!(DataReaderFile::open(dir.path()).is_err());
		Ok(())
	}

	#[tokio::test]
	async fn read_range() -> Result<()> {
		let file = temp_file("testfile.bin", b"Hello, world!")?;
		let reader = DataReaderFile::open(file.path())?;

		let blob = reader.read_range(&ByteRange::new(4, 6)).await?;
		assert_eq!(blob.as_slice(), b"o, wor");
		Ok(())
	}

	#[tokio::test]
	async fn read_range_past_end_fails() -> Result<()> {
		let file = temp_file("testfile.bin", b"short")?;
		let reader = DataReaderFile::open(file.path())?;

		assert!(reader.read_range(&ByteRange::new(3, 3)).await.is_err());
		assert_eq!(reader.read_range(&ByteRange::new(3, 2)).await?.as_slice(), b"rt");
		Ok(())
	}

	#[tokio::test]
	async fn size_and_name() -> Result<()> {
		let file = temp_file("testfile.bin", b"Hello, world!")?;
		let reader = DataReaderFile::open(file.path())?;

		assert_eq!(reader.get_size(), 13);
		assert_wildcard!(reader.get_name(), "*testfile.bin");
		Ok(())
	}

	#[tokio::test]
	async fn read_all() -> Result<()> {
		let file = temp_file("testfile_all.bin", b"Async read all test")?;
		let reader = DataReaderFile::open(file.path())?;
		assert_eq!(reader.read_all().await?.as_slice(), b"Async read all test");
		Ok(())
	}

	#[tokio::test]
	async fn empty_file() -> Result<()> {
		let file = temp_file("empty.bin", b"")?;
		let reader = DataReaderFile::open(file.path())?;
		assert_eq!(reader.get_size(), 0);
		assert!(reader.read_all().await?.is_empty());
		Ok(())
	}
}
