//! This module provides functionality for writing blobs to files.
//!
//! # Examples
//!
//! ```rust
//! use blobcheck_core::{io::{DataWriterFile, DataWriterTrait}, Blob, ByteRange};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let path = std::env::temp_dir().join("blobcheck_doc_writer.bin");
//!     let mut writer = DataWriterFile::from_path(&path)?;
//!
//!     assert_eq!(writer.append(&Blob::from(&[1, 2, 3, 4]))?, ByteRange::new(0, 4));
//!     assert_eq!(writer.append(&Blob::from(&[5, 6]))?, ByteRange::new(4, 2));
//!     writer.flush()?;
//!
//!     assert_eq!(std::fs::read(&path)?, vec![1, 2, 3, 4, 5, 6]);
//!     std::fs::remove_file(&path)?;
//!     Ok(())
//! }
//! ```

use super::DataWriterTrait;
use crate::{Blob, ByteRange};
use anyhow::{Context, Result, ensure};
use std::{
	fs::File,
	io::{BufWriter, Seek, Write},
	path::Path,
};

/// A struct that provides writing capabilities to a file.
pub struct DataWriterFile {
	writer: BufWriter<File>,
}

impl DataWriterFile {
	/// Creates (or truncates) the file at `path`.
	///
	/// # Errors
	///
	/// Fails if `path` is relative or the file cannot be created.
	pub fn from_path(path: &Path) -> Result<DataWriterFile> {
		ensure!(path.is_absolute(), "path {path:?} must be absolute");

		let file = File::create(path).with_context(|| format!("failed to create file {path:?}"))?;
		Ok(DataWriterFile {
			writer: BufWriter::new(file),
		})
	}
}

impl DataWriterTrait for DataWriterFile {
	fn append(&mut self, blob: &Blob) -> Result<ByteRange> {
		let pos = self.writer.stream_position()?;
		self.writer.write_all(blob.as_slice())?;

		Ok(ByteRange::new(pos, blob.len()))
	}

	fn get_position(&mut self) -> Result<u64> {
		Ok(self.writer.stream_position()?)
	}

	fn flush(&mut self) -> Result<()> {
		self.writer.flush()?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::NamedTempFile;

	#[test]
	fn append_and_position() -> Result<()> {
		let file = NamedTempFile::new("out.bin")?;
		let mut writer = DataWriterFile::from_path(file.path())?;

		assert_eq!(writer.get_position()?, 0);
		assert_eq!(writer.append(&Blob::from(&[1, 2, 3]))?, ByteRange::new(0, 3));
		assert_eq!(writer.append(&Blob::from(&[4]))?, ByteRange::new(3, 1));
		assert_eq!(writer.get_position()?, 4);
		writer.flush()?;

		assert_eq!(std::fs::read(file.path())?, vec![1, 2, 3, 4]);
		Ok(())
	}

	#[test]
	fn relative_path_fails() {
		assert!(DataWriterFile::from_path(Path::new("relative.bin")).is_err());
	}
}
