//! The generated reference data, held as an ordered sequence of chunks.

use super::{Blob, ByteRange, format_megabytes};
use crate::io::{DataWriterFile, DataWriterTrait};
use anyhow::{Context, Result, ensure};
use std::path::{Path, PathBuf};

/// Immutable chunked blob produced by one generation.
///
/// Chunk `i` covers `[i * chunk_size, min((i + 1) * chunk_size, len))`. The sum of the
/// chunk lengths is the total length and every chunk except a blob of length zero
/// (which has none) holds at least one byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceBlob {
	name: String,
	chunks: Vec<Blob>,
	chunk_size: u64,
	length: u64,
}

impl ReferenceBlob {
	/// Assembles a reference blob, checking the chunk grid.
	///
	/// # Errors
	///
	/// Fails if `chunk_size` is zero, a chunk is empty or longer than `chunk_size`,
	/// or a chunk other than the last is shorter than `chunk_size`.
	pub fn new(name: String, chunks: Vec<Blob>, chunk_size: u64) -> Result<Self> {
		ensure!(chunk_size > 0, "chunk size must be greater than zero");

		let last = chunks.len().saturating_sub(1);
		for (index, chunk) in chunks.iter().enumerate() {
			ensure!(!chunk.is_empty(), "chunk {index} is empty");
			ensure!(
				chunk.len() <= chunk_size,
				"chunk {index} has {} bytes, more than the chunk size of {chunk_size}",
				chunk.len()
			);
			ensure!(
				index == last || chunk.len() == chunk_size,
				"chunk {index} has {} bytes but only the last chunk may be shorter than {chunk_size}",
				chunk.len()
			);
		}

		let length = chunks.iter().map(Blob::len).sum();
		Ok(Self {
			name,
			chunks,
			chunk_size,
			length,
		})
	}

	/// File name of the exported artifact, e.g. `3f9c...e1.bin`.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Total length in bytes.
	pub fn len(&self) -> u64 {
		self.length
	}

	pub fn is_empty(&self) -> bool {
		self.length == 0
	}

	pub fn chunk_size(&self) -> u64 {
		self.chunk_size
	}

	pub fn chunk_count(&self) -> usize {
		self.chunks.len()
	}

	pub fn chunks(&self) -> &[Blob] {
		&self.chunks
	}

	/// Iterates over the chunks together with the absolute byte range each one covers.
	pub fn iter_chunks(&self) -> impl Iterator<Item = (ByteRange, &Blob)> {
		let chunk_size = self.chunk_size;
		self
			.chunks
			.iter()
			.enumerate()
			.map(move |(index, chunk)| (ByteRange::new(index as u64 * chunk_size, chunk.len()), chunk))
	}

	/// Human readable label of the artifact, e.g. `3f9c...e1.bin (1MB)`.
	pub fn size_label(&self) -> String {
		format!("{} ({}MB)", self.name, format_megabytes(self.length))
	}

	/// Concatenates all chunks into one [`Blob`].
	///
	/// This holds the whole blob in memory a second time and is meant for small blobs.
	pub fn to_blob(&self) -> Blob {
		let mut bytes = Vec::with_capacity(self.length as usize);
		for chunk in &self.chunks {
			bytes.extend_from_slice(chunk.as_slice());
		}
		Blob::from(bytes)
	}

	/// Streams the chunks, in order, to `writer`.
	pub fn write_to(&self, writer: &mut dyn DataWriterTrait) -> Result<()> {
		for (range, chunk) in self.iter_chunks() {
			let written = writer.append(chunk)?;
			ensure!(
				written.length == range.length,
				"short write: {} of {} bytes of chunk at offset {}",
				written.length,
				range.length,
				range.offset
			);
		}
		writer.flush()
	}

	/// Writes the blob to `<dir>/<name>` and returns the path.
	pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
		let dir = dir
			.canonicalize()
			.with_context(|| format!("output directory {dir:?} is not accessible"))?;
		ensure!(dir.is_dir(), "output path {dir:?} is not a directory");

		let path = dir.join(&self.name);
		let mut writer = DataWriterFile::from_path(&path)?;
		self
			.write_to(&mut writer)
			.with_context(|| format!("failed to write blob to {path:?}"))?;
		log::info!("saved {} to {path:?}", self.size_label());
		Ok(path)
	}
}
