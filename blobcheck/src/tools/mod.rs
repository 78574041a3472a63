pub mod generate;
pub mod roundtrip;
pub mod session;

use anyhow::Result;
use blobcheck_core::{EngineConfig, Session, bytes_from_megabytes};
use std::{
	io::IsTerminal,
	path::{Path, PathBuf},
};

/// Builds a session from an optional YAML config; progress bars only on a terminal.
pub fn build_session(config: Option<&Path>) -> Result<Session> {
	let config = match config {
		Some(path) => EngineConfig::from_path(path)?,
		None => EngineConfig::default(),
	};
	Ok(Session::builder()
		.config(config)
		.silent(!std::io::stderr().is_terminal())
		.build())
}

/// Generates a blob of `size_mb` megabytes, writes it to `output_dir` and returns the
/// path with the line announcing it: `Download <path> (<MB>MB)`.
///
/// The blob only becomes the session's reference once it is saved.
pub async fn generate_and_save(session: &Session, size_mb: f64, output_dir: &Path) -> Result<(PathBuf, String)> {
	let bytes = bytes_from_megabytes(size_mb)?;
	let (_, path) = session
		.generate_and_export(bytes, |blob| blob.save_to_dir(output_dir))
		.await?;
	let line = format!("Download {} ({size_mb}MB)", path.display());
	Ok((path, line))
}
