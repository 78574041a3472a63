//! Engine configuration: chunk size, random sub-view size and mismatch cap.
//!
//! The values only tune memory use and report length; any valid combination produces
//! the same verification verdict. They can be loaded from YAML:
//!
//! ```yaml
//! chunk_size: 268435456  # bytes per chunk
//! view_size: 65536       # bytes per randomness request
//! error_max: 20          # findings before the scan stops
//! ```

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};

/// Default chunk size: 256 MiB.
pub const DEFAULT_CHUNK_SIZE: u64 = 256 * 1024 * 1024;

/// Default size of a single randomness request: 64 KiB.
pub const DEFAULT_VIEW_SIZE: u64 = 64 * 1024;

/// Default number of findings recorded before the scan gives up.
pub const DEFAULT_ERROR_MAX: usize = 20;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
	/// Maximum number of bytes per chunk
	pub chunk_size: u64,

	/// Maximum number of bytes drawn from the random source in one call
	pub view_size: u64,

	/// Number of findings after which verification stops with "too many mismatches"
	pub error_max: usize,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			chunk_size: DEFAULT_CHUNK_SIZE,
			view_size: DEFAULT_VIEW_SIZE,
			error_max: DEFAULT_ERROR_MAX,
		}
	}
}

impl EngineConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Self = serde_yaml_ng::from_reader(reader)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Self = serde_yaml_ng::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("invalid config file {path:?}"))
	}

	/// Checks that every value is positive and a chunk fits into memory.
	pub fn validate(&self) -> Result<()> {
		ensure!(self.chunk_size > 0, "chunk_size must be greater than zero");
		ensure!(self.view_size > 0, "view_size must be greater than zero");
		ensure!(self.error_max > 0, "error_max must be greater than zero");
		ensure!(
			usize::try_from(self.chunk_size).is_ok(),
			"chunk_size of {} bytes does not fit into memory",
			self.chunk_size
		);
		Ok(())
	}
}
