//! Sources of random bytes for blob generation.
//!
//! Generation never calls a random number generator directly. It receives a
//! [`RandomFiller`] and asks it to fill bounded slices, so tests can substitute a
//! deterministic source and assert exact chunk contents.

mod os_random;
mod sequence_filler;

pub use os_random::OsRandom;
pub use sequence_filler::SequenceFiller;

use anyhow::Result;

/// Number of random bytes behind an artifact name.
pub const NAME_BYTES: usize = 16;

/// Capability to fill a buffer with random bytes.
pub trait RandomFiller: Send {
	/// Overwrites every byte of `buffer`.
	fn fill(&mut self, buffer: &mut [u8]) -> Result<()>;
}

/// Draws [`NAME_BYTES`] bytes from `filler` and formats them as `<hex>.bin`.
pub fn random_file_name(filler: &mut dyn RandomFiller) -> Result<String> {
	let mut bytes = [0u8; NAME_BYTES];
	filler.fill(&mut bytes)?;
	let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
	Ok(format!("{hex}.bin"))
}
