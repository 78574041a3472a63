use super::RandomFiller;
use anyhow::{Result, anyhow};

/// Cryptographically secure randomness from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomFiller for OsRandom {
	fn fill(&mut self, buffer: &mut [u8]) -> Result<()> {
		getrandom::fill(buffer).map_err(|err| anyhow!("random source failed: {err}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Smoke test of the API, not of the quality of the randomness.
	#[test]
	fn fills_various_sizes() {
		for size in [0, 1, 32, 33, 65_536] {
			let mut buffer = vec![0u8; size];
			OsRandom.fill(&mut buffer).unwrap();
		}
	}

	#[test]
	fn two_draws_differ() {
		let mut a = [0u8; 32];
		let mut b = [0u8; 32];
		OsRandom.fill(&mut a).unwrap();
		OsRandom.fill(&mut b).unwrap();
		assert_ne!(a, b);
	}
}
