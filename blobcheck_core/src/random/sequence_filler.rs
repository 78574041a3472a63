use super::RandomFiller;
use anyhow::Result;

/// Deterministic filler writing a wrapping byte counter: `start, start + 1, ...`.
///
/// The counter continues across calls, so a blob filled in several sub-views reads as
/// one uninterrupted sequence.
#[derive(Clone, Debug, Default)]
pub struct SequenceFiller {
	next: u8,
}

impl SequenceFiller {
	pub fn new(start: u8) -> Self {
		Self { next: start }
	}
}

impl RandomFiller for SequenceFiller {
	fn fill(&mut self, buffer: &mut [u8]) -> Result<()> {
		for byte in buffer.iter_mut() {
			*byte = self.next;
			self.next = self.next.wrapping_add(1);
		}
		Ok(())
	}
}
