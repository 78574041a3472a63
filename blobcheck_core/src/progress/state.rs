use std::time::Instant;

/// Identifies one progress bar within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressId(pub u32);

/// Snapshot of a progress bar, as delivered with [`Event::Progress`](super::Event::Progress).
#[derive(Debug, Clone)]
pub struct ProgressState {
	pub id: ProgressId,
	pub message: String,
	pub position: u64,
	pub total: u64,
	pub start: Instant,
	pub next_draw: Instant,
	pub finished: bool,
}

impl ProgressState {
	pub fn new(id: ProgressId, message: String, total: u64) -> Self {
		let start = Instant::now();
		Self {
			id,
			message,
			position: 0,
			total,
			start,
			next_draw: start,
			finished: false,
		}
	}

	/// Completed fraction in `0.0..=1.0`. An empty task counts as complete.
	pub fn fraction(&self) -> f64 {
		if self.total == 0 {
			return 1.0;
		}
		(self.position as f64 / self.total as f64).clamp(0.0, 1.0)
	}
}
