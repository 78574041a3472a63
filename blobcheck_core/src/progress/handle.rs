use super::{EventBus, ProgressId, ProgressState, render};
use std::{
	io::Write,
	sync::{Arc, Mutex, MutexGuard},
	time::{Duration, Instant},
};

const REDRAW_INTERVAL: Duration = Duration::from_millis(500);

/// Handle for tracking progress of an operation
///
/// Progress handles can be cloned and shared across tasks. All clones share the same
/// state and emit to the same event bus. When `stderr` is set the handle also draws a
/// bar to stderr, at most every 500 ms and once more on [`finish`](Self::finish).
#[derive(Clone)]
pub struct ProgressHandle {
	state: Arc<Mutex<ProgressState>>,
	event_bus: EventBus,
	stderr: bool,
}

impl ProgressHandle {
	pub fn new(id: ProgressId, message: String, total: u64, event_bus: EventBus, stderr: bool) -> Self {
		let handle = Self {
			state: Arc::new(Mutex::new(ProgressState::new(id, message, total))),
			event_bus,
			stderr,
		};
		handle.emit_update();
		handle
	}

	/// A handle that only reports to a private event bus.
	pub fn hidden() -> Self {
		Self::new(ProgressId(0), String::new(), 0, EventBus::new(), false)
	}

	/// Set absolute position, clamped to the total.
	pub fn set_position(&self, position: u64) {
		self.update(|state| state.position = position.min(state.total));
	}

	/// Increment position by delta, clamped to the total.
	pub fn inc(&self, delta: u64) {
		self.update(|state| state.position = state.position.saturating_add(delta).min(state.total));
	}

	pub fn set_max_value(&self, total: u64) {
		self.update(|state| {
			state.total = total;
			state.position = state.position.min(total);
		});
	}

	/// Sets position to total and marks the progress as complete.
	pub fn finish(&self) {
		self.update(|state| {
			state.position = state.total;
			state.finished = true;
		});
		if self.stderr {
			eprintln!();
		}
	}

	pub fn id(&self) -> ProgressId {
		self.lock().id
	}

	pub fn state(&self) -> ProgressState {
		self.lock().clone()
	}

	fn update(&self, change: impl FnOnce(&mut ProgressState)) {
		let snapshot = {
			let mut state = self.lock();
			change(&mut *state);
			self.redraw(&mut *state);
			state.clone()
		};
		self.event_bus.progress(snapshot);
	}

	fn emit_update(&self) {
		let snapshot = self.lock().clone();
		self.event_bus.progress(snapshot);
	}

	// A poisoned lock still holds a usable counter.
	fn lock(&self) -> MutexGuard<'_, ProgressState> {
		self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
	}

	/// Draws the line on stderr, at most once per interval. Write errors are ignored.
	fn redraw(&self, state: &mut ProgressState) {
		if !self.stderr {
			return;
		}
		let now = Instant::now();
		if now < state.next_draw && !state.finished {
			return;
		}
		state.next_draw = now + REDRAW_INTERVAL;

		let line = render::render_line(state, render::terminal_width());
		let mut output = std::io::stderr();
		let _ = write!(output, "\r\x1b[2K{line}");
		let _ = output.flush();
	}
}

impl std::fmt::Debug for ProgressHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.lock();
		f.debug_struct("ProgressHandle")
			.field("id", &state.id)
			.field("message", &state.message)
			.field("position", &state.position)
			.field("total", &state.total)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::progress::Event;

	fn recorded(bus: &EventBus) -> Arc<Mutex<Vec<(u64, u64, bool)>>> {
		let positions = Arc::new(Mutex::new(Vec::new()));
		let sink = positions.clone();
		bus.subscribe(move |event| {
			if let Event::Progress { data } = event {
				sink.lock().unwrap().push((data.position, data.total, data.finished));
			}
		});
		positions
	}

	#[test]
	fn position_is_clamped() {
		let handle = ProgressHandle::new(ProgressId(1), "test".to_string(), 10, EventBus::new(), false);
		handle.set_position(4);
		assert_eq!(handle.state().position, 4);
		handle.inc(3);
		assert_eq!(handle.state().position, 7);
		handle.inc(100);
		assert_eq!(handle.state().position, 10);
		handle.set_position(50);
		assert_eq!(handle.state().position, 10);
	}

	#[test]
	fn shrinking_total_clamps_position() {
		let handle = ProgressHandle::new(ProgressId(1), "test".to_string(), 10, EventBus::new(), false);
		handle.set_position(8);
		handle.set_max_value(5);
		let state = handle.state();
		assert_eq!((state.position, state.total), (5, 5));
	}

	#[test]
	fn every_change_is_emitted() {
		let bus = EventBus::new();
		let positions = recorded(&bus);

		let handle = ProgressHandle::new(ProgressId(2), "chunks".to_string(), 3, bus, false);
		handle.inc(1);
		handle.set_position(2);
		handle.finish();

		assert_eq!(
			*positions.lock().unwrap(),
			vec![(0, 3, false), (1, 3, false), (2, 3, false), (3, 3, true)]
		);
	}

	#[test]
	fn clones_share_state() {
		let handle = ProgressHandle::new(ProgressId(7), "shared".to_string(), 5, EventBus::new(), false);
		let other = handle.clone();
		other.inc(2);
		assert_eq!(handle.state().position, 2);
		assert_eq!(handle.id(), ProgressId(7));
	}

	#[test]
	fn hidden_handle_is_usable() {
		let handle = ProgressHandle::hidden();
		handle.set_max_value(2);
		handle.inc(1);
		handle.finish();
		assert!(handle.state().finished);
		assert!(format!("{handle:?}").starts_with("ProgressHandle"));
	}
}
