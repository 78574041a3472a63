//! Event bus for session events
//!
//! Generation and verification report through the bus:
//! - progress updates (chunk position / chunk count)
//! - step messages such as `verifying chunk 2 of 5`
//! - warnings

use super::ProgressState;
use arc_swap::ArcSwap;
use std::{
	panic::AssertUnwindSafe,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

#[derive(Debug, Clone)]
pub enum Event {
	/// New position or total of a progress handle
	Progress { data: ProgressState },

	/// The operation moved on, e.g. to the next chunk
	Step { message: String },

	Warning { message: String },
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type EventListener = Arc<dyn Fn(&Event) + Send + Sync>;
type ListenerList = Vec<(ListenerId, EventListener)>;

/// Fan-out of session events to registered listeners
///
/// Listeners run synchronously, in registration order, on the task that emits. The
/// list is replaced copy-on-write through arc-swap, so emitting takes no lock.
#[derive(Clone)]
pub struct EventBus {
	listeners: Arc<ArcSwap<ListenerList>>,
	next_id: Arc<AtomicUsize>,
}

impl EventBus {
	pub fn new() -> Self {
		Self {
			listeners: Arc::new(ArcSwap::from_pointee(Vec::new())),
			next_id: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn subscribe<F>(&self, listener: F) -> ListenerId
	where
		F: Fn(&Event) + Send + Sync + 'static,
	{
		let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
		let listener: EventListener = Arc::new(listener);
		self.listeners.rcu(|current| {
			let mut list = ListenerList::clone(current);
			list.push((id, listener.clone()));
			list
		});
		id
	}

	/// Removes a listener; unknown ids are ignored.
	pub fn unsubscribe(&self, id: ListenerId) {
		self.listeners.rcu(|current| {
			current
				.iter()
				.filter(|(listener_id, _)| *listener_id != id)
				.cloned()
				.collect::<ListenerList>()
		});
	}

	/// Delivers `event` to every listener. A panicking listener does not keep the
	/// others from running.
	pub fn emit(&self, event: &Event) {
		for (_, listener) in self.listeners.load().iter() {
			let _ = std::panic::catch_unwind(AssertUnwindSafe(|| listener(event)));
		}
	}

	pub fn progress(&self, data: ProgressState) {
		self.emit(&Event::Progress { data });
	}

	/// Logs `message` at debug level and emits it as a step.
	pub fn step(&self, message: String) {
		log::debug!("{message}");
		self.emit(&Event::Step { message });
	}

	pub fn warn(&self, message: String) {
		log::warn!("{message}");
		self.emit(&Event::Warning { message });
	}
}

impl Default for EventBus {
	fn default() -> Self {
		Self::new()
	}
}
