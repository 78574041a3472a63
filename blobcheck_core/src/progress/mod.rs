//! Progress reporting: an event bus for listeners and per-operation progress handles.

mod events;
mod handle;
mod render;
mod state;

pub use events::{Event, EventBus, ListenerId};
pub use handle::ProgressHandle;
pub use state::{ProgressId, ProgressState};
