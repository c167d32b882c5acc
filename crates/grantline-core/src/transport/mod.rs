//! Simulated transport for the demo call player
//!
//! The demo player on the landing page has no media behind it. It fakes a
//! 45 second call recording: play/pause, an advancing position, and an
//! automatic rewind when the end is reached.
//!
//! - [`Transport`]: pure state machine, ticks supplied by the caller
//! - [`TransportController`]: owns a [`TickTimer`] on a tokio runtime and
//!   drives the state machine itself
//!
//! ```ignore
//! let mut controller = TransportController::new(TransportConfig::default(), handle);
//! controller.toggle();                 // starts ticking every 500ms
//! let state = controller.query_state(); // snapshot for rendering
//! ```

mod controller;
mod machine;
mod state;
mod timer;

pub use controller::TransportController;
pub use machine::{Transport, TransportEvent};
pub use state::{
    PlayState, PlaybackState, TransportConfig, DEFAULT_DURATION_SECS, DEFAULT_STEP_SECS,
    DEFAULT_TICK_INTERVAL_MS,
};
pub use timer::{TickFlow, TickTimer};
