//! Simulated call player
//!
//! Visual half of the demo: a "Live"/"Ready" badge, a row of waveform bars,
//! a play/pause button, a progress line and an elapsed/total clock. The
//! playback position itself comes from `grantline_core::transport`; this
//! module only turns a `PlaybackState` snapshot into pixels.
//!
//! - `DemoPlayerState`: bar shapes and the wave phase (pure data)
//! - `view`: state + snapshot + toggle message → `Element<Message>`

mod state;
mod view;

pub use state::{Bar, DemoPlayerState, BAR_COUNT, BAR_MAX_HEIGHT, BAR_MIN_HEIGHT};
pub use view::view;
