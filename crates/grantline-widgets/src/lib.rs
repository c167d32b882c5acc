//! Shared UI widgets for the Grantline landing page
//!
//! Follows the iced 0.14 pattern used across the site:
//!
//! - **State structs**: pure data (`DemoPlayerState`)
//! - **View functions**: take state + messages, return `Element<Message>`
//!
//! ## Widgets
//!
//! - `demo_player::view`: the simulated call player (badge, waveform bars,
//!   play button, progress line, clock)
//! - `modal::dialog` / `modal::with_modal_overlay`: legal text modals
//! - `theme`: brand palette and shared style functions

pub mod demo_player;
pub mod modal;
pub mod theme;
pub mod time_format;

pub use demo_player::{DemoPlayerState, BAR_COUNT};
pub use modal::{dialog, with_modal_overlay};
pub use time_format::format_clock;
