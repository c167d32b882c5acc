//! Grantline Core - Shared library for the GrantStudios landing page
//!
//! - [`transport`]: the simulated call-recording player behind the demo
//! - [`content`]: page copy as typed, overridable data
//! - [`reveal`]: animate-on-scroll engine and its capability trait
//! - [`layout`]: fixed desktop page geometry
//! - [`config`]: YAML configuration I/O

pub mod config;
pub mod content;
pub mod layout;
pub mod reveal;
pub mod transport;

pub use content::{SectionId, SiteContent};
pub use transport::{PlaybackState, Transport, TransportConfig, TransportController, TransportEvent};
