//! Application messages

use std::time::Instant;

use iced::Size;

use super::state::LegalModal;

#[derive(Debug, Clone)]
pub enum Message {
    // Page lifecycle
    /// Boot task: hand the reveal configuration to the animator
    PageLoaded,
    /// Page scrollable moved (absolute offset, viewport height)
    PageScrolled { offset_y: f32, viewport_height: f32 },
    WindowResized(Size),
    /// Animation frame (reveals, smooth scroll, waveform)
    Frame(Instant),

    // Navigation
    /// In-page link such as `#pricing`; unknown anchors are inert
    Navigate(String),
    ScrollToTop,
    ToggleMenu,
    /// Link leaving the page (social profiles)
    ExternalLink(String),

    // Demo player
    TogglePlayback,
    /// Tick of the timer started for the given play session
    TransportTick(u64),

    // FAQ
    ToggleFaq(usize),

    // Legal modals
    OpenLegal(LegalModal),
    CloseLegal,
}
