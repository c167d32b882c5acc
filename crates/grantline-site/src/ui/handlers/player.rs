//! Demo player handlers
//!
//! The transport is ticked by `time::every` while it is advancing; the
//! subscription disappears on the next `subscription()` call after a pause
//! or completion, which is what cancels the timer.

use grantline_core::transport::TransportEvent;
use iced::Task;

use super::super::app::SiteApp;
use super::super::message::Message;

impl SiteApp {
    pub fn handle_toggle_playback(&mut self) -> Task<Message> {
        let event = self.demo.toggle();
        let state = self.demo.playback();
        log::info!("Demo player: {:?} at {:.1}s", event, state.elapsed);
        Task::none()
    }

    pub fn handle_transport_tick(&mut self, generation: u64) -> Task<Message> {
        match self.demo.tick(generation) {
            TransportEvent::Completed => log::info!("Demo player: call finished, rewound"),
            // Queued before a pause or restart
            TransportEvent::Ignored => log::trace!("Demo player: stale tick ignored"),
            _ => {}
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SiteConfig;
    use crate::ui::app::SiteApp;
    use crate::ui::message::Message;
    use grantline_core::content::SiteContent;
    use grantline_core::transport::{PlaybackState, TransportConfig};

    fn app_with(transport: TransportConfig) -> SiteApp {
        let config = SiteConfig {
            transport,
            ..SiteConfig::default()
        };
        SiteApp::new(config, SiteContent::default()).0
    }

    #[test]
    fn test_play_tick_pause() {
        let mut app = app_with(TransportConfig::default());
        let _ = app.update(Message::TogglePlayback);
        for _ in 0..3 {
            let _ = app.update(Message::TransportTick(app.demo.generation()));
        }
        assert_eq!(app.demo.playback().elapsed, 1.5);

        let _ = app.update(Message::TogglePlayback);
        let _ = app.update(Message::TransportTick(app.demo.generation()));
        assert_eq!(
            app.demo.playback(),
            PlaybackState {
                is_playing: false,
                elapsed: 1.5,
                duration: 45.0
            }
        );
    }

    #[test]
    fn test_boundary_rewinds() {
        let mut app = app_with(TransportConfig {
            duration_secs: 2.0,
            ..TransportConfig::default()
        });
        let _ = app.update(Message::TogglePlayback);
        for _ in 0..4 {
            let _ = app.update(Message::TransportTick(app.demo.generation()));
        }
        assert_eq!(app.demo.playback(), PlaybackState::stopped(2.0));
    }
}
