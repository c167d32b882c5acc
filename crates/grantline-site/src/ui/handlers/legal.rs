//! Legal modal handlers

use iced::Task;

use super::super::app::SiteApp;
use super::super::message::Message;
use super::super::state::LegalModal;

impl SiteApp {
    pub fn handle_open_legal(&mut self, modal: LegalModal) -> Task<Message> {
        log::debug!("Opening {:?} modal", modal);
        self.nav.close_menu();
        self.nav.cancel_smooth_scroll();
        self.legal.open(modal);
        Task::none()
    }

    pub fn handle_close_legal(&mut self) -> Task<Message> {
        self.legal.close();
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SiteConfig;
    use crate::ui::app::SiteApp;
    use crate::ui::message::Message;
    use crate::ui::state::LegalModal;
    use grantline_core::content::SiteContent;
    use std::time::{Duration, Instant};

    #[test]
    fn test_open_and_close() {
        let (mut app, _) = SiteApp::new(SiteConfig::default(), SiteContent::default());
        let _ = app.update(Message::OpenLegal(LegalModal::Privacy));
        assert_eq!(app.legal.current(), Some(LegalModal::Privacy));
        let _ = app.update(Message::CloseLegal);
        assert_eq!(app.legal.current(), None);
    }

    #[test]
    fn test_navigation_blocked_while_open() {
        let (mut app, _) = SiteApp::new(SiteConfig::default(), SiteContent::default());
        let _ = app.update(Message::OpenLegal(LegalModal::Terms));
        let _ = app.update(Message::Navigate("#pricing".to_string()));
        assert!(!app.nav.is_smooth_scrolling());
    }

    #[test]
    fn test_opening_modal_stops_running_anchor_scroll() {
        let (mut app, _) = SiteApp::new(SiteConfig::default(), SiteContent::default());
        let _ = app.update(Message::Navigate("#faq".to_string()));
        assert!(app.nav.is_smooth_scrolling());

        let _ = app.update(Message::OpenLegal(LegalModal::Privacy));
        assert!(!app.nav.is_smooth_scrolling());

        let later = Instant::now() + Duration::from_millis(300);
        assert_eq!(app.nav.scroll_frame(later), None);
        let _ = app.update(Message::Frame(later));
        assert_eq!(app.nav.scroll_y(), 0.0);
    }
}
