//! Page lifecycle: load, scroll, resize, animation frames

use std::time::Instant;

use grantline_core::reveal::page_load;
use iced::{Size, Task};

use super::super::app::SiteApp;
use super::super::message::Message;
use super::navigation::scroll_page_to;

impl SiteApp {
    /// Hand the reveal configuration to the animator once the page exists
    pub fn handle_page_loaded(&mut self) -> Task<Message> {
        let now = Instant::now();
        self.frame_now = now;
        let viewport = self.nav.viewport();
        self.reveals.on_viewport(self.nav.scroll_y(), viewport.height, now);
        page_load(self.reveals.animator(), &self.config.reveal);
        Task::none()
    }

    /// Scroll events feed the navbar and the reveal engine
    ///
    /// Ignored while a legal modal is open: the page behind it stays put.
    pub fn handle_page_scrolled(&mut self, offset_y: f32, viewport_height: f32) -> Task<Message> {
        if self.legal.blocks_page_scroll() {
            log::trace!("Page scroll ignored while a modal is open");
            return Task::none();
        }
        let now = Instant::now();
        self.frame_now = now;
        self.nav.on_scrolled(offset_y, viewport_height);
        self.reveals.on_viewport(self.nav.scroll_y(), viewport_height, now);
        Task::none()
    }

    pub fn handle_window_resized(&mut self, size: Size) -> Task<Message> {
        log::debug!("Window resized to {}x{}", size.width, size.height);
        self.frame_now = Instant::now();
        self.nav.on_resized(size);
        self.reveals.on_viewport(self.nav.scroll_y(), size.height, self.frame_now);
        self.reveals.animator().refresh();
        Task::none()
    }

    /// Advance every time-based animation to `now`
    pub fn handle_frame(&mut self, now: Instant) -> Task<Message> {
        self.frame_now = now;
        self.demo.frame(now);
        if self.legal.blocks_page_scroll() {
            return Task::none();
        }
        match self.nav.scroll_frame(now) {
            Some(offset_y) => scroll_page_to(offset_y),
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::ui::state::LegalModal;
    use grantline_core::content::{SectionId, SiteContent};

    fn app() -> SiteApp {
        SiteApp::new(SiteConfig::default(), SiteContent::default()).0
    }

    #[test]
    fn test_page_load_initializes_reveals() {
        let mut app = app();
        assert!(!app.reveals.tracker().is_initialized());
        let _ = app.update(Message::PageLoaded);
        assert!(app.reveals.tracker().is_initialized());
        assert!(app.reveals.tracker().is_revealed(app.reveals.hero_badge));
        assert!(!app.reveals.tracker().is_revealed(app.reveals.pricing_card));
    }

    #[test]
    fn test_scroll_updates_navbar() {
        let mut app = app();
        let _ = app.update(Message::PageScrolled {
            offset_y: 300.0,
            viewport_height: 860.0,
        });
        assert!(app.nav.is_scrolled());
        assert_eq!(app.nav.scroll_y(), 300.0);
    }

    #[test]
    fn test_modal_blocks_page_scroll() {
        let mut app = app();
        let _ = app.update(Message::OpenLegal(LegalModal::Terms));
        let _ = app.update(Message::PageScrolled {
            offset_y: 900.0,
            viewport_height: 860.0,
        });
        assert_eq!(app.nav.scroll_y(), 0.0);

        let _ = app.update(Message::CloseLegal);
        let _ = app.update(Message::PageScrolled {
            offset_y: 900.0,
            viewport_height: 860.0,
        });
        assert_eq!(app.nav.scroll_y(), 900.0);
    }

    #[test]
    fn test_resize_refreshes_reveals() {
        let mut app = app();
        let _ = app.update(Message::PageLoaded);
        assert!(!app.reveals.tracker().is_revealed(app.reveals.problem_icon));

        // A taller window brings the problem section into view
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 1400.0)));
        assert!(app.reveals.tracker().is_revealed(app.reveals.problem_icon));
        assert_eq!(app.nav.viewport().height, 1400.0);
    }

    #[test]
    fn test_frames_drive_smooth_scroll() {
        let mut app = app();
        let _ = app.update(Message::Navigate(format!("#{}", SectionId::Faq.anchor())));
        assert!(app.nav.is_smooth_scrolling());

        let later = Instant::now() + crate::ui::state::SMOOTH_SCROLL_DURATION * 2;
        let _ = app.update(Message::Frame(later));
        assert!(!app.nav.is_smooth_scrolling());
        assert_eq!(app.frame_now, later);
    }
}
