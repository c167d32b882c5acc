//! Anchor navigation

use std::time::Instant;

use grantline_core::content::SectionId;
use iced::widget::scrollable;
use iced::Task;

use super::super::app::{SiteApp, PAGE_SCROLL_ID};
use super::super::message::Message;

/// Task that moves the page scrollable to an absolute offset
pub fn scroll_page_to(offset_y: f32) -> Task<Message> {
    let offset = scrollable::AbsoluteOffset { x: 0.0, y: offset_y };
    iced::advanced::widget::operate(iced::advanced::widget::operation::scrollable::scroll_to(
        PAGE_SCROLL_ID.clone().into(),
        offset.into(),
    ))
}

impl SiteApp {
    /// Follow an in-page link
    ///
    /// Unknown anchors (the strategy-call CTA) do nothing except close the
    /// mobile menu.
    pub fn handle_navigate(&mut self, href: &str) -> Task<Message> {
        match SectionId::from_href(href) {
            Some(section) => self.start_smooth_scroll(section),
            None => {
                log::debug!("Navigate: '{}' has no section on this page", href);
                self.nav.close_menu();
                Task::none()
            }
        }
    }

    /// Logo click
    pub fn handle_scroll_to_top(&mut self) -> Task<Message> {
        self.start_smooth_scroll(SectionId::Hero)
    }

    fn start_smooth_scroll(&mut self, section: SectionId) -> Task<Message> {
        if self.legal.blocks_page_scroll() {
            return Task::none();
        }
        let now = Instant::now();
        if self.nav.start_scroll_to(section, now) {
            // Frames take over from here
            self.frame_now = now;
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

    fn app() -> SiteApp {
        SiteApp::new(SiteConfig::default(), SiteContent::default()).0
    }

    #[test]
    fn test_nav_links_start_smooth_scroll() {
        let mut app = app();
        let links = app.content.nav_links.clone();
        for link in links {
            let _ = app.update(Message::Navigate(link.href.clone()));
            assert!(app.nav.is_smooth_scrolling(), "{}", link.href);
        }
    }

    #[test]
    fn test_cta_anchor_is_inert_and_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::ToggleMenu);
        assert!(app.nav.menu_open());

        let href = app.content.nav_cta.href.clone();
        let _ = app.update(Message::Navigate(href));
        assert!(!app.nav.is_smooth_scrolling());
        assert!(!app.nav.menu_open());
    }

    #[test]
    fn test_scroll_to_top_from_top_is_noop() {
        let mut app = app();
        let _ = app.update(Message::ScrollToTop);
        assert!(!app.nav.is_smooth_scrolling());
    }
}
