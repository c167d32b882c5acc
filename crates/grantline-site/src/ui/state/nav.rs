//! Navigation bar and page scroll state

use std::time::{Duration, Instant};

use grantline_core::content::SectionId;
use grantline_core::layout::{navbar_scrolled, PageLayout};
use grantline_core::reveal::Easing;
use iced::Size;

/// Length of an animated anchor jump
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Below this window width the nav links collapse into the menu toggle
pub const COMPACT_WIDTH: f32 = 768.0;

/// An in-flight smooth scroll between two page offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
}

impl ScrollAnimation {
    pub fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * Easing::EaseInOutQuad.apply(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SMOOTH_SCROLL_DURATION
    }
}

#[derive(Debug, Clone)]
pub struct NavState {
    layout: PageLayout,
    scroll_y: f32,
    viewport: Size,
    menu_open: bool,
    smooth_scroll: Option<ScrollAnimation>,
}

impl NavState {
    pub fn new(viewport: Size) -> Self {
        Self {
            layout: PageLayout::new(),
            scroll_y: 0.0,
            viewport,
            menu_open: false,
            smooth_scroll: None,
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Solid navbar once the page has moved
    pub fn is_scrolled(&self) -> bool {
        navbar_scrolled(self.scroll_y)
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.width < COMPACT_WIDTH
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> SectionId {
        self.layout.section_at(self.scroll_y)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record a scroll reported by the page
    pub fn on_scrolled(&mut self, scroll_y: f32, viewport_height: f32) {
        self.scroll_y = scroll_y.max(0.0);
        self.viewport.height = viewport_height;
    }

    pub fn on_resized(&mut self, size: Size) {
        self.viewport = size;
        if !self.is_compact() {
            self.menu_open = false;
        }
    }

    /// Begin a smooth scroll to `section`; closes the menu
    ///
    /// Returns `false` when the page is already there.
    pub fn start_scroll_to(&mut self, section: SectionId, now: Instant) -> bool {
        self.menu_open = false;
        let to = self.layout.scroll_target(section, self.viewport.height);
        let from = self
            .smooth_scroll
            .map(|animation| animation.offset_at(now))
            .unwrap_or(self.scroll_y);

        if (to - from).abs() < 0.5 {
            self.smooth_scroll = None;
            return false;
        }

        log::debug!("NavState: scrolling to {:?} ({:.0} -> {:.0})", section, from, to);
        self.smooth_scroll = Some(ScrollAnimation {
            from,
            to,
            started: now,
        });
        true
    }

    /// Offset the page should be at for this frame, if a smooth scroll is running
    pub fn scroll_frame(&mut self, now: Instant) -> Option<f32> {
        let animation = self.smooth_scroll?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.smooth_scroll = None;
        }
        Some(offset)
    }

    /// Stop a running smooth scroll where it is
    pub fn cancel_smooth_scroll(&mut self) {
        if self.smooth_scroll.take().is_some() {
            log::debug!("NavState: smooth scroll cancelled at {:.0}", self.scroll_y);
        }
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth_scroll.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavState {
        NavState::new(Size::new(1280.0, 860.0))
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = nav();
        assert!(!nav.is_scrolled());
        nav.on_scrolled(20.0, 860.0);
        assert!(!nav.is_scrolled());
        nav.on_scrolled(21.0, 860.0);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut nav = NavState::new(Size::new(600.0, 860.0));
        assert!(nav.is_compact());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.start_scroll_to(SectionId::Pricing, Instant::now());
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_widening_window_closes_menu() {
        let mut nav = NavState::new(Size::new(600.0, 860.0));
        nav.toggle_menu();
        nav.on_resized(Size::new(1280.0, 860.0));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut nav = nav();
        let start = Instant::now();
        assert!(nav.start_scroll_to(SectionId::Demo, start));
        let target = nav.layout().offset_of(SectionId::Demo);

        let midway = nav.scroll_frame(start + SMOOTH_SCROLL_DURATION / 2).unwrap();
        assert!(midway > 0.0 && midway < target);
        assert!(nav.is_smooth_scrolling());

        let end = nav.scroll_frame(start + SMOOTH_SCROLL_DURATION).unwrap();
        assert_eq!(end, target);
        assert!(!nav.is_smooth_scrolling());
        assert_eq!(nav.scroll_frame(start + SMOOTH_SCROLL_DURATION * 2), None);
    }

    #[test]
    fn test_cancel_stops_smooth_scroll() {
        let mut nav = nav();
        let start = Instant::now();
        assert!(nav.start_scroll_to(SectionId::Pricing, start));

        nav.cancel_smooth_scroll();
        assert!(!nav.is_smooth_scrolling());
        assert_eq!(nav.scroll_frame(start + SMOOTH_SCROLL_DURATION / 2), None);
        assert_eq!(nav.scroll_y(), 0.0);
    }

    #[test]
    fn test_scroll_to_current_position_is_noop() {
        let mut nav = nav();
        assert!(!nav.start_scroll_to(SectionId::Hero, Instant::now()));
        assert!(!nav.is_smooth_scrolling());
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut nav = nav();
        let faq = nav.layout().offset_of(SectionId::Faq);
        nav.on_scrolled(faq, 860.0);
        assert_eq!(nav.active_section(), SectionId::Faq);
    }
}
