//! Desktop page geometry
//!
//! Sections have fixed heights so anchor navigation and reveal triggers can
//! be computed without measuring rendered widgets.

use crate::content::SectionId;

/// Height of the fixed navigation bar
pub const NAVBAR_HEIGHT: f32 = 72.0;

/// Scroll distance after which the navbar switches to its solid style
pub const NAVBAR_SCROLL_THRESHOLD: f32 = 20.0;

/// Fixed height of each section
pub fn section_height(section: SectionId) -> f32 {
    match section {
        SectionId::Hero => 760.0,
        SectionId::Problem => 600.0,
        SectionId::Demo => 640.0,
        SectionId::Features => 600.0,
        SectionId::Pricing => 780.0,
        // Room for the question list plus one open answer
        SectionId::Faq => 760.0,
        SectionId::Footer => 320.0,
    }
}

/// Whether the navbar should use its solid "scrolled" style
pub fn navbar_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Cumulative section offsets for the whole page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    offsets: [f32; SectionId::COUNT],
    total_height: f32,
}

impl PageLayout {
    pub fn new() -> Self {
        let mut offsets = [0.0; SectionId::COUNT];
        let mut y = 0.0;
        for section in SectionId::ALL {
            offsets[section.index()] = y;
            y += section_height(section);
        }
        Self {
            offsets,
            total_height: y,
        }
    }

    /// Distance from the page top to the section's top edge
    pub fn offset_of(&self, section: SectionId) -> f32 {
        self.offsets[section.index()]
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Scroll offset that brings the section to the top of the viewport,
    /// clamped so the page never over-scrolls
    pub fn scroll_target(&self, section: SectionId, viewport_height: f32) -> f32 {
        let max_scroll = (self.total_height - viewport_height).max(0.0);
        self.offset_of(section).min(max_scroll)
    }

    /// Section under the navbar at the given scroll offset
    pub fn section_at(&self, scroll_y: f32) -> SectionId {
        let probe = scroll_y.max(0.0) + NAVBAR_HEIGHT;
        SectionId::ALL
            .into_iter()
            .rev()
            .find(|section| self.offset_of(*section) <= probe)
            .unwrap_or(SectionId::Hero)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_accumulate() {
        let layout = PageLayout::new();
        assert_eq!(layout.offset_of(SectionId::Hero), 0.0);
        assert_eq!(layout.offset_of(SectionId::Problem), 760.0);
        assert_eq!(layout.offset_of(SectionId::Demo), 1_360.0);
        let sum: f32 = SectionId::ALL.iter().map(|s| section_height(*s)).sum();
        assert_eq!(layout.total_height(), sum);
    }

    #[test]
    fn test_scroll_target_clamped() {
        let layout = PageLayout::new();
        assert_eq!(layout.scroll_target(SectionId::Demo, 800.0), 1_360.0);
        let max = layout.total_height() - 800.0;
        assert_eq!(layout.scroll_target(SectionId::Footer, 800.0), max);
    }

    #[test]
    fn test_section_at() {
        let layout = PageLayout::new();
        assert_eq!(layout.section_at(0.0), SectionId::Hero);
        assert_eq!(layout.section_at(layout.offset_of(SectionId::Demo)), SectionId::Demo);
        assert_eq!(
            layout.section_at(layout.offset_of(SectionId::Demo) - NAVBAR_HEIGHT - 1.0),
            SectionId::Problem
        );
    }

    #[test]
    fn test_navbar_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(20.0));
        assert!(navbar_scrolled(20.5));
    }
}
