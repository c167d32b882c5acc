//! Reveal targets of the page
//!
//! Positions are offsets inside each fixed-height section, matching the
//! section views in `ui::sections`.

use std::time::Instant;

use grantline_core::content::{SectionId, SiteContent};
use grantline_core::layout::PageLayout;
use grantline_core::reveal::{Animation, RevealId, RevealTarget, RevealTracker, ScrollAnimator};

/// Vertical pitch of FAQ rows (collapsed)
pub const FAQ_ROW_PITCH: f32 = 76.0;

/// Per-entry stagger of cards and FAQ rows
const STAGGER_MS: u64 = 100;

fn target(
    layout: &PageLayout,
    section: SectionId,
    local_top: f32,
    height: f32,
    animation: Animation,
) -> RevealTarget {
    RevealTarget::new(layout.offset_of(section) + local_top, height, animation)
}

/// Every animated element on the page and the tracker that drives them
#[derive(Debug, Clone)]
pub struct PageReveals {
    tracker: RevealTracker,
    pub hero_badge: RevealId,
    pub hero_headline: RevealId,
    pub hero_subheading: RevealId,
    pub hero_actions: RevealId,
    pub problem_icon: RevealId,
    pub problem_headline: RevealId,
    pub problem_body: RevealId,
    pub problem_stats: RevealId,
    pub demo_copy: RevealId,
    pub demo_player: RevealId,
    pub features_eyebrow: RevealId,
    pub features_headline: RevealId,
    pub feature_cards: Vec<RevealId>,
    pub pricing_card: RevealId,
    pub faq_eyebrow: RevealId,
    pub faq_headline: RevealId,
    pub faq_entries: Vec<RevealId>,
}

impl PageReveals {
    pub fn new(layout: &PageLayout, content: &SiteContent) -> Self {
        use Animation::*;
        use SectionId::*;

        let mut tracker = RevealTracker::new();
        let mut add = |t: RevealTarget| tracker.register(t);

        let hero_badge = add(target(layout, Hero, 200.0, 32.0, FadeUp));
        let hero_headline = add(target(layout, Hero, 256.0, 150.0, FadeUp).with_delay_ms(100));
        let hero_subheading = add(target(layout, Hero, 430.0, 60.0, FadeUp).with_delay_ms(200));
        let hero_actions = add(target(layout, Hero, 520.0, 60.0, FadeUp).with_delay_ms(300));

        let problem_icon = add(target(layout, Problem, 80.0, 64.0, FadeUp));
        let problem_headline = add(target(layout, Problem, 168.0, 48.0, FadeUp));
        let problem_body = add(target(layout, Problem, 236.0, 60.0, FadeUp).with_delay_ms(100));
        let problem_stats = add(target(layout, Problem, 340.0, 120.0, ZoomIn));

        let demo_copy = add(target(layout, Demo, 96.0, 420.0, FadeRight));
        let demo_player = add(target(layout, Demo, 96.0, 420.0, FadeLeft));

        let features_eyebrow = add(target(layout, Features, 80.0, 20.0, FadeUp));
        let features_headline = add(target(layout, Features, 108.0, 48.0, FadeUp));
        let feature_cards = (0..content.features.items.len())
            .map(|idx| {
                add(target(layout, Features, 220.0, 260.0, FadeUp).with_delay_ms(idx as u64 * STAGGER_MS))
            })
            .collect();

        let pricing_card = add(target(layout, Pricing, 80.0, 620.0, FlipUp));

        let faq_eyebrow = add(target(layout, Faq, 80.0, 20.0, FadeUp));
        let faq_headline = add(target(layout, Faq, 108.0, 48.0, FadeUp));
        let faq_entries = (0..content.faq.entries.len())
            .map(|idx| {
                let top = 220.0 + idx as f32 * FAQ_ROW_PITCH;
                add(target(layout, Faq, top, FAQ_ROW_PITCH, FadeUp).with_delay_ms(idx as u64 * STAGGER_MS))
            })
            .collect();

        log::debug!("PageReveals: registered {} elements", tracker.len());

        Self {
            tracker,
            hero_badge,
            hero_headline,
            hero_subheading,
            hero_actions,
            problem_icon,
            problem_headline,
            problem_body,
            problem_stats,
            demo_copy,
            demo_player,
            features_eyebrow,
            features_headline,
            feature_cards,
            pricing_card,
            faq_eyebrow,
            faq_headline,
            faq_entries,
        }
    }

    pub fn tracker(&self) -> &RevealTracker {
        &self.tracker
    }

    /// The engine as seen by the page-load routine
    pub fn animator(&mut self) -> &mut dyn ScrollAnimator {
        &mut self.tracker
    }

    pub fn on_viewport(&mut self, scroll_y: f32, viewport_height: f32, now: Instant) {
        self.tracker.set_viewport_at(scroll_y, viewport_height, now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.tracker.is_animating(now)
    }
}
