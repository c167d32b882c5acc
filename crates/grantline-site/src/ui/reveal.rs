//! Reveal rendering
//!
//! iced has no per-widget opacity, so an element fades by drawing a veil of
//! the section background over it while it slides into place.

use std::time::Instant;

use grantline_core::reveal::{RevealId, RevealTracker};
use grantline_widgets::theme;
use iced::widget::{container, stack, Space};
use iced::{Color, Element, Length, Padding};

use super::message::Message;

/// Inset (pixels per side) of a zoomed-in element at its smallest
const ZOOM_INSET_PX: f32 = 60.0;

/// Reveal state of the page at the current frame
#[derive(Clone, Copy)]
pub struct RevealView<'t> {
    tracker: &'t RevealTracker,
    now: Instant,
}

impl<'t> RevealView<'t> {
    pub fn new(tracker: &'t RevealTracker, now: Instant) -> Self {
        Self { tracker, now }
    }

    /// Wrap `content` so it slides and fades according to its reveal progress
    pub fn wrap<'a>(
        &self,
        id: RevealId,
        content: impl Into<Element<'a, Message>>,
        backdrop: Color,
    ) -> Element<'a, Message> {
        let progress = self.tracker.progress(id, self.now);
        if progress >= 1.0 {
            return content.into();
        }

        let animation = self.tracker.animation(id);
        let (dx, dy) = animation.translation(progress);
        let inset = (1.0 - animation.scale(progress)) * ZOOM_INSET_PX;
        let shifted: Element<'a, Message> = container(content)
            .padding(Padding {
                top: dy.max(0.0) + inset,
                bottom: (-dy).max(0.0) + inset,
                left: dx.max(0.0) + inset,
                right: (-dx).max(0.0) + inset,
            })
            .into();
        let size = shifted.as_widget().size_hint();

        let veil = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::fill(theme::with_alpha(backdrop, 1.0 - progress), 0.0));

        stack![shifted, veil]
            .width(size.width)
            .height(size.height)
            .into()
    }
}
