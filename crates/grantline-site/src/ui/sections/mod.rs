//! Page sections, top to bottom
//!
//! Every section renders into a container of its fixed layout height so
//! anchor offsets and reveal triggers line up with what is drawn.

pub mod demo;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod legal;
pub mod navbar;
pub mod pricing;
pub mod problem;

use grantline_core::content::SectionId;
use grantline_core::layout::section_height;
use grantline_widgets::theme;
use iced::widget::{container, text, Text};
use iced::{font, Color, Element, Font, Length};

use super::message::Message;

/// Widest the page content gets on large windows
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

/// Horizontal page gutter
pub const GUTTER: u16 = 32;

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub const EXTRA_BOLD: Font = Font {
    weight: font::Weight::ExtraBold,
    ..Font::DEFAULT
};

/// Fixed-height, full-width band with centered content
pub fn section<'a>(
    id: SectionId,
    background: Color,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(section_height(id)))
    .padding([0, GUTTER])
    .clip(true)
    .style(theme::section(background))
    .into()
}

/// Small blue uppercase label above a heading
pub fn eyebrow<'a>(label: &str) -> Text<'a> {
    text(label.to_uppercase())
        .size(14)
        .font(BOLD)
        .color(theme::BRAND_BLUE)
}

/// Section heading
pub fn heading<'a>(label: &'a str) -> Text<'a> {
    text(label).size(44).font(BOLD).color(Color::WHITE)
}

/// Muted body copy
pub fn body<'a>(label: &'a str, size: u32) -> Text<'a> {
    text(label).size(size).color(theme::SLATE_400)
}
