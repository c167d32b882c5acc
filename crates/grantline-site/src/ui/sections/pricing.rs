//! Pricing card

use grantline_core::content::{PricingContent, SectionId};
use grantline_widgets::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length};

use super::{section, BOLD, EXTRA_BOLD};
use crate::ui::message::Message;
use crate::ui::reveal::RevealView;
use crate::ui::state::PageReveals;

pub fn view<'a>(
    pricing: &'a PricingContent,
    reveals: &PageReveals,
    reveal: RevealView<'_>,
) -> Element<'a, Message> {
    let backdrop = theme::SLATE_900;

    // First inclusion is the headline perk
    let inclusions = column(pricing.inclusions.iter().enumerate().map(
        |(idx, item)| -> Element<'a, Message> {
            let (check, label) = if idx == 0 {
                (
                    text("✓").size(16).color(theme::CHECK_GREEN),
                    text(item).size(16).font(BOLD).color(theme::BRAND_ORANGE),
                )
            } else {
                (
                    text("✓").size(16).color(theme::BRAND_BLUE),
                    text(item).size(16).color(theme::SLATE_300),
                )
            };
            row![check, label].spacing(12).into()
        },
    ))
    .spacing(16);

    let badge = container(text(pricing.badge.to_uppercase()).size(12).font(BOLD))
        .padding([4, 12])
        .style(theme::pill(theme::BRAND_ORANGE));

    // The trial button has no destination on this page
    let cta = button(text(&pricing.cta).size(18).font(BOLD).center().width(Length::Fill))
        .padding([16, 0])
        .width(Length::Fill)
        .style(theme::primary_button);

    let card = container(
        column![
            row![Space::new().width(Length::Fill), badge],
            text(&pricing.plan_name).size(26).font(BOLD).color(Color::WHITE),
            row![
                text(&pricing.price).size(56).font(EXTRA_BOLD).color(Color::WHITE),
                text(&pricing.period).size(20).color(theme::SLATE_400),
            ]
            .spacing(8)
            .align_y(Alignment::End),
            inclusions,
            cta,
            text(&pricing.guarantee)
                .size(13)
                .color(theme::SLATE_500)
                .center()
                .width(Length::Fill),
        ]
        .spacing(24)
        .padding(40),
    )
    .width(Length::Fixed(520.0))
    .style(theme::highlighted_card);

    let content = column![
        Space::new().height(80),
        reveal.wrap(reveals.pricing_card, card, backdrop),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    section(SectionId::Pricing, backdrop, content)
}
