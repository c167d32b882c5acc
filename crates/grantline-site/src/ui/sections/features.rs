//! Feature cards

use grantline_core::content::{FeaturesContent, SectionId};
use grantline_widgets::theme;
use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length};

use super::{body, eyebrow, heading, section, BOLD};
use crate::ui::message::Message;
use crate::ui::reveal::RevealView;
use crate::ui::state::PageReveals;

/// Icon glyph and accent per card position
const CARD_ACCENTS: [(&str, Color); 3] = [
    ("⛨", theme::BRAND_ORANGE),
    ("▦", theme::BRAND_BLUE),
    ("✉", theme::CHECK_GREEN),
];

pub fn view<'a>(
    features: &'a FeaturesContent,
    reveals: &PageReveals,
    reveal: RevealView<'_>,
) -> Element<'a, Message> {
    let backdrop = theme::SLATE_900;

    let cards = row(features
        .items
        .iter()
        .enumerate()
        .map(|(idx, feature)| -> Element<'a, Message> {
            let (glyph, accent) = CARD_ACCENTS[idx % CARD_ACCENTS.len()];
            let card = container(
                column![
                    container(text(glyph).size(26).color(accent))
                        .center(Length::Fixed(56.0))
                        .style(theme::fill(theme::SLATE_800, 8.0)),
                    text(&feature.title).size(22).font(BOLD).color(Color::WHITE),
                    body(&feature.description, 16),
                ]
                .spacing(20),
            )
            .padding(32)
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .style(theme::card);

            let card = match reveals.feature_cards.get(idx) {
                Some(id) => reveal.wrap(*id, card, backdrop),
                None => card.into(),
            };
            container(card).width(Length::FillPortion(1)).into()
        }))
    .spacing(32);

    let content = column![
        Space::new().height(80),
        reveal.wrap(reveals.features_eyebrow, eyebrow(&features.eyebrow), backdrop),
        Space::new().height(8),
        reveal.wrap(reveals.features_headline, heading(&features.headline), backdrop),
        Space::new().height(64),
        cards,
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    section(SectionId::Features, backdrop, content)
}
