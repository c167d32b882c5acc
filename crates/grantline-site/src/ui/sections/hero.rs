//! Hero: badge, headline, calls to action

use grantline_core::content::{HeroContent, SectionId};
use grantline_widgets::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length};

use super::{section, EXTRA_BOLD};
use crate::ui::message::Message;
use crate::ui::reveal::RevealView;
use crate::ui::state::PageReveals;

pub fn view<'a>(
    hero: &'a HeroContent,
    reveals: &PageReveals,
    reveal: RevealView<'_>,
) -> Element<'a, Message> {
    let backdrop = theme::SLATE_900;

    let badge = container(
        text(hero.badge.to_uppercase())
            .size(13)
            .color(theme::BRAND_ORANGE),
    )
    .padding([6, 16])
    .style(theme::pill(theme::with_alpha(theme::BRAND_ORANGE, 0.1)));

    let headline = column![
        text(&hero.headline).size(64).font(EXTRA_BOLD).color(Color::WHITE),
        text(&hero.headline_accent)
            .size(64)
            .font(EXTRA_BOLD)
            .color(theme::BRAND_ORANGE),
    ]
    .align_x(Alignment::Center)
    .spacing(4);

    let subheading = container(
        text(&hero.subheading)
            .size(20)
            .color(theme::SLATE_400)
            .center()
            .width(Length::Fill),
    )
    .max_width(720.0);

    let actions = row![
        button(text(&hero.primary_cta.label).size(18))
            .padding([16, 32])
            .on_press(Message::Navigate(hero.primary_cta.href.clone()))
            .style(theme::primary_button),
        button(text(&hero.secondary_cta.label).size(18))
            .padding([16, 32])
            .on_press(Message::Navigate(hero.secondary_cta.href.clone()))
            .style(theme::outline_button),
    ]
    .spacing(16);

    let content = column![
        Space::new().height(200),
        reveal.wrap(reveals.hero_badge, badge, backdrop),
        Space::new().height(24),
        reveal.wrap(reveals.hero_headline, headline, backdrop),
        Space::new().height(24),
        reveal.wrap(reveals.hero_subheading, subheading, backdrop),
        Space::new().height(32),
        reveal.wrap(reveals.hero_actions, actions, backdrop),
        Space::new().height(Length::Fill),
        text("⌄").size(28).color(theme::SLATE_500),
        Space::new().height(40),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    section(SectionId::Hero, backdrop, content)
}
