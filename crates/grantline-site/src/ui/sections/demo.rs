//! Demo: pitch copy beside the simulated call player

use grantline_core::content::{DemoContent, SectionId};
use grantline_widgets::{demo_player, theme};
use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{body, heading, section};
use crate::ui::message::Message;
use crate::ui::reveal::RevealView;
use crate::ui::state::{DemoState, PageReveals};

pub fn view<'a>(
    demo: &'a DemoContent,
    state: &DemoState,
    reveals: &PageReveals,
    reveal: RevealView<'_>,
) -> Element<'a, Message> {
    let backdrop = theme::SLATE_900;

    let bullets = column(demo.bullets.iter().map(|bullet| -> Element<'a, Message> {
        row![
            text("✓").size(18).color(theme::BRAND_BLUE),
            text(bullet).size(17).color(theme::SLATE_300),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(16);

    let copy = column![heading(&demo.headline), body(&demo.body, 20), bullets]
        .spacing(28)
        .width(Length::FillPortion(1));

    let player = container(demo_player::view(
        state.player(),
        state.playback(),
        &demo.player_title,
        &demo.player_subtitle,
        Message::TogglePlayback,
    ))
    .width(Length::FillPortion(1));

    let content = column![
        Space::new().height(96),
        row![
            reveal.wrap(reveals.demo_copy, copy, backdrop),
            reveal.wrap(reveals.demo_player, player, backdrop),
        ]
        .spacing(64)
        .align_y(Alignment::Center),
    ];

    section(SectionId::Demo, backdrop, content)
}
