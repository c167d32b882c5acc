//! FAQ accordion

use grantline_core::content::{FaqContent, SectionId};
use grantline_widgets::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length};

use super::{body, eyebrow, heading, section, BOLD};
use crate::ui::message::Message;
use crate::ui::reveal::RevealView;
use crate::ui::state::{FaqState, PageReveals};

pub fn view<'a>(
    faq: &'a FaqContent,
    state: &FaqState,
    reveals: &PageReveals,
    reveal: RevealView<'_>,
) -> Element<'a, Message> {
    let backdrop = theme::SLATE_950;

    let entries = column(faq.entries.iter().enumerate().map(
        |(idx, entry)| -> Element<'a, Message> {
            let open = state.is_open(idx);

            let question = button(
                row![
                    text(&entry.question).size(18).font(BOLD).color(Color::WHITE),
                    Space::new().width(Length::Fill),
                    text(if open { "⌃" } else { "⌄" })
                        .size(20)
                        .color(theme::BRAND_ORANGE),
                ]
                .align_y(Alignment::Center),
            )
            .padding([20, 24])
            .width(Length::Fill)
            .on_press(Message::ToggleFaq(idx))
            .style(theme::link_button);

            let mut item = column![question];
            if open {
                item = item.push(container(body(&entry.answer, 16)).padding([0, 24]));
                item = item.push(Space::new().height(24));
            }

            let item = container(item).width(Length::Fill).style(theme::card);
            match reveals.faq_entries.get(idx) {
                Some(id) => reveal.wrap(*id, item, backdrop),
                None => item.into(),
            }
        },
    ))
    .spacing(16)
    .max_width(900.0);

    let content = column![
        Space::new().height(80),
        reveal.wrap(reveals.faq_eyebrow, eyebrow(&faq.eyebrow), backdrop),
        Space::new().height(8),
        reveal.wrap(reveals.faq_headline, heading(&faq.headline), backdrop),
        Space::new().height(64),
        entries,
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    section(SectionId::Faq, backdrop, content)
}
