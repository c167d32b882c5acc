//! Privacy policy / terms of service modal body

use grantline_core::content::{Company, LegalDocument};
use grantline_widgets::{dialog, theme};
use iced::widget::{column, row, text};
use iced::{Color, Element, Length};

use super::BOLD;
use crate::ui::message::Message;

/// Dialog for `document`, with company placeholders filled in
pub fn view<'a>(document: &'a LegalDocument, company: &Company) -> Element<'a, Message> {
    let sections = document.sections.iter().map(|legal| -> Element<'a, Message> {
        let mut block = column![text(company.render(&legal.heading))
            .size(18)
            .font(BOLD)
            .color(Color::WHITE)]
        .spacing(10);

        if !legal.body.is_empty() {
            block = block.push(text(company.render(&legal.body)).size(15).color(theme::SLATE_300));
        }

        for item in &legal.items {
            let mut entry = column![].spacing(2).width(Length::Fill);
            if let Some(label) = &item.label {
                entry = entry.push(text(company.render(label)).size(15).font(BOLD).color(Color::WHITE));
            }
            entry = entry.push(text(company.render(&item.text)).size(15).color(theme::SLATE_300));
            block = block.push(row![text("•").size(15).color(theme::BRAND_ORANGE), entry].spacing(10));
        }

        block.into()
    });

    dialog(
        &document.title,
        column(sections).spacing(28).into(),
        Message::CloseLegal,
    )
}
