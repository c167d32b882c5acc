//! Footer: brand, contact details, legal links, copyright

use grantline_core::content::{SectionId, SiteContent};
use grantline_widgets::theme;
use iced::widget::{button, column, container, row, rule, text};
use iced::{Alignment, Color, Element, Length};

use super::{section, BOLD};
use crate::ui::message::Message;
use crate::ui::state::LegalModal;

fn column_title<'a>(label: &'a str) -> Element<'a, Message> {
    text(label.to_uppercase())
        .size(14)
        .font(BOLD)
        .color(Color::WHITE)
        .into()
}

fn social_button<'a>(glyph: &'a str, url: &'a str) -> Element<'a, Message> {
    button(text(glyph).size(16).center())
        .width(40)
        .height(40)
        .on_press(Message::ExternalLink(url.to_string()))
        .style(theme::outline_button)
        .into()
}

fn contact_line<'a>(glyph: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        text(glyph).size(15).color(theme::BRAND_ORANGE),
        text(value).size(15).color(theme::SLATE_400),
    ]
    .spacing(12)
    .into()
}

fn legal_link<'a>(label: &'a str, modal: LegalModal) -> Element<'a, Message> {
    button(text(label).size(15))
        .padding(0)
        .on_press(Message::OpenLegal(modal))
        .style(theme::link_button)
        .into()
}

pub fn view(content: &SiteContent, year: i32) -> Element<'_, Message> {
    let company = &content.company;

    let brand = column![
        row![
            text("◆").size(22).color(theme::BRAND_ORANGE),
            text(&company.name).size(24).font(BOLD).color(Color::WHITE),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text(&company.tagline).size(15).color(theme::SLATE_400),
        row![
            social_button("𝕏", &content.social.twitter),
            social_button("in", &content.social.linkedin),
        ]
        .spacing(12),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    let contact = column![
        column_title("Contact"),
        contact_line("✉", &company.email),
        contact_line("✆", &company.phone),
        contact_line("⌖", &company.location),
    ]
    .spacing(12)
    .width(Length::FillPortion(1));

    let legal = column![
        column_title("Legal"),
        legal_link(&content.privacy.title, LegalModal::Privacy),
        legal_link(&content.terms.title, LegalModal::Terms),
    ]
    .spacing(12)
    .width(Length::FillPortion(1));

    let copyright = container(
        text(company.copyright_line(year))
            .size(13)
            .color(theme::SLATE_500),
    )
    .center_x(Length::Fill);

    let body = column![
        row![brand, contact, legal].spacing(48),
        rule::horizontal(1),
        copyright,
    ]
    .spacing(32)
    .padding([48, 0]);

    section(SectionId::Footer, theme::SLATE_950, body)
}
