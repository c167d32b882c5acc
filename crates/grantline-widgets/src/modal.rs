//! Modal overlay and dialog frame
//!
//! The overlay stacks a dimmed backdrop and a centered dialog above the page.
//! The backdrop swallows pointer input, so the page behind cannot be clicked
//! or scrolled while a dialog is open.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, scrollable, stack, text, Space};
use iced::{Color, Element, Length, Padding};

use crate::theme;

/// Dialog width in pixels
pub const DIALOG_WIDTH: f32 = 760.0;

/// Maximum height of the scrollable dialog body
pub const DIALOG_BODY_HEIGHT: f32 = 520.0;

/// Semi-transparent backdrop that closes the modal on click
fn backdrop<'a, Message: Clone + 'a>(close_message: Message) -> Element<'a, Message> {
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
                ..Default::default()
            }),
    )
    .on_press(close_message)
    .into()
}

/// Wrap `base` with a backdrop and `modal_content` centered above it
///
/// ```ignore
/// with_modal_overlay(page, dialog("Privacy Policy", body, Message::CloseModal), Message::CloseModal)
/// ```
pub fn with_modal_overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    modal_content: Element<'a, Message>,
    close_message: Message,
) -> Element<'a, Message> {
    let modal = center(opaque(modal_content))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![base, opaque(backdrop(close_message)), modal].into()
}

/// Dialog frame: title with a close glyph, scrollable body, Close button
pub fn dialog<'a, Message: Clone + 'a>(
    title: &'a str,
    body: Element<'a, Message>,
    on_close: Message,
) -> Element<'a, Message> {
    let close_glyph = button(text("×").size(22))
        .on_press(on_close.clone())
        .style(theme::link_button);

    let header = row![
        text(title).size(24).color(Color::WHITE),
        Space::new().width(Length::Fill),
        close_glyph,
    ]
    .align_y(iced::Alignment::Center);

    let footer = row![
        Space::new().width(Length::Fill),
        button(text("Close").size(14))
            .on_press(on_close)
            .padding([10, 24])
            .style(theme::primary_button),
    ];

    container(
        column![
            header,
            scrollable(container(body).padding(Padding {
                right: 12.0,
                ..Padding::ZERO
            }))
                .height(Length::Fixed(DIALOG_BODY_HEIGHT)),
            footer,
        ]
        .spacing(20)
        .padding(28),
    )
    .width(Length::Fixed(DIALOG_WIDTH))
    .style(theme::card)
    .into()
}
