//! Fixed navigation bar with the compact-window menu

use grantline_core::content::SiteContent;
use grantline_core::layout::NAVBAR_HEIGHT;
use grantline_widgets::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Theme, Vector};

use super::{BOLD, CONTENT_MAX_WIDTH, GUTTER};
use crate::ui::message::Message;
use crate::ui::state::NavState;

/// Transparent over the hero, solid once the page has scrolled
fn bar_style(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        if scrolled {
            container::Style {
                background: Some(Background::Color(theme::with_alpha(theme::SLATE_900, 0.92))),
                border: Border {
                    color: theme::with_alpha(Color::WHITE, 0.05),
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 16.0,
                },
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}

fn cta_button<'a>(content: &'a SiteContent) -> button::Button<'a, Message> {
    button(text(&content.nav_cta.label).size(14).font(BOLD))
        .padding([10, 20])
        .on_press(Message::Navigate(content.nav_cta.href.clone()))
        .style(theme::primary_button)
}

pub fn view<'a>(content: &'a SiteContent, nav: &NavState) -> Element<'a, Message> {
    let logo = button(
        row![
            text("◆").size(22).color(theme::BRAND_ORANGE),
            text(&content.company.name).size(24).font(BOLD).color(Color::WHITE),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(0)
    .on_press(Message::ScrollToTop)
    .style(theme::link_button);

    let active = nav.active_section();
    let mut bar = row![logo, Space::new().width(Length::Fill)]
        .spacing(8)
        .align_y(Alignment::Center);

    if nav.is_compact() {
        bar = bar.push(
            button(text(if nav.menu_open() { "✕" } else { "☰" }).size(22))
                .on_press(Message::ToggleMenu)
                .style(theme::link_button),
        );
    } else {
        for link in &content.nav_links {
            let style = if link.target() == Some(active) {
                theme::active_link_button
            } else {
                theme::link_button
            };
            bar = bar.push(
                button(text(&link.label).size(15))
                    .padding([8, 12])
                    .on_press(Message::Navigate(link.href.clone()))
                    .style(style),
            );
        }
        bar = bar.push(Space::new().width(16));
        bar = bar.push(cta_button(content));
    }

    let bar = container(
        container(bar)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .center_x(Length::Fill)
    .padding([0, GUTTER])
    .center_y(Length::Fixed(NAVBAR_HEIGHT))
    .style(bar_style(nav.is_scrolled() || nav.menu_open()));

    if !(nav.is_compact() && nav.menu_open()) {
        return bar.into();
    }

    let mut menu = column![].spacing(4).padding([8, GUTTER]);
    for link in &content.nav_links {
        menu = menu.push(
            button(text(&link.label).size(17))
                .width(Length::Fill)
                .padding([10, 12])
                .on_press(Message::Navigate(link.href.clone()))
                .style(theme::link_button),
        );
    }
    menu = menu.push(cta_button(content).width(Length::Fill));

    column![
        bar,
        container(menu)
            .width(Length::Fill)
            .padding(iced::Padding {
                bottom: 12.0,
                ..iced::Padding::ZERO
            })
            .style(theme::section(theme::with_alpha(theme::SLATE_900, 0.96))),
    ]
    .into()
}
