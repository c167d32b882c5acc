//! Problem statement with the three stats

use grantline_core::content::{ProblemContent, SectionId};
use grantline_widgets::theme;
use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{body, heading, section, BOLD};
use crate::ui::message::Message;
use crate::ui::reveal::RevealView;
use crate::ui::state::PageReveals;

pub fn view<'a>(
    problem: &'a ProblemContent,
    reveals: &PageReveals,
    reveal: RevealView<'_>,
) -> Element<'a, Message> {
    let backdrop = theme::SLATE_950;

    let icon = container(text("✆").size(30).color(theme::LIVE_RED))
        .center(Length::Fixed(64.0))
        .style(theme::pill(theme::with_alpha(theme::LIVE_RED, 0.1)));

    let stats = row(problem.stats.iter().map(|stat| -> Element<'a, Message> {
        container(
            column![
                text(&stat.value).size(32).font(BOLD).color(theme::LIVE_RED),
                text(&stat.label).size(14).color(theme::SLATE_400),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .padding(24)
        .center_x(Length::FillPortion(1))
        .style(theme::card)
        .into()
    }))
    .spacing(24)
    .width(Length::Fill);

    let content = column![
        Space::new().height(80),
        reveal.wrap(reveals.problem_icon, icon, backdrop),
        Space::new().height(24),
        reveal.wrap(reveals.problem_headline, heading(&problem.headline), backdrop),
        Space::new().height(20),
        reveal.wrap(
            reveals.problem_body,
            container(body(&problem.body, 20).center().width(Length::Fill)).max_width(760.0),
            backdrop
        ),
        Space::new().height(48),
        reveal.wrap(reveals.problem_stats, stats, backdrop),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    section(SectionId::Problem, backdrop, content)
}
