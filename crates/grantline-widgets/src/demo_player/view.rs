//! Demo player view

use grantline_core::transport::PlaybackState;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::state::{DemoPlayerState, BAR_COUNT};
use crate::theme;
use crate::time_format::format_clock;

/// Height of the waveform box in pixels
const WAVEFORM_HEIGHT: f32 = 96.0;
const BAR_WIDTH: f32 = 6.0;
const BAR_SPACING: f32 = 4.0;
const PROGRESS_RESOLUTION: u16 = 1_000;

/// Render the player card
///
/// `on_toggle` is emitted by the play/pause button; the caller forwards it
/// to the transport.
pub fn view<'a, Message: Clone + 'a>(
    player: &DemoPlayerState,
    playback: PlaybackState,
    title: &'a str,
    subtitle: &'a str,
    on_toggle: Message,
) -> Element<'a, Message> {
    let playing = playback.is_playing;

    let header = row![
        column![
            text(title).size(18).color(iced::Color::WHITE),
            text(subtitle).size(13).color(theme::SLATE_400),
        ]
        .spacing(2),
        Space::new().width(Length::Fill),
        status_badge(playing),
    ]
    .align_y(Alignment::Center);

    let controls = row![
        play_button(playing, on_toggle),
        column![
            progress_line(playback.progress_fraction()),
            row![
                text(format_clock(playback.elapsed)).size(12).color(theme::SLATE_400),
                Space::new().width(Length::Fill),
                text(format_clock(playback.duration)).size(12).color(theme::SLATE_400),
            ],
        ]
        .spacing(6)
        .width(Length::Fill),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let card = container(
        column![header, waveform(player, playing), controls]
            .spacing(24)
            .padding(24),
    )
    .width(Length::Fill);

    if playing {
        card.style(theme::highlighted_card).into()
    } else {
        card.style(theme::card).into()
    }
}

fn status_badge<'a, Message: 'a>(playing: bool) -> Element<'a, Message> {
    let (label, dot, background) = if playing {
        ("Live", theme::LIVE_RED, theme::with_alpha(theme::LIVE_RED, 0.15))
    } else {
        ("Ready", theme::SLATE_500, theme::SLATE_800)
    };
    container(
        row![
            container(Space::new().width(8).height(8)).style(theme::fill(dot, 4.0)),
            text(label).size(12).color(theme::SLATE_200),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding([4, 10])
    .style(theme::pill(background))
    .into()
}

fn waveform<'a, Message: 'a>(player: &DemoPlayerState, playing: bool) -> Element<'a, Message> {
    let color = if playing {
        theme::BRAND_ORANGE
    } else {
        theme::SLATE_600
    };
    let bars = (0..BAR_COUNT).map(|idx| -> Element<'a, Message> {
        let height = player.bar_height(idx, playing) * WAVEFORM_HEIGHT;
        container(Space::new().width(BAR_WIDTH).height(height))
            .style(theme::fill(color, 2.0))
            .into()
    });
    container(
        row(bars)
            .spacing(BAR_SPACING)
            .align_y(Alignment::End)
            .height(Length::Fixed(WAVEFORM_HEIGHT)),
    )
    .center_x(Length::Fill)
    .into()
}

fn play_button<'a, Message: Clone + 'a>(playing: bool, on_toggle: Message) -> Element<'a, Message> {
    let glyph = if playing { "❚❚" } else { "▶" };
    button(container(text(glyph).size(20)).center(Length::Fixed(56.0)))
        .on_press(on_toggle)
        .padding(0)
        .style(theme::round_button)
        .into()
}

/// Track, fill and scrubber head built from flex portions
fn progress_line<'a, Message: 'a>(fraction: f64) -> Element<'a, Message> {
    let filled = (fraction.clamp(0.0, 1.0) * PROGRESS_RESOLUTION as f64).round() as u16;
    let remaining = PROGRESS_RESOLUTION - filled;

    let mut line = row![].align_y(Alignment::Center).height(Length::Fixed(12.0));
    if filled > 0 {
        line = line.push(
            container(Space::new().height(4))
                .width(Length::FillPortion(filled))
                .style(theme::fill(theme::BRAND_ORANGE, 2.0)),
        );
    }
    line = line.push(
        container(Space::new().width(12).height(12)).style(theme::fill(iced::Color::WHITE, 6.0)),
    );
    if remaining > 0 {
        line = line.push(
            container(Space::new().height(4))
                .width(Length::FillPortion(remaining))
                .style(theme::fill(theme::SLATE_700, 2.0)),
        );
    }
    line.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone)]
    enum Msg {
        Toggle,
    }

    #[test]
    fn test_view_builds_for_both_states() {
        let player = DemoPlayerState::with_rng(&mut StdRng::seed_from_u64(3));
        let stopped = PlaybackState::stopped(45.0);
        let playing = PlaybackState {
            is_playing: true,
            elapsed: 12.5,
            duration: 45.0,
        };
        let _: Element<'_, Msg> = view(&player, stopped, "Call", "Inbound", Msg::Toggle);
        let _: Element<'_, Msg> = view(&player, playing, "Call", "Inbound", Msg::Toggle);
    }

    #[test]
    fn test_progress_line_extremes() {
        let _: Element<'_, Msg> = progress_line(0.0);
        let _: Element<'_, Msg> = progress_line(1.0);
        let _: Element<'_, Msg> = progress_line(f64::NAN);
    }
}
