//! Brand palette and shared styles
//!
//! Dark slate page with an orange/red accent, matching the GrantStudios
//! marketing material.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary accent (#F97316)
pub const BRAND_ORANGE: Color = Color::from_rgb8(249, 115, 22);
/// Gradient partner of the accent (#DC2626)
pub const BRAND_RED: Color = Color::from_rgb8(220, 38, 38);
/// Secondary accent used for eyebrows (#3B82F6)
pub const BRAND_BLUE: Color = Color::from_rgb8(59, 130, 246);
/// "Live" indicator red (#EF4444)
pub const LIVE_RED: Color = Color::from_rgb8(239, 68, 68);
/// Check marks on the pricing card (#22C55E)
pub const CHECK_GREEN: Color = Color::from_rgb8(34, 197, 94);

pub const SLATE_950: Color = Color::from_rgb8(2, 6, 23);
pub const SLATE_900: Color = Color::from_rgb8(15, 23, 42);
pub const SLATE_800: Color = Color::from_rgb8(30, 41, 59);
pub const SLATE_700: Color = Color::from_rgb8(51, 65, 85);
pub const SLATE_600: Color = Color::from_rgb8(71, 85, 105);
pub const SLATE_500: Color = Color::from_rgb8(100, 116, 139);
pub const SLATE_400: Color = Color::from_rgb8(148, 163, 184);
pub const SLATE_300: Color = Color::from_rgb8(203, 213, 225);
pub const SLATE_200: Color = Color::from_rgb8(226, 232, 240);

/// Same color with a different alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Blend two colors (t = 0.0 → `from`, 1.0 → `to`)
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

/// Full-width section background
pub fn section(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(SLATE_200),
        ..Default::default()
    }
}

/// Rounded card on a slate page
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(SLATE_900, 0.8))),
        border: Border {
            color: SLATE_800,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Card with an accent border and glow (pricing card, playing demo player)
pub fn highlighted_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SLATE_800)),
        border: Border {
            color: with_alpha(BRAND_ORANGE, 0.5),
            width: 2.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(BRAND_ORANGE, 0.35),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 40.0,
        },
        ..Default::default()
    }
}

/// Small rounded badge
pub fn pill(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Solid block of color (progress fill, waveform bars, dots)
pub fn fill(color: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Orange call-to-action button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => mix(BRAND_ORANGE, BRAND_RED, 0.4),
        _ => BRAND_ORANGE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: with_alpha(BRAND_ORANGE, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Outlined secondary button
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(Background::Color(if hovered {
            with_alpha(Color::WHITE, 0.05)
        } else {
            Color::TRANSPARENT
        })),
        text_color: Color::WHITE,
        border: Border {
            color: if hovered { BRAND_ORANGE } else { SLATE_600 },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Text-only button (nav links, footer links, FAQ questions)
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => BRAND_ORANGE,
        _ => SLATE_300,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Nav link for the section currently under the navbar
pub fn active_link_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::WHITE,
        ..Default::default()
    }
}

/// Round play/pause button
pub fn round_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => BRAND_RED,
        _ => BRAND_ORANGE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: with_alpha(BRAND_ORANGE, 0.5),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}
