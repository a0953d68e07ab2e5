// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop, video frame and status indicators.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer covering the page while a modal is open.
pub fn backdrop(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.overlay_background)),
        text_color: Some(scheme.overlay_text),
        ..Default::default()
    }
}

/// Black area the video frame is letterboxed in.
pub fn video_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Loading/error text drawn over the video area.
pub fn indicator(error: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let border_color = if error {
            scheme.error
        } else {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            }
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..BLACK
            })),
            text_color: Some(WHITE),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_indicator_uses_error_border() {
        let theme = Theme::Dark;
        let style = indicator(true)(&theme);
        assert_eq!(style.border.color, ColorScheme::for_theme(&theme).error);
    }

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background: {other:?}"),
        }
    }
}
