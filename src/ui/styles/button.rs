// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (reset, open letter, play).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let (background, shadow) = match status {
        button::Status::Hovered => (scheme.brand_secondary, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..scheme.brand_primary
            },
            shadow::NONE,
        ),
        button::Status::Active | button::Status::Pressed => (scheme.brand_primary, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: scheme.brand_secondary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// A memory card in the grid. Viewed cards carry a brand-colored border.
pub fn memory_card(viewed: bool, entered: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered);
        let alpha = if entered {
            opacity::OPAQUE
        } else {
            opacity::HIDDEN_CARD
        };
        let border_color = if viewed || hovered {
            scheme.brand_primary
        } else {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.text_secondary
            }
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..scheme.surface_secondary
            })),
            text_color: Color {
                a: alpha,
                ..scheme.text_primary
            },
            border: Border {
                color: Color {
                    a: border_color.a * alpha,
                    ..border_color
                },
                width: if viewed { 2.0 } else { 1.0 },
                radius: radius::LG.into(),
            },
            shadow: if !entered {
                shadow::NONE
            } else if hovered {
                shadow::LG
            } else {
                shadow::SM
            },
            snap: true,
        }
    }
}

/// The final card: gold border, faded until its entrance animation ran.
pub fn final_card(animated: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let alpha = if animated {
            opacity::OPAQUE
        } else {
            opacity::HIDDEN_CARD
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..scheme.surface_secondary
            })),
            text_color: Color {
                a: alpha,
                ..scheme.text_primary
            },
            border: Border {
                color: Color {
                    a: alpha,
                    ..scheme.accent
                },
                width: 2.0,
                radius: radius::LG.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) && animated {
                shadow::LG
            } else {
                shadow::MD
            },
            snap: true,
        }
    }
}

/// Round control drawn over dark overlays (close, mute).
pub fn overlay(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: scheme.overlay_text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);
        let scheme = ColorScheme::for_theme(&theme);

        assert_eq!(style.background, Some(Background::Color(scheme.brand_primary)));
    }

    #[test]
    fn viewed_card_has_thicker_border() {
        let theme = Theme::Light;
        let viewed = memory_card(true, true)(&theme, button::Status::Active);
        let unviewed = memory_card(false, true)(&theme, button::Status::Active);
        assert!(viewed.border.width > unviewed.border.width);
    }

    #[test]
    fn memory_card_faded_until_entered() {
        let theme = Theme::Light;
        let waiting = memory_card(false, false)(&theme, button::Status::Active);
        let entered = memory_card(false, true)(&theme, button::Status::Active);
        assert!(waiting.text_color.a < entered.text_color.a);
        assert_eq!(waiting.shadow, shadow::NONE);
    }

    #[test]
    fn final_card_fades_until_animated() {
        let theme = Theme::Dark;
        let before = final_card(false)(&theme, button::Status::Active);
        let after = final_card(true)(&theme, button::Status::Active);
        assert!(before.text_color.a < after.text_color.a);
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let normal = overlay(&theme, button::Status::Active);
        let hover = overlay(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
