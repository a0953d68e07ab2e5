// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes and system theme detection.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub accent: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::CREAM_50,
            surface_secondary: palette::CREAM_100,

            text_primary: palette::PLUM_900,
            text_secondary: palette::TAUPE_700,

            brand_primary: palette::ROSE_500,
            brand_secondary: palette::ROSE_600,
            accent: palette::GOLD_500,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::PLUM_900,
            surface_secondary: palette::PLUM_800,

            text_primary: palette::CREAM_50,
            text_secondary: palette::CREAM_200,

            brand_primary: palette::ROSE_400,
            brand_secondary: palette::ROSE_500,
            accent: palette::GOLD_400,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching the active iced theme, for use inside style functions.
    #[must_use]
    pub fn for_theme(theme: &iced::Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Built-in iced theme matching the effective mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
