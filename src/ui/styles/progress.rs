// SPDX-License-Identifier: MPL-2.0
//! Progress bar style.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::progress_bar;
use iced::{Background, Border, Theme};

/// Brand-filled bar on a muted track. Turns gold once complete.
pub fn bar(complete: bool) -> impl Fn(&Theme) -> progress_bar::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let fill = if complete {
            scheme.accent
        } else {
            scheme.brand_primary
        };

        progress_bar::Style {
            background: Background::Color(scheme.surface_secondary),
            bar: Background::Color(fill),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
        }
    }
}
