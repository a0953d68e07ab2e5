// SPDX-License-Identifier: MPL-2.0
//! Viewed-count text and completion bar.

use crate::gallery::Progress;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, progress_bar, text};
use iced::{Alignment, Element, Length};

/// Localized "5 of 6 memories relived (83%)".
#[must_use]
pub fn label(progress: Progress, i18n: &I18n) -> String {
    i18n.tr_with_args(
        "progress-label",
        &[
            ("viewed", progress.viewed.into()),
            ("total", progress.total.into()),
            ("percent", progress.display_percent().into()),
        ],
    )
}

pub fn view<'a, Message: 'a>(progress: Progress, i18n: &I18n) -> Element<'a, Message> {
    let bar = progress_bar(0.0..=100.0, progress.percentage())
        .style(styles::progress::bar(progress.is_complete()));

    column![
        text(label(progress, i18n)).size(typography::BODY),
        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROGRESS_HEIGHT)),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center)
    .max_width(sizing::CARD_WIDTH * 2.0)
    .into()
}
