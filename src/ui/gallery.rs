// SPDX-License-Identifier: MPL-2.0
//! Card grid: one clickable card per memory, in id order.
//!
//! Cards fade in one after another. [`Entrance::restart`] hides them all and
//! hands out a generation; each [`Message::CardEntered`] for that generation
//! shows one more card, and steps from an older generation are ignored.

use crate::catalog::{Catalog, MemoryId, MemoryRecord};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, Column, Row};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenMemory(MemoryId),
    /// Entrance step elapsed for the given generation.
    CardEntered(u64),
}

#[derive(Debug, Clone, Default)]
pub struct Entrance {
    generation: u64,
    entered: usize,
}

impl Entrance {
    /// Hides every card and starts a new entrance.
    pub fn restart(&mut self) -> u64 {
        self.generation += 1;
        self.entered = 0;
        self.generation
    }

    /// Shows the next of `total` cards. Returns whether any are still hidden.
    pub fn advance(&mut self, generation: u64, total: usize) -> bool {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale card entrance");
            return false;
        }
        self.entered = (self.entered + 1).min(total);
        self.entered < total
    }

    /// Whether the card at `position` (0-based, grid order) has entered.
    #[must_use]
    pub fn is_entered(&self, position: usize) -> bool {
        position < self.entered
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entrance: &'a Entrance,
}

/// Heading, total count and the full grid, rebuilt from `catalog` each call.
pub fn view<'a>(catalog: &'a Catalog, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let entrance = ctx.entrance;

    let heading = column![
        text(i18n.tr("gallery-title")).size(typography::TITLE_LG),
        text(i18n.tr_with_args(
            "gallery-memory-count",
            &[("count", catalog.len().into())]
        ))
        .size(typography::BODY),
    ]
    .spacing(spacing::XXS)
    .align_x(Alignment::Center);

    let records: Vec<(usize, &MemoryRecord)> = catalog.iter().enumerate().collect();
    let rows = records.chunks(sizing::GRID_COLUMNS).map(|chunk| {
        Element::from(
            Row::with_children(chunk.iter().copied().map(|(position, record)| {
                memory_card(record, entrance.is_entered(position), i18n)
            }))
            .spacing(spacing::LG),
        )
    });

    column![
        container(heading).center_x(Length::Fill),
        container(Column::with_children(rows).spacing(spacing::LG)).center_x(Length::Fill),
    ]
    .spacing(spacing::XL)
    .into()
}

fn memory_card<'a>(record: &'a MemoryRecord, entered: bool, i18n: &I18n) -> Element<'a, Message> {
    let icon = container(
        text(record.icon.glyph())
            .size(typography::TITLE_MD)
            .shaping(text::Shaping::Advanced),
    )
    .center(Length::Fixed(sizing::ICON_XL))
    .style(styles::container::icon_disc);

    let mut content = column![
        icon,
        text(record.title.as_str()).size(typography::TITLE_SM),
        text(i18n.tr("gallery-card-prompt")).size(typography::CAPTION),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    if record.is_viewed() {
        content = content.push(
            container(text(i18n.tr("gallery-viewed-badge")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::viewed_badge),
        );
    }

    button(container(content).center(Length::Fill))
        .on_press(Message::OpenMemory(record.id))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::button::memory_card(record.is_viewed(), entered))
        .into()
}
