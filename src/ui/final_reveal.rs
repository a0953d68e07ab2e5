// SPDX-License-Identifier: MPL-2.0
//! The final card that unlocks once every memory was viewed, and the letter
//! it opens.
//!
//! Showing the card and animating it are two steps: [`State::show`] hands out
//! a generation number, and the delayed [`Message::Animate`] only applies if
//! that generation is still current. Hiding the card bumps the generation, so
//! a delay scheduled before a reset is ignored.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, text,
};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    visible: bool,
    animated: bool,
    generation: u64,
    letter_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Delay elapsed for the given generation.
    Animate(u64),
    OpenLetter,
    CloseLetter,
    /// Click outside the letter.
    LetterBackdropClicked,
}

impl State {
    /// Makes the card visible. Returns the generation to animate after the
    /// reveal delay, or `None` when it was already visible.
    pub fn show(&mut self) -> Option<u64> {
        if self.visible {
            return None;
        }
        self.visible = true;
        self.animated = false;
        self.generation += 1;
        Some(self.generation)
    }

    /// Hides the card and the letter, cancelling any pending animation.
    pub fn hide(&mut self) {
        if self.visible {
            self.generation += 1;
        }
        self.visible = false;
        self.animated = false;
        self.letter_open = false;
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Animate(generation) => {
                if self.visible && generation == self.generation {
                    self.animated = true;
                } else {
                    tracing::trace!(generation, current = self.generation, "stale reveal animation");
                }
            }
            Message::OpenLetter => self.open_letter(),
            Message::CloseLetter | Message::LetterBackdropClicked => self.close_letter(),
        }
    }

    pub fn open_letter(&mut self) {
        if self.visible {
            self.letter_open = true;
        }
    }

    pub fn close_letter(&mut self) {
        self.letter_open = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    #[must_use]
    pub fn is_letter_open(&self) -> bool {
        self.letter_open
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Letter from the catalog file; the translated default is used otherwise.
    pub letter: Option<&'a str>,
}

/// The gold card under the grid, when unlocked.
pub fn card<'a>(state: &State, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !state.visible {
        return None;
    }
    let i18n = ctx.i18n;

    let content = column![
        text("✉")
            .size(typography::TITLE_LG)
            .shaping(text::Shaping::Advanced),
        text(i18n.tr("final-card-title")).size(typography::TITLE_MD),
        text(i18n.tr("final-card-subtitle")).size(typography::BODY),
        text(i18n.tr("final-card-button")).size(typography::BODY_LG),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    let card = button(center(content))
        .on_press(Message::OpenLetter)
        .width(Length::Fixed(sizing::CARD_WIDTH * 1.5))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::button::final_card(state.animated));

    Some(container(card).center_x(Length::Fill).into())
}

/// Full-window letter overlay.
pub fn letter<'a>(state: &State, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !state.letter_open {
        return None;
    }
    let i18n = ctx.i18n;
    let body = ctx
        .letter
        .map_or_else(|| i18n.tr("letter-body"), str::to_string);

    let close = button(text("✕").size(typography::BODY_LG))
        .on_press(Message::CloseLetter)
        .padding(spacing::XS)
        .style(styles::button::overlay);

    let content = container(
        column![
            row![
                text(i18n.tr("letter-title"))
                    .size(typography::TITLE_LG)
                    .width(Length::Fill),
                close,
            ]
            .align_y(Alignment::Center),
            scrollable(text(body).size(typography::BODY_LG)),
            text(i18n.tr("letter-signature")).size(typography::TITLE_SM),
        ]
        .spacing(spacing::LG),
    )
    .padding(spacing::XL)
    .max_width(sizing::LETTER_WIDTH)
    .style(styles::container::panel);

    Some(opaque(
        mouse_area(
            center(opaque(content))
                .padding(spacing::XL)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::LetterBackdropClicked),
    ))
}
