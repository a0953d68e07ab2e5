// SPDX-License-Identifier: MPL-2.0
//! Modal layout: title bar, video area with status overlay, controls, note.

use super::state::{Message, Phase, State};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette::WHITE, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, scrollable, stack, text,
};
use iced::{Alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Builds the modal, or `None` while the viewer is closed.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let details = state.details()?;
    let i18n = ctx.i18n;

    let close = button(text("✕").size(typography::BODY_LG))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(styles::button::overlay);

    let header = row![
        text(details.title.as_str())
            .size(typography::TITLE_MD)
            .width(Length::Fill),
        close,
    ]
    .align_y(Alignment::Center)
    .spacing(spacing::SM);

    let mut body = column![header, video_area(state, i18n)].spacing(spacing::MD);

    if let Some(controls) = controls(state, i18n) {
        body = body.push(controls);
    }
    if let Some(date) = &details.date {
        body = body.push(text(date.as_str()).size(typography::CAPTION));
    }
    body = body.push(scrollable(text(details.note.as_str()).size(typography::BODY)).height(Length::Shrink));

    let content = container(body)
        .padding(spacing::LG)
        .max_width(sizing::MODAL_WIDTH)
        .style(styles::container::panel);

    let modal = mouse_area(
        center(opaque(content))
            .padding(spacing::XL)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropClicked);

    Some(opaque(modal))
}

fn video_area<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.frame() {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text("").into(),
    };

    let screen = container(picture)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_VIDEO_HEIGHT))
        .style(styles::overlay::video_frame);

    let mut layers = stack![screen].width(Length::Fill);

    if let Some(key) = state.indicator_key() {
        let mut status = column![].spacing(spacing::XS).align_x(Alignment::Center);
        if state.shows_spinner() {
            status = status.push(AnimatedSpinner::new(WHITE, state.spinner_rotation()).into_element());
        }
        status = status.push(text(i18n.tr(key)).size(typography::BODY));
        if state.is_retrying() {
            status = status.push(text(i18n.tr("viewer-trying-fallback")).size(typography::CAPTION));
        }

        let indicator = container(status)
            .padding(spacing::SM)
            .style(styles::overlay::indicator(state.phase() == Phase::Error));
        layers = layers.push(center(indicator));
    }

    layers.into()
}

fn controls<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    if state.phase() != Phase::Playing {
        return None;
    }

    let play_label = if state.is_paused() {
        i18n.tr("viewer-play")
    } else {
        i18n.tr("viewer-pause")
    };
    let mute_label = if state.is_muted() {
        i18n.tr("viewer-unmute")
    } else {
        i18n.tr("viewer-mute")
    };

    let time = match state.duration_secs() {
        Some(duration) => format!(
            "{} / {}",
            format_timestamp(state.position_secs()),
            format_timestamp(duration)
        ),
        None => format_timestamp(state.position_secs()),
    };

    Some(
        row![
            button(text(play_label))
                .on_press(Message::TogglePlayback)
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary),
            button(text(mute_label))
                .on_press(Message::ToggleMute)
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::overlay),
            text(time).size(typography::CAPTION),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into(),
    )
}

/// `m:ss`, or `h:mm:ss` past an hour.
#[must_use]
pub fn format_timestamp(secs: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
