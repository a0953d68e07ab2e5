// SPDX-License-Identifier: MPL-2.0
//! Root view: the scrollable page with overlays stacked on top.

use super::Message;
use crate::gallery::Gallery;
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::{final_reveal, gallery, memory_viewer, progress, styles};
use iced::widget::{column, container, scrollable, stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
}

/// Page first, then the letter, then the video modal. The overlays are opaque
/// to the mouse, which keeps the page from scrolling underneath them.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let controller = ctx.gallery;
    let reveal_ctx = final_reveal::ViewContext {
        i18n,
        letter: controller.catalog().letter(),
    };

    let mut page = column![
        progress::view(controller.progress(), i18n),
        gallery::view(
            controller.catalog(),
            &gallery::ViewContext {
                i18n,
                entrance: controller.entrance(),
            },
        )
        .map(Message::Gallery),
    ]
    .spacing(spacing::XL)
    .align_x(iced::Alignment::Center);

    if let Some(card) = final_reveal::card(controller.reveal(), &reveal_ctx) {
        page = page.push(card.map(Message::Reveal));
    }

    let base = container(scrollable(
        container(page).padding(spacing::XL).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let mut layers = stack![base].width(Length::Fill).height(Length::Fill);

    if controller.background_scroll_locked() {
        if let Some(letter) = final_reveal::letter(controller.reveal(), &reveal_ctx) {
            layers = layers.push(letter.map(Message::Reveal));
        }
        if let Some(modal) =
            memory_viewer::view(controller.viewer(), memory_viewer::ViewContext { i18n })
        {
            layers = layers.push(modal.map(Message::Viewer));
        }
    }

    layers.into()
}
