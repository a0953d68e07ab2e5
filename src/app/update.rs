// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler mutates the gallery controller and turns the resulting
//! [`Effect`] into an Iced task.

use super::Message;
use crate::config::CARD_ENTRANCE_STEP_MS;
use crate::gallery::{Effect, Gallery};
use crate::ui::{final_reveal, gallery, memory_viewer};
use iced::Task;
use std::time::Duration;

/// Mutable state the handlers work on.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub reveal_delay: Duration,
}

/// Runs a controller effect: the reveal animation fires after `delay`, the
/// next card entrance after a fixed step.
pub fn effect_task(effect: Effect, delay: Duration) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::ScheduleRevealAnimation(generation) => Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                generation
            },
            |generation| Message::Reveal(final_reveal::Message::Animate(generation)),
        ),
        Effect::ScheduleCardEntrance(generation) => Task::perform(
            async move {
                tokio::time::sleep(Duration::from_millis(CARD_ENTRANCE_STEP_MS)).await;
                generation
            },
            |generation| Message::Gallery(gallery::Message::CardEntered(generation)),
        ),
    }
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::OpenMemory(id) => {
            let effect = ctx.gallery.open(id);
            effect_task(effect, ctx.reveal_delay)
        }
        gallery::Message::CardEntered(generation) => {
            let effect = ctx.gallery.handle_card_entered(generation);
            effect_task(effect, ctx.reveal_delay)
        }
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: memory_viewer::Message,
) -> Task<Message> {
    match ctx.gallery.handle_viewer(message) {
        memory_viewer::Effect::Closed => {
            tracing::debug!("memory viewer closed");
        }
        memory_viewer::Effect::FallbackStarted | memory_viewer::Effect::None => {}
    }
    Task::none()
}

pub fn handle_reveal_message(
    ctx: &mut UpdateContext<'_>,
    message: final_reveal::Message,
) -> Task<Message> {
    ctx.gallery.handle_reveal(message);
    Task::none()
}

pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.gallery.dismiss_top_overlay();
    Task::none()
}

pub fn handle_reset(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let effect = ctx.gallery.reset_viewed_state();
    let entrance = ctx.gallery.start_card_entrance();
    Task::batch([
        effect_task(effect, ctx.reveal_delay),
        effect_task(entrance, ctx.reveal_delay),
    ])
}
