// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed from native events; video playback and the
//! loading spinner only subscribe while the viewer needs them.

use super::Message;
use crate::ui::memory_viewer;
use crate::video_player;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Spinner animation interval (~60 FPS).
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Escape dismisses the top overlay; Ctrl+Shift+R resets viewed memories.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return None;
        };
        shortcut_message(&key, modifiers)
    })
}

fn shortcut_message(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::EscapePressed),
        keyboard::Key::Character(c)
            if modifiers.control() && modifiers.shift() && c.as_str().eq_ignore_ascii_case("r") =>
        {
            Some(Message::ResetRequested)
        }
        _ => None,
    }
}

/// Decoder subscription for the viewer's current playback session.
///
/// The subscription id is the session id: a new session replaces the old
/// decoder, and no session means no decoder.
pub fn create_video_subscription(viewer: &memory_viewer::State) -> Subscription<Message> {
    match viewer.playback_session() {
        Some((session_id, source)) => video_player::video_playback(source.clone(), session_id)
            .map(|event| Message::Viewer(memory_viewer::Message::Playback(event))),
        None => Subscription::none(),
    }
}

pub fn create_spinner_subscription(viewer: &memory_viewer::State) -> Subscription<Message> {
    if viewer.shows_spinner() {
        time::every(SPINNER_TICK).map(|_| Message::Viewer(memory_viewer::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
