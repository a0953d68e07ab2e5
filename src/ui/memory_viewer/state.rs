// SPDX-License-Identifier: MPL-2.0
//! Modal video player state machine.
//!
//! ```text
//!            open                Loaded
//!  Closed ─────────▶ Loading ─────────────▶ Playing
//!    ▲                 │  ▲    Buffering       │
//!    │                 │  └────────────────────┘
//!    │ close           │ Error       Error     │
//!    └──── (any) ◀──── ▼ ◀─────────────────────┘
//!                    Error ──Loaded (fallback)──▶ Playing
//! ```
//!
//! Each playback attempt is a session with its own id. The decoder
//! subscription is keyed by that id, so starting a new session (open or
//! fallback) tears down the previous decoder, and events still in flight from
//! an old session are dropped here.

use crate::catalog::{MemoryId, MemoryRecord};
use crate::error::VideoError;
use crate::ui::widgets::animated_spinner;
use crate::video_player::{
    DecoderCommand, DecoderCommandSender, PlaybackEvent, PlaybackMessage, StreamInfo, VideoSource,
};
use iced::widget::image;
use std::sync::Arc;

/// Message key shown while a memory loads.
pub const LOADING_KEY: &str = "viewer-loading";

/// Viewer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Loading,
    Playing,
    Error,
}

/// How playback starts and recovers, taken from `[video]` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackPolicy {
    /// Start muted without user input. When false the autoplay attempt is
    /// treated as rejected and playback waits for the play control, unmuted.
    pub autoplay: bool,
    /// Source substituted once after a playback error.
    pub fallback: Option<VideoSource>,
}

impl Default for PlaybackPolicy {
    fn default() -> Self {
        Self {
            autoplay: true,
            fallback: None,
        }
    }
}

/// Text fields copied from the record when the modal opens.
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub id: MemoryId,
    pub title: String,
    pub note: String,
    pub date: Option<String>,
}

impl From<&MemoryRecord> for Details {
    fn from(record: &MemoryRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            note: record.note.clone(),
            date: record.date.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct Session {
    id: u64,
    source: VideoSource,
    /// Decoder reported its stream; later `Loading` is buffering.
    loaded: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Close button.
    Close,
    /// Click on the dimmed area around the content.
    BackdropClicked,
    TogglePlayback,
    ToggleMute,
    SpinnerTick,
    Playback(PlaybackEvent),
}

/// What the parent must react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The modal closed.
    Closed,
    /// The primary source failed and the fallback is loading.
    FallbackStarted,
}

#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
    policy: PlaybackPolicy,
    details: Option<Details>,
    session: Option<Session>,
    next_session_id: u64,
    fallback_used: bool,
    retrying: bool,
    commands: Option<DecoderCommandSender>,
    muted: bool,
    paused: bool,
    /// Stopped on the last frame; the next play starts over.
    at_end: bool,
    position_secs: f64,
    duration_secs: Option<f64>,
    frame: Option<image::Handle>,
    error: Option<VideoError>,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(policy: PlaybackPolicy) -> Self {
        Self {
            policy,
            paused: true,
            ..Self::default()
        }
    }

    /// Shows `record` and starts a fresh playback session for `source`.
    ///
    /// Any session still running is abandoned; its late events are ignored.
    pub fn open(&mut self, record: &MemoryRecord, source: VideoSource) {
        self.stop_decoder();
        self.details = Some(Details::from(record));
        self.fallback_used = false;
        self.reset_playback();
        self.phase = Phase::Loading;
        self.start_session(source);
        tracing::debug!(memory = %record.id, "memory viewer opened");
    }

    /// Returns to `Closed` from any phase.
    pub fn close(&mut self) {
        if self.phase == Phase::Closed {
            return;
        }
        self.stop_decoder();
        self.session = None;
        self.details = None;
        self.fallback_used = false;
        self.reset_playback();
        self.phase = Phase::Closed;
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Close | Message::BackdropClicked => {
                if self.is_open() {
                    self.close();
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::TogglePlayback => {
                self.toggle_playback();
                Effect::None
            }
            Message::ToggleMute => {
                if self.phase == Phase::Playing {
                    self.muted = !self.muted;
                }
                Effect::None
            }
            Message::SpinnerTick => {
                if self.shows_spinner() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                Effect::None
            }
            Message::Playback(event) => self.handle_playback(event),
        }
    }

    fn handle_playback(&mut self, event: PlaybackEvent) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        if session.id != event.session {
            tracing::trace!(stale = event.session, current = session.id, "dropping stale playback event");
            return Effect::None;
        }

        match event.message {
            PlaybackMessage::Started(sender) => {
                self.commands = Some(sender);
                Effect::None
            }
            PlaybackMessage::Loaded(info) => {
                session.loaded = true;
                self.on_loaded(info);
                Effect::None
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                pts_secs,
            } => {
                let pixels = Arc::try_unwrap(rgba_data).unwrap_or_else(|shared| (*shared).clone());
                self.frame = Some(image::Handle::from_rgba(width, height, pixels));
                self.position_secs = pts_secs;
                Effect::None
            }
            PlaybackMessage::Buffering => {
                if self.phase == Phase::Playing {
                    self.phase = Phase::Loading;
                }
                Effect::None
            }
            PlaybackMessage::Playing => {
                if self.phase == Phase::Loading && session.loaded {
                    self.phase = Phase::Playing;
                }
                Effect::None
            }
            PlaybackMessage::EndOfStream => {
                self.paused = true;
                self.at_end = true;
                if self.phase == Phase::Loading {
                    self.phase = Phase::Playing;
                }
                Effect::None
            }
            PlaybackMessage::Error(message) => self.on_error(&message),
        }
    }

    fn on_loaded(&mut self, info: StreamInfo) {
        self.duration_secs = info.duration_secs;
        self.at_end = false;
        self.error = None;
        self.retrying = false;
        self.phase = Phase::Playing;

        if self.policy.autoplay {
            self.muted = true;
            self.paused = false;
            self.send(DecoderCommand::Play);
        } else {
            // Autoplay rejected: wait for the play control, with sound
            tracing::info!("autoplay disabled, waiting for manual playback");
            self.muted = false;
            self.paused = true;
        }
    }

    fn on_error(&mut self, message: &str) -> Effect {
        let error = VideoError::from_message(message);
        tracing::warn!(error = %error, "memory playback failed");
        self.phase = Phase::Error;
        self.error = Some(error);
        self.retrying = false;
        self.commands = None;
        self.paused = true;

        let current = self.session.as_ref().map(|session| &session.source);
        let fallback = match &self.policy.fallback {
            Some(fallback) if !self.fallback_used && current != Some(fallback) => fallback.clone(),
            _ => return Effect::None,
        };

        tracing::info!(fallback = %fallback, "retrying with fallback video");
        self.fallback_used = true;
        self.retrying = true;
        self.frame = None;
        self.start_session(fallback);
        Effect::FallbackStarted
    }

    fn toggle_playback(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.paused {
            if self.at_end {
                self.at_end = false;
                self.position_secs = 0.0;
                self.send(DecoderCommand::Seek { target_secs: 0.0 });
            }
            self.paused = false;
            self.send(DecoderCommand::Play);
        } else {
            self.paused = true;
            self.send(DecoderCommand::Pause);
        }
    }

    fn start_session(&mut self, source: VideoSource) {
        self.next_session_id += 1;
        self.commands = None;
        self.session = Some(Session {
            id: self.next_session_id,
            source,
            loaded: false,
        });
    }

    fn stop_decoder(&mut self) {
        if let Some(commands) = self.commands.take() {
            let _ = commands.send(DecoderCommand::Stop);
        }
    }

    fn reset_playback(&mut self) {
        self.paused = true;
        self.at_end = false;
        self.muted = false;
        self.position_secs = 0.0;
        self.duration_secs = None;
        self.frame = None;
        self.error = None;
        self.retrying = false;
        self.spinner_rotation = 0.0;
    }

    fn send(&self, command: DecoderCommand) {
        if let Some(commands) = &self.commands {
            if let Err(err) = commands.send(command) {
                tracing::debug!(error = %err, "decoder command dropped");
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    /// Id and source of the session the decoder subscription should run.
    #[must_use]
    pub fn playback_session(&self) -> Option<(u64, &VideoSource)> {
        self.session
            .as_ref()
            .map(|session| (session.id, &session.source))
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        self.error.as_ref()
    }

    /// The fallback clip is loading after an error.
    #[must_use]
    pub fn is_retrying(&self) -> bool {
        self.phase == Phase::Error && self.retrying
    }

    /// Key of the status text over the video area, if any is shown.
    #[must_use]
    pub fn indicator_key(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Loading => Some(LOADING_KEY),
            Phase::Error => self.error.as_ref().map(VideoError::i18n_key),
            Phase::Closed | Phase::Playing => None,
        }
    }

    #[must_use]
    pub fn shows_spinner(&self) -> bool {
        self.phase == Phase::Loading || self.is_retrying()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn fallback_used(&self) -> bool {
        self.fallback_used
    }
}
