// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! Connects one [`AsyncDecoder`] to the UI event loop. Every message is tagged
//! with the playback session id so the viewer can ignore events from a session
//! it has already abandoned.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent, StreamInfo, VideoSource};
use iced::futures::SinkExt;
use iced::stream;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Subscription ID for video playback.
/// Each playback session gets a unique ID so the subscription is recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoPlaybackId(u64);

/// Handle for sending commands to the decoder from the UI.
#[derive(Clone)]
pub struct DecoderCommandSender {
    video_tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    /// Sender plus the receiving end the playback loop forwards from.
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (video_tx, video_rx) = mpsc::unbounded_channel();
        (Self { video_tx }, video_rx)
    }

    /// Sends a command to the video decoder.
    pub fn send(&self, command: DecoderCommand) -> Result<(), String> {
        self.video_tx
            .send(command)
            .map_err(|_| "Video decoder not running".to_string())
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.video_tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Subscription started, provides the command sender.
    Started(DecoderCommandSender),

    /// Input opened: data is loaded and playback can start.
    Loaded(StreamInfo),

    /// A new frame is ready for display.
    FrameReady {
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
        pts_secs: f64,
    },

    /// Decoder is waiting for data.
    Buffering,

    /// Frames flow again after buffering.
    Playing,

    /// Playback reached the end.
    EndOfStream,

    /// Playback failed.
    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::Loaded(info) => PlaybackMessage::Loaded(info),
            DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
                pts_secs: frame.pts_secs,
            },
            DecoderEvent::Buffering => PlaybackMessage::Buffering,
            DecoderEvent::Playing => PlaybackMessage::Playing,
            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
            DecoderEvent::Error(msg) => PlaybackMessage::Error(msg),
        }
    }
}

/// A playback message tagged with the session that produced it.
#[derive(Debug, Clone)]
pub struct PlaybackEvent {
    pub session: u64,
    pub message: PlaybackMessage,
}

/// Creates a video playback subscription for one session.
///
/// The subscription first emits `Started` with a command sender, then forwards
/// decoder events. Dropping the subscription (or every clone of the sender)
/// stops the decoder.
pub fn video_playback(source: VideoSource, session_id: u64) -> iced::Subscription<PlaybackEvent> {
    iced::Subscription::run_with((VideoPlaybackId(session_id), source), |(id, source)| {
        let session_id = id.0;
        let source = source.clone();
        stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<PlaybackEvent>| async move {
            let tag = |message| PlaybackEvent {
                session: session_id,
                message,
            };

            match AsyncDecoder::new(&source) {
                Ok(mut decoder) => {
                    let (sender, mut external_cmd_rx) = DecoderCommandSender::channel();
                    let _ = output.send(tag(PlaybackMessage::Started(sender))).await;

                    loop {
                        tokio::select! {
                            command = external_cmd_rx.recv() => {
                                let Some(command) = command else {
                                    // UI dropped its sender: the session is over
                                    let _ = decoder.send_command(DecoderCommand::Stop);
                                    break;
                                };
                                if decoder.send_command(command).is_err() {
                                    break;
                                }
                            }
                            event = decoder.recv_event() => {
                                let Some(event) = event else {
                                    break;
                                };
                                let is_error = matches!(event, DecoderEvent::Error(_));
                                let _ = output.send(tag(event.into())).await;
                                if is_error {
                                    break;
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::debug!(source = %source, error = %e, "decoder not started");
                    let _ = output.send(tag(PlaybackMessage::Error(e.to_string()))).await;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        })
    })
}
