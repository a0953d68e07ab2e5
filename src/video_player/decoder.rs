// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! Each decoder runs in its own blocking Tokio task and talks to the UI
//! through channels. After opening the input it reports the stream info,
//! delivers one preview frame, and then waits for commands.

use super::{init_ffmpeg, VideoSource};
use crate::error::{Error, Result, VideoError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Stream properties known once the input is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
    /// Container duration, when the container declares one.
    pub duration_secs: Option<f64>,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    /// Start or resume decoding in real time.
    Play,

    /// Stop sending frames, keeping the current position.
    Pause,

    /// Seek to a timestamp. While paused, one frame is decoded to show it.
    Seek { target_secs: f64 },

    /// Stop decoding and clean up resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// Input opened and the first frame can be decoded.
    Loaded(StreamInfo),

    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// Waiting for data before frames can flow again.
    Buffering,

    /// Frames are flowing again after `Buffering`.
    Playing,

    /// Playback reached the end of the video.
    EndOfStream,

    /// Fatal error: the decoder stops after sending it.
    Error(String),
}

/// Async video decoder that runs in a Tokio blocking task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    /// Bounded so a slow UI applies backpressure instead of queueing frames.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder for the given source.
    ///
    /// Local files are checked for existence up front; everything else is
    /// reported through [`DecoderEvent::Error`].
    pub fn new(source: &VideoSource) -> Result<Self> {
        if let VideoSource::File(path) = source {
            if !path.exists() {
                return Err(Error::Video(VideoError::Unreachable(format!(
                    "Video file not found: {}",
                    path.display()
                ))));
            }
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);
        let source = source.clone();

        // FFmpeg contexts are not Send, so the whole loop lives on one blocking thread
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Self::decoder_loop_blocking(&source, command_rx, &event_tx) {
                tracing::debug!(source = %source, error = %e, "decoder stopped");
                let _ = event_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Io("Decoder task is not running".into()))
    }

    /// Receives the next event, or `None` once the decoder task has ended.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        source: &VideoSource,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: &mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(&source.ffmpeg_input())
            .map_err(|e| Error::Io(format!("Failed to open video: {}", e)))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| Error::Io("No video stream found".to_string()))?;
        let video_stream_index = input.index();
        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| Error::Io(format!("Failed to create codec context: {}", e)))?;
        let mut decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| Error::Io(format!("Failed to create video decoder: {}", e)))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(Error::Io("Invalid video dimensions".to_string()));
        }

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| Error::Io(format!("Failed to create scaler: {}", e)))?;

        // AV_TIME_BASE is microseconds
        let duration_secs = (ictx.duration() > 0).then(|| ictx.duration() as f64 / 1_000_000.0);
        if event_tx
            .blocking_send(DecoderEvent::Loaded(StreamInfo {
                width,
                height,
                duration_secs,
            }))
            .is_err()
        {
            return Ok(());
        }

        let mut is_playing = false;
        let mut playback_start_time: Option<Instant> = None;
        let mut first_pts: Option<f64> = None;
        let mut current_pts_secs: f64 = 0.0;
        // Preview frame first, then after each seek while paused
        let mut decode_single_frame = true;
        let mut awaiting_first_frame = false;

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    if !is_playing && current_pts_secs > 0.0 {
                        let timestamp = (current_pts_secs * 1_000_000.0) as i64;
                        if ictx.seek(timestamp, ..timestamp).is_ok() {
                            decoder.flush();
                        }
                    }
                    is_playing = true;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                    awaiting_first_frame = true;
                    let _ = event_tx.blocking_send(DecoderEvent::Buffering);
                }
                Ok(DecoderCommand::Pause) => {
                    is_playing = false;
                    playback_start_time = None;
                    first_pts = None;
                    awaiting_first_frame = false;
                }
                Ok(DecoderCommand::Seek { target_secs }) => {
                    let timestamp = (target_secs * 1_000_000.0) as i64;
                    match ictx.seek(timestamp, ..timestamp) {
                        Ok(()) => {
                            decoder.flush();
                            current_pts_secs = target_secs;
                            playback_start_time = Some(Instant::now());
                            first_pts = None;
                            if is_playing {
                                awaiting_first_frame = true;
                                let _ = event_tx.blocking_send(DecoderEvent::Buffering);
                            } else {
                                decode_single_frame = true;
                            }
                        }
                        Err(e) => {
                            tracing::debug!(error = %e, target_secs, "seek failed");
                        }
                    }
                }
                Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => {
                    break;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing && !decode_single_frame {
                std::thread::sleep(Duration::from_millis(10));
                continue;
            }

            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    // Isolated bad packets are skipped rather than failing the session
                    tracing::trace!(error = %e, "packet rejected by decoder");
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_err() {
                    continue;
                }

                let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                scaler
                    .run(&decoded_frame, &mut rgb_frame)
                    .map_err(|e| Error::Io(format!("Scaling failed: {}", e)))?;

                let pts_secs = decoded_frame
                    .timestamp()
                    .map_or(0.0, |pts| pts as f64 * time_base_f64);

                // Frame pacing relative to the first frame after (re)start
                if let Some(start_time) = playback_start_time {
                    let first = *first_pts.get_or_insert(pts_secs);
                    let target_time =
                        start_time + Duration::from_secs_f64((pts_secs - first).max(0.0));
                    let now = Instant::now();
                    if target_time > now {
                        std::thread::sleep(target_time - now);
                    }
                }

                current_pts_secs = pts_secs;

                if awaiting_first_frame {
                    awaiting_first_frame = false;
                    let _ = event_tx.blocking_send(DecoderEvent::Playing);
                }

                let frame = DecodedFrame {
                    rgba_data: Arc::new(Self::extract_rgba_data(&rgb_frame)),
                    width,
                    height,
                    pts_secs,
                };
                if event_tx.blocking_send(DecoderEvent::FrameReady(frame)).is_err() {
                    return Ok(());
                }

                frame_decoded = true;
                decode_single_frame = false;
                break;
            }

            if !frame_decoded {
                let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
                is_playing = false;
                playback_start_time = None;
                first_pts = None;
                decode_single_frame = false;
                awaiting_first_frame = false;
            }
        }

        Ok(())
    }

    /// Copies RGBA rows out of a frame, dropping stride padding.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            let row_start = y * stride;
            rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
        }

        rgba_bytes
    }
}
