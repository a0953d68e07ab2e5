// SPDX-License-Identifier: MPL-2.0
//! Video playback engine for Keepsake.
//!
//! This module provides video playback using FFmpeg for decoding and a Tokio
//! blocking task per playback session for non-blocking frame delivery.
//! Audio tracks are not rendered.

mod decoder;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent, StreamInfo};
pub use subscription::{
    video_playback, DecoderCommandSender, PlaybackEvent, PlaybackMessage, VideoPlaybackId,
};

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once, with its own logging lowered to errors.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Checks at startup whether the memories can be decoded at all.
///
/// Returns `true` when FFmpeg initializes and an H.264 decoder is available.
pub fn probe_support() -> bool {
    if let Err(err) = init_ffmpeg() {
        tracing::warn!(error = %err, "video playback unavailable");
        return false;
    }

    let h264 = ffmpeg_next::decoder::find(ffmpeg_next::codec::Id::H264).is_some();
    if h264 {
        tracing::info!("H.264 decoding available");
    } else {
        tracing::warn!("no H.264 decoder found, memories may not play correctly");
    }
    h264
}

/// A resolved, playable video resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoSource {
    /// Local file.
    File(PathBuf),
    /// Remote resource opened by FFmpeg's network protocols.
    Url(String),
}

impl VideoSource {
    /// Interprets a raw reference: strings with a scheme are URLs, absolute
    /// paths are kept, anything else is relative to `media_dir`.
    #[must_use]
    pub fn parse(raw: &str, media_dir: &Path) -> Self {
        let raw = raw.trim();
        if raw.contains("://") {
            return VideoSource::Url(raw.to_string());
        }

        let path = Path::new(raw);
        if path.is_absolute() {
            VideoSource::File(path.to_path_buf())
        } else {
            VideoSource::File(media_dir.join(path))
        }
    }

    /// Input location handed to `ffmpeg_next::format::input`.
    #[must_use]
    pub fn ffmpeg_input(&self) -> PathBuf {
        match self {
            VideoSource::File(path) => path.clone(),
            VideoSource::Url(url) => PathBuf::from(url),
        }
    }
}

impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoSource::File(path) => write!(f, "{}", path.display()),
            VideoSource::Url(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_reference_resolves_against_media_dir() {
        let source = VideoSource::parse("video1.mp4", Path::new("/media"));
        assert_eq!(source, VideoSource::File(PathBuf::from("/media/video1.mp4")));
    }

    #[test]
    fn scheme_reference_is_a_url() {
        let source = VideoSource::parse(
            "https://example.com/clip.mp4",
            Path::new("/media"),
        );
        assert!(matches!(source, VideoSource::Url(_)));
        assert_eq!(source.to_string(), "https://example.com/clip.mp4");
    }

    #[test]
    fn absolute_reference_ignores_media_dir() {
        let absolute = std::env::temp_dir().join("clip.mp4");
        let source = VideoSource::parse(&absolute.to_string_lossy(), Path::new("/media"));
        assert_eq!(source, VideoSource::File(absolute));
    }
}
