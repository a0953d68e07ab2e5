// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Delay between showing the final card and starting its entrance animation.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 100;

/// Upper bound for the reveal delay; longer values are clamped.
pub const MAX_REVEAL_DELAY_MS: u64 = 5_000;

/// Time between one card fading in and the next on startup and reset.
pub const CARD_ENTRANCE_STEP_MS: u64 = 100;

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Whether memories start playing (muted) as soon as they can.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Known-good clip substituted once when a memory's own video fails to play.
pub const DEFAULT_FALLBACK_SOURCE: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4";
