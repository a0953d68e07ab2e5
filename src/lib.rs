// SPDX-License-Identifier: MPL-2.0
//! `keepsake` is a memory gallery built with the Iced GUI framework.
//!
//! Each memory is a card with a short note and a video clip. Opening a card
//! plays the clip in a modal and remembers that the memory was viewed; once
//! every memory has been viewed, a final card unlocks a letter.
//!
//! The viewed memories are the only durable state, kept as CBOR in the
//! platform data directory. Preferences live in `settings.toml`.

#![doc(html_root_url = "https://docs.rs/keepsake/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
pub mod video_player;
