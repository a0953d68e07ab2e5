// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State` (where it has one), a `Message` enum and a `view` function
//! taking a `ViewContext`.
//!
//! # Screens
//!
//! - [`gallery`] - Card grid of memories
//! - [`progress`] - Viewed count and completion bar
//! - [`memory_viewer`] - Modal video player
//! - [`final_reveal`] - Unlockable final card and letter overlay
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays, progress)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod final_reveal;
pub mod gallery;
pub mod memory_viewer;
pub mod progress;
pub mod styles;
pub mod theming;
pub mod widgets;
