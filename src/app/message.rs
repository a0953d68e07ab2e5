// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{final_reveal, gallery, memory_viewer};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Viewer(memory_viewer::Message),
    Reveal(final_reveal::Message),
    /// Escape with no widget capturing it.
    EscapePressed,
    /// Ctrl+Shift+R.
    ResetRequested,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Directory holding the videos and an optional `catalog.toml`.
    pub media_dir: Option<PathBuf>,
    /// Clear the viewed memories before showing the gallery.
    pub reset: bool,
}
