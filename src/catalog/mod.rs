// SPDX-License-Identifier: MPL-2.0
//! The memory catalog: the fixed list of memories shown in the gallery.
//!
//! The catalog is built once at startup, either from the built-in memories or
//! from a `catalog.toml` file found in the media directory, and never changes
//! afterwards. Records are kept in ascending id order.
//!
//! # Catalog file
//!
//! ```toml
//! letter = "Optional text shown in the final letter."
//!
//! [[memories]]
//! id = 1
//! title = "Long Distance"
//! note = "Even with miles between us..."
//! date = "August 2, 2023"   # optional
//! video = "video1.mp4"      # relative to the media directory, absolute, or a URL
//! icon = "plane"
//! ```

mod builtin;

use crate::error::{Error, Result};
use crate::video_player::VideoSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

/// File name of the optional catalog override inside the media directory.
pub const CATALOG_FILE: &str = "catalog.toml";

/// Unique, positive identifier of a memory. Also its ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MemoryId(NonZeroU32);

impl MemoryId {
    /// Returns `None` for zero.
    #[must_use]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for MemoryId {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "memory id must be a positive integer".to_string())
    }
}

impl From<MemoryId> for u32 {
    fn from(id: MemoryId) -> Self {
        id.get()
    }
}

impl fmt::Display for MemoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbolic glyph shown on a memory card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryIcon {
    Plane,
    #[default]
    Heart,
    Infinity,
    Comments,
    Sun,
    Eye,
    Star,
    Camera,
}

impl MemoryIcon {
    /// Unicode glyph used to render the icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            MemoryIcon::Plane => "\u{2708}",
            MemoryIcon::Heart => "\u{2665}",
            MemoryIcon::Infinity => "\u{221E}",
            MemoryIcon::Comments => "\u{275D}",
            MemoryIcon::Sun => "\u{2600}",
            MemoryIcon::Eye => "\u{25C9}",
            MemoryIcon::Star => "\u{2605}",
            MemoryIcon::Camera => "\u{25A3}",
        }
    }
}

/// Reference to the video clip of a memory, as written in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the reference against the media directory.
    #[must_use]
    pub fn resolve(&self, media_dir: &Path) -> VideoSource {
        VideoSource::parse(&self.0, media_dir)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemoryRecord {
    pub id: MemoryId,
    pub title: String,
    pub note: String,
    #[serde(default)]
    pub date: Option<String>,
    pub video: VideoRef,
    #[serde(default)]
    pub icon: MemoryIcon,
    /// Mirrors membership in the viewed set; only the gallery controller
    /// flips it, together with the set.
    #[serde(skip)]
    viewed: bool,
}

impl MemoryRecord {
    pub fn new(
        id: MemoryId,
        title: impl Into<String>,
        note: impl Into<String>,
        date: Option<&str>,
        video: impl Into<String>,
        icon: MemoryIcon,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            note: note.into(),
            date: date.map(str::to_string),
            video: VideoRef::new(video),
            icon,
            viewed: false,
        }
    }

    #[must_use]
    pub fn is_viewed(&self) -> bool {
        self.viewed
    }

    pub(crate) fn set_viewed(&mut self, viewed: bool) {
        self.viewed = viewed;
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    letter: Option<String>,
    memories: Vec<MemoryRecord>,
}

/// The fixed, id-ordered list of memories plus the optional letter text.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<MemoryRecord>,
    letter: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Builds a catalog from records, rejecting empty lists and duplicate ids.
    pub fn new(mut records: Vec<MemoryRecord>, letter: Option<String>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::Catalog("catalog contains no memories".into()));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::Catalog(format!("duplicate memory id {}", record.id)));
            }
        }

        records.sort_by_key(|record| record.id);
        for record in &mut records {
            record.set_viewed(false);
        }

        Ok(Self { records, letter })
    }

    /// The six memories shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
            letter: None,
        }
    }

    /// Parses a catalog file body.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.memories, file.letter)
    }

    /// Loads `catalog.toml` from the media directory.
    ///
    /// Returns the built-in catalog when the file is absent. When the file is
    /// present but invalid, returns the built-in catalog with a warning key.
    pub fn load_from_dir(media_dir: &Path) -> (Self, Option<String>) {
        let path = media_dir.join(CATALOG_FILE);
        if !path.exists() {
            return (Self::builtin(), None);
        }

        let parsed = fs::read_to_string(&path)
            .map_err(Error::from)
            .and_then(|content| Self::from_toml_str(&content));

        match parsed {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    memories = catalog.len(),
                    "loaded memory catalog"
                );
                (catalog, None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid catalog, using built-in memories");
                (
                    Self::builtin(),
                    Some("notification-catalog-invalid".to_string()),
                )
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: MemoryId) -> Option<&MemoryRecord> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .map(|index| &self.records[index])
    }

    pub(crate) fn get_mut(&mut self, id: MemoryId) -> Option<&mut MemoryRecord> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .map(|index| &mut self.records[index])
    }

    #[must_use]
    pub fn contains(&self, id: MemoryId) -> bool {
        self.get(id).is_some()
    }

    /// Records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &MemoryRecord> {
        self.records.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut MemoryRecord> {
        self.records.iter_mut()
    }

    /// Custom letter text, if the catalog file provides one.
    #[must_use]
    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref()
    }
}
