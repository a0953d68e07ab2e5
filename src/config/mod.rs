// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file. Keepsake never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Media directory and final reveal timing
//! - `[video]` - Autoplay and the fallback clip
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` or the `KEEPSAKE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use keepsake::config;
//!
//! let (config, _warning) = config::load();
//! let autoplay = config.video.autoplay_enabled();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory holding the memory videos and an optional `catalog.toml`.
    #[serde(default)]
    pub media_dir: Option<PathBuf>,

    /// Delay before the final card animates in, in milliseconds.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            media_dir: None,
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl GalleryConfig {
    /// Reveal delay with the configured value clamped to the supported range.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        let millis = self
            .reveal_delay_ms
            .unwrap_or(DEFAULT_REVEAL_DELAY_MS)
            .min(MAX_REVEAL_DELAY_MS);
        Duration::from_millis(millis)
    }
}

/// Video playback settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VideoConfig {
    /// Start memories muted and automatically. When off, playback waits for
    /// the play button and runs unmuted.
    #[serde(default = "default_autoplay")]
    pub autoplay: Option<bool>,

    /// Clip used once when a memory's video fails. An empty string disables it.
    #[serde(default = "default_fallback_source")]
    pub fallback_source: Option<String>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            fallback_source: default_fallback_source(),
        }
    }
}

impl VideoConfig {
    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }

    /// Fallback reference, `None` when disabled.
    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        match self.fallback_source.as_deref() {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(raw),
            None => Some(DEFAULT_FALLBACK_SOURCE),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub video: VideoConfig,
}

fn default_reveal_delay_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_DELAY_MS)
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_fallback_source() -> Option<String> {
    Some(DEFAULT_FALLBACK_SOURCE.to_string())
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"
theme_mode = "light"

[gallery]
media_dir = "/srv/memories"
reveal_delay_ms = 250

[video]
autoplay = false
fallback_source = ""
"#,
        )
        .expect("write file");

        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                media_dir: Some(PathBuf::from("/srv/memories")),
                reveal_delay_ms: Some(250),
            },
            video: VideoConfig {
                autoplay: Some(false),
                fallback_source: Some(String::new()),
            },
        };
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[gallery\nreveal_delay_ms = ").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "general = 3").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert!(config.video.autoplay_enabled());
        assert_eq!(config.video.fallback(), Some(DEFAULT_FALLBACK_SOURCE));
        assert_eq!(
            config.gallery.reveal_delay(),
            Duration::from_millis(DEFAULT_REVEAL_DELAY_MS)
        );
    }

    #[test]
    fn empty_fallback_disables_it() {
        let video = VideoConfig {
            autoplay: None,
            fallback_source: Some("  ".to_string()),
        };
        assert_eq!(video.fallback(), None);
    }

    #[test]
    fn reveal_delay_is_clamped() {
        let gallery = GalleryConfig {
            media_dir: None,
            reveal_delay_ms: Some(60_000),
        };
        assert_eq!(
            gallery.reveal_delay(),
            Duration::from_millis(MAX_REVEAL_DELAY_MS)
        );
    }
}
