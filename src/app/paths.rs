// SPDX-License-Identifier: MPL-2.0
//! Where Keepsake keeps its files.
//!
//! Two directories are resolved here, each from the first source that
//! provides one:
//!
//! | | data (`state.cbor`, default media) | config (`settings.toml`) |
//! |---|---|---|
//! | explicit override | `*_with_override(Some(..))` | `*_with_override(Some(..))` |
//! | command line | `--data-dir` | `--config-dir` |
//! | environment | `KEEPSAKE_DATA_DIR` | `KEEPSAKE_CONFIG_DIR` |
//! | platform | `dirs::data_dir()/Keepsake` | `dirs::config_dir()/Keepsake` |
//!
//! The media directory has its own order, see [`media_dir`].

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "Keepsake";

/// Name of the media directory under the data directory, and of the last
/// resort relative to the working directory.
const MEDIA_DIR_NAME: &str = "media";

pub const ENV_DATA_DIR: &str = "KEEPSAKE_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "KEEPSAKE_CONFIG_DIR";

#[derive(Debug, Clone, Copy)]
enum AppDir {
    Data,
    Config,
}

impl AppDir {
    fn cli_slot(self) -> &'static OnceLock<Option<PathBuf>> {
        static DATA: OnceLock<Option<PathBuf>> = OnceLock::new();
        static CONFIG: OnceLock<Option<PathBuf>> = OnceLock::new();
        match self {
            AppDir::Data => &DATA,
            AppDir::Config => &CONFIG,
        }
    }

    fn env_var(self) -> &'static str {
        match self {
            AppDir::Data => ENV_DATA_DIR,
            AppDir::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            AppDir::Data => dirs::data_dir(),
            AppDir::Config => dirs::config_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        override_path
            .or_else(|| self.cli_slot().get().cloned().flatten())
            .or_else(|| {
                std::env::var(self.env_var())
                    .ok()
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.platform_base().map(|base| base.join(APP_NAME)))
    }
}

/// Records `--data-dir` and `--config-dir`. Only the first call counts.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = AppDir::Data.cli_slot().set(data_dir.map(PathBuf::from));
    let _ = AppDir::Config.cli_slot().set(config_dir.map(PathBuf::from));
}

/// Directory holding the viewed-memories state, `None` if undeterminable.
pub fn get_app_data_dir() -> Option<PathBuf> {
    AppDir::Data.resolve(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Data.resolve(override_path)
}

/// Directory holding `settings.toml`, `None` if undeterminable.
pub fn get_app_config_dir() -> Option<PathBuf> {
    AppDir::Config.resolve(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Config.resolve(override_path)
}

/// Picks the media directory: `--media-dir`, then `[gallery] media_dir`,
/// then `<data dir>/media`, then `./media`.
#[must_use]
pub fn media_dir(cli: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    cli.or(configured)
        .or_else(|| get_app_data_dir().map(|dir| dir.join(MEDIA_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(MEDIA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching process environment run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_dirs_are_namespaced() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);
        for path in [get_app_data_dir(), get_app_config_dir()].into_iter().flatten() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn explicit_override_beats_environment() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/from/env");
        let chosen = get_app_data_dir_with_override(Some(PathBuf::from("/from/test")));
        assert_eq!(chosen, Some(PathBuf::from("/from/test")));
        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn environment_sets_state_location() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/keepsake/state");
        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/keepsake/state")));
        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");
        if let Some(path) = get_app_config_dir() {
            assert_ne!(path, PathBuf::new());
        }
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn media_dir_prefers_command_line_then_settings() {
        let chosen = media_dir(
            Some(PathBuf::from("/cli/media")),
            Some(PathBuf::from("/settings/media")),
        );
        assert_eq!(chosen, PathBuf::from("/cli/media"));

        let chosen = media_dir(None, Some(PathBuf::from("/settings/media")));
        assert_eq!(chosen, PathBuf::from("/settings/media"));
    }

    #[test]
    fn media_dir_defaults_under_data_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/keepsake/data");
        assert_eq!(media_dir(None, None), PathBuf::from("/keepsake/data/media"));
        std::env::remove_var(ENV_DATA_DIR);
    }
}
