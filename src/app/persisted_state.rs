// SPDX-License-Identifier: MPL-2.0
//! Persistence of the viewed-memories set using CBOR format.
//!
//! The viewed set is the only durable state of the application. It is stored
//! in `state.cbor` inside the app data directory as a map with a single key,
//! `viewed_memories`, holding a list of integer ids. A missing file is the
//! same as an empty list.
//!
//! Loading never fails: missing or malformed data yields an empty set, with a
//! warning key for the malformed case. Saving and clearing report failures as
//! warning keys; the caller logs them and carries on.
//!
//! # Path Resolution
//!
//! 1. [`ViewedStore::at`] with an explicit directory (tests, portable setups)
//! 2. `KEEPSAKE_DATA_DIR` environment variable / `--data-dir`
//! 3. Platform-specific data directory

use super::paths;
use crate::gallery::ViewedSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// On-disk body of the state file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct PersistedState {
    #[serde(default)]
    viewed_memories: ViewedSet,
}

/// Handle to the durable storage location of the viewed set.
#[derive(Debug, Clone, Default)]
pub struct ViewedStore {
    base_dir: Option<PathBuf>,
}

impl ViewedStore {
    /// Store using the standard path resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rooted at an explicit directory.
    #[must_use]
    pub fn at(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }

    /// Full path of the state file, if a data directory can be determined.
    #[must_use]
    pub fn state_file_path(&self) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(self.base_dir.clone()).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Reads the viewed set.
    ///
    /// Returns `(set, optional_warning)`. A missing file gives an empty set and
    /// no warning; unreadable or malformed data gives an empty set and a warning.
    pub fn load(&self) -> (ViewedSet, Option<String>) {
        let Some(path) = self.state_file_path() else {
            return (ViewedSet::default(), None);
        };

        if !path.exists() {
            return (ViewedSet::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader::<PersistedState, _>(reader) {
                    Ok(state) => (state.viewed_memories, None),
                    Err(_) => (
                        ViewedSet::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                ViewedSet::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Writes the viewed set synchronously, creating the directory if needed.
    ///
    /// Returns a warning key if the write failed.
    pub fn save(&self, viewed: &ViewedSet) -> Option<String> {
        let Some(path) = self.state_file_path() else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        let state = PersistedState {
            viewed_memories: viewed.clone(),
        };

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(&state, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    /// Removes the state file. A file that does not exist is not an error.
    pub fn clear(&self) -> Option<String> {
        let Some(path) = self.state_file_path() else {
            return None;
        };

        match fs::remove_file(&path) {
            Ok(()) => None,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(_) => Some("notification-state-remove-error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryId;
    use tempfile::tempdir;

    fn set_of(ids: &[u32]) -> ViewedSet {
        ids.iter().filter_map(|raw| MemoryId::new(*raw)).collect()
    }

    #[test]
    fn save_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = ViewedStore::at(temp_dir.path().to_path_buf());

        let original = set_of(&[1, 4, 6]);
        assert!(store.save(&original).is_none(), "save should succeed");
        assert!(temp_dir.path().join(STATE_FILE).exists());

        let (loaded, warning) = store.load();
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_empty_set() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = ViewedStore::at(temp_dir.path().to_path_buf());

        let (set, warning) = store.load();
        assert!(warning.is_none(), "should not warn for missing file");
        assert!(set.is_empty());
    }

    #[test]
    fn load_from_corrupted_file_returns_empty_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");
        let store = ViewedStore::at(temp_dir.path().to_path_buf());

        let (set, warning) = store.load();
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert!(set.is_empty());
    }

    #[test]
    fn load_rejects_zero_ids_softly() {
        #[derive(Serialize)]
        struct Raw {
            viewed_memories: Vec<u32>,
        }

        let temp_dir = tempdir().expect("create temp dir");
        let file = fs::File::create(temp_dir.path().join(STATE_FILE)).expect("create file");
        ciborium::into_writer(
            &Raw {
                viewed_memories: vec![1, 0],
            },
            BufWriter::new(file),
        )
        .expect("write cbor");

        let (set, warning) = ViewedStore::at(temp_dir.path().to_path_buf()).load();
        assert!(warning.is_some());
        assert!(set.is_empty());
    }

    #[test]
    fn state_file_is_a_single_key_map_of_integers() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = ViewedStore::at(temp_dir.path().to_path_buf());
        store.save(&set_of(&[2, 3]));

        let file = fs::File::open(temp_dir.path().join(STATE_FILE)).expect("open file");
        let value: ciborium::Value = ciborium::from_reader(BufReader::new(file)).expect("read");
        let map = value.as_map().expect("top-level map");
        assert_eq!(map.len(), 1);
        assert_eq!(map[0].0.as_text(), Some("viewed_memories"));
        let ids: Vec<i128> = map[0]
            .1
            .as_array()
            .expect("array of ids")
            .iter()
            .filter_map(|v| v.as_integer().map(i128::from))
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn clear_removes_file_and_is_idempotent() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = ViewedStore::at(temp_dir.path().to_path_buf());
        store.save(&set_of(&[1]));

        assert!(store.clear().is_none());
        assert!(!temp_dir.path().join(STATE_FILE).exists());
        assert!(store.clear().is_none());

        let (set, _) = store.load();
        assert!(set.is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");
        let store = ViewedStore::at(nested_dir.clone());

        assert!(store.save(&set_of(&[5])).is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
