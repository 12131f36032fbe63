// SPDX-License-Identifier: MPL-2.0
//! Kiosk session state persisted as CBOR.
//!
//! The only thing kept here is the last-viewed pointer: the identifier of the
//! photo that was on screen when the lightbox (or the photo modal) closed.
//! It is consumed once after the first catalog load to scroll the gallery back
//! to that photo, then cleared. User preferences live in `settings.toml`.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Identifier of the photo shown when the viewer last closed.
    #[serde(default)]
    pub last_viewed: Option<String>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns `(state, warning_key)`. A missing file is not a warning; an
    /// unreadable or corrupt one yields defaults plus an i18n key for a toast.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the resolved data dir when `None`.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "discarding corrupt state file: {err}");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), "cannot read state file: {err}");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location. Returns a warning key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state to `base_dir`, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
                    tracing::warn!(path = %path.display(), "cannot write state file: {err}");
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Records the identifier to scroll back to on the next start.
    pub fn set_last_viewed(&mut self, identifier: impl Into<String>) {
        self.last_viewed = Some(identifier.into());
    }

    /// Returns the pointer and clears it. Later calls return `None`.
    pub fn take_last_viewed(&mut self) -> Option<String> {
        self.last_viewed.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_pointer() {
        assert!(AppState::default().last_viewed.is_none());
    }

    #[test]
    fn take_last_viewed_is_one_shot() {
        let mut state = AppState::default();
        state.set_last_viewed("services/aluminium/c");

        assert_eq!(
            state.take_last_viewed().as_deref(),
            Some("services/aluminium/c")
        );
        assert!(state.take_last_viewed().is_none());
    }

    #[test]
    fn set_last_viewed_overwrites_previous_value() {
        let mut state = AppState::default();
        state.set_last_viewed("a");
        state.set_last_viewed("b");
        assert_eq!(state.last_viewed.as_deref(), Some("b"));
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_viewed: Some("services/ledmirror/d".to_string()),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            last_viewed: Some("x".to_string()),
        };
        assert!(state.save_to(Some(nested_dir.clone())).is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn consumed_pointer_is_not_restored_after_save() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut state = AppState::default();
        state.set_last_viewed("c");
        state.save_to(Some(base_dir.clone()));

        let (mut loaded, _) = AppState::load_from(Some(base_dir.clone()));
        assert_eq!(loaded.take_last_viewed().as_deref(), Some("c"));
        loaded.save_to(Some(base_dir.clone()));

        let (reloaded, _) = AppState::load_from(Some(base_dir));
        assert!(reloaded.last_viewed.is_none());
    }
}
