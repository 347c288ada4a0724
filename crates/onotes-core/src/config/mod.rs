//! Application configuration.
//!
//! `AppConfig` is read from `config.json` in the default storage directory
//! and decides where the notes live on disk. Missing files and missing
//! fields fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::EntryKind;
use crate::util::normalize_text_option;

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "onotes";
/// Configuration file name inside the app directory
pub const CONFIG_FILE: &str = "config.json";
/// Fixed content root beneath the storage root
pub const DEFAULT_NOTES_DIR: &str = "notes";
/// Extension appended to new note names
pub const DEFAULT_NOTE_EXTENSION: &str = "md";

/// User-tunable application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    /// Application-private storage root; all filesystem access is scoped here
    pub storage_root: PathBuf,
    /// Notes root relative to `storage_root`
    pub notes_dir: String,
    /// Extension for new notes, without the leading dot
    pub note_extension: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_root: default_app_dir(),
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
            note_extension: DEFAULT_NOTE_EXTENSION.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a configuration payload.
    pub fn parse(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Load `config.json` from `dir`, or fall back to defaults.
    ///
    /// A missing file is normal. An unreadable or malformed one is logged
    /// and ignored so the app still starts.
    pub fn load_or_default(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        let payload = match std::fs::read_to_string(&path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::parse(&payload) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Path layout derived from this configuration
    #[must_use]
    pub fn layout(&self) -> NotesLayout {
        let notes_dir = normalize_text_option(Some(&self.notes_dir))
            .unwrap_or_else(|| DEFAULT_NOTES_DIR.to_string());
        let extension = normalize_text_option(Some(self.note_extension.trim_start_matches('.')))
            .unwrap_or_else(|| DEFAULT_NOTE_EXTENSION.to_string());

        NotesLayout {
            notes_root: PathBuf::from(notes_dir),
            note_extension: extension,
        }
    }
}

/// Platform data directory for the app (`<data dir>/onotes`)
#[must_use]
pub fn default_app_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Where notes and folders live, relative to the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesLayout {
    notes_root: PathBuf,
    note_extension: String,
}

impl Default for NotesLayout {
    fn default() -> Self {
        Self {
            notes_root: PathBuf::from(DEFAULT_NOTES_DIR),
            note_extension: DEFAULT_NOTE_EXTENSION.to_string(),
        }
    }
}

impl NotesLayout {
    #[must_use]
    pub fn notes_root(&self) -> &Path {
        &self.notes_root
    }

    #[must_use]
    pub fn note_extension(&self) -> &str {
        &self.note_extension
    }

    /// `notes/<name>.<ext>`
    #[must_use]
    pub fn note_path(&self, name: &str) -> PathBuf {
        self.notes_root
            .join(format!("{name}.{}", self.note_extension))
    }

    /// `notes/<name>`
    #[must_use]
    pub fn folder_path(&self, name: &str) -> PathBuf {
        self.notes_root.join(name)
    }

    #[must_use]
    pub fn entry_path(&self, kind: EntryKind, name: &str) -> PathBuf {
        match kind {
            EntryKind::Note => self.note_path(name),
            EntryKind::Folder => self.folder_path(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_layout_uses_notes_and_md() {
        let layout = AppConfig::default().layout();
        assert_eq!(layout.notes_root(), Path::new("notes"));
        assert_eq!(layout.note_path("todo"), PathBuf::from("notes/todo.md"));
        assert_eq!(layout.folder_path("Work"), PathBuf::from("notes/Work"));
    }

    #[test]
    fn parse_fills_missing_fields_with_defaults() {
        let config = AppConfig::parse(r#"{ "storage_root": "/tmp/onotes" }"#).unwrap();
        assert_eq!(config.storage_root, PathBuf::from("/tmp/onotes"));
        assert_eq!(config.notes_dir, DEFAULT_NOTES_DIR);
        assert_eq!(config.note_extension, DEFAULT_NOTE_EXTENSION);
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let error = AppConfig::parse(r#"{ "sync_url": "x" }"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn layout_normalizes_extension_and_blank_dir() {
        let config = AppConfig {
            storage_root: PathBuf::from("/tmp"),
            notes_dir: "  ".to_string(),
            note_extension: ".markdown".to_string(),
        };
        let layout = config.layout();
        assert_eq!(layout.note_path("a"), PathBuf::from("notes/a.markdown"));
        assert_eq!(
            layout.entry_path(EntryKind::Folder, "b"),
            PathBuf::from("notes/b")
        );
    }

    #[test]
    fn load_or_default_handles_missing_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load_or_default(dir.path()), AppConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert_eq!(AppConfig::load_or_default(dir.path()), AppConfig::default());

        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "notes_dir": "journal" }"#,
        )
        .unwrap();
        let loaded = AppConfig::load_or_default(dir.path());
        assert_eq!(loaded.layout().notes_root(), Path::new("journal"));
    }
}
