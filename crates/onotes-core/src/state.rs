//! Shared application state types.

use std::path::Path;

use crate::models::{ActiveFile, DirectoryEntry};

/// Which note is open in the editor.
///
/// Owned by the app shell. Starts empty and is only ever replaced as a
/// whole; nothing is persisted across restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSelection {
    file: ActiveFile,
}

impl ActiveSelection {
    #[must_use]
    pub const fn current(&self) -> &ActiveFile {
        &self.file
    }

    pub fn set_file(&mut self, file: ActiveFile) {
        tracing::debug!("Active file: {}", file.path);
        self.file = file;
    }

    /// Whether `entry` is the open note.
    ///
    /// Compares paths: ids only distinguish siblings, so two folders can
    /// each hold a `todo.md-0`.
    #[must_use]
    pub fn is_selected(&self, entry: &DirectoryEntry) -> bool {
        !self.file.is_empty() && Path::new(&self.file.path) == entry.path
    }
}
