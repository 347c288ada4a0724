//! Active file descriptor

use serde::{Deserialize, Serialize};

use super::DirectoryEntry;

/// Identity of the note currently open in the editor
///
/// Holds no content; it only shares a path string with the tree entry it
/// was selected from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFile {
    pub id: String,
    pub name: String,
    pub path: String,
}

impl ActiveFile {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
        }
    }

    /// Describe a tree entry the user clicked
    #[must_use]
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        Self::new(
            entry.id.clone(),
            entry.name.clone(),
            entry.path.to_string_lossy(),
        )
    }

    /// True when no note has been selected yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn default_is_empty() {
        let file = ActiveFile::default();
        assert!(file.is_empty());
        assert_eq!(file.id, "");
        assert_eq!(file.name, "");
    }

    #[test]
    fn from_entry_copies_identity() {
        let entry = DirectoryEntry::file("ideas.md", PathBuf::from("notes/ideas.md"), 1);
        let file = ActiveFile::from_entry(&entry);
        assert_eq!(file, ActiveFile::new("ideas.md-1", "ideas.md", "notes/ideas.md"));
        assert!(!file.is_empty());
    }
}
