//! Directory entry model

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What the user is creating or what a tree node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Note,
    Folder,
}

impl EntryKind {
    /// Capitalized label used in menus and dialog titles
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Folder => "Folder",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => f.write_str("note"),
            Self::Folder => f.write_str("folder"),
        }
    }
}

/// One item of a host directory listing, in enumeration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub is_directory: bool,
}

impl RawEntry {
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

/// A node of the notes tree handed to the sidebar
///
/// Entries are rebuilt from scratch on every load. The `id` is derived from
/// the name and the sibling index, so it does not survive reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Synthesized `"{name}-{index}"`
    pub id: String,
    /// Base name as reported by the host filesystem
    pub name: String,
    /// Path relative to the storage root, e.g. `notes/Work/todo.md`
    pub path: PathBuf,
    pub is_directory: bool,
    /// Only ever `Some` for directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DirectoryEntry>>,
    /// Manual ordering rank; never filled in by the tree walk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl DirectoryEntry {
    /// Create a file node at sibling position `index`
    #[must_use]
    pub fn file(name: impl Into<String>, path: PathBuf, index: usize) -> Self {
        let name = name.into();
        Self {
            id: synthesize_id(&name, index),
            name,
            path,
            is_directory: false,
            children: None,
            position: None,
        }
    }

    /// Create a directory node with its already-built children
    #[must_use]
    pub fn directory(
        name: impl Into<String>,
        path: PathBuf,
        index: usize,
        children: Vec<Self>,
    ) -> Self {
        let name = name.into();
        Self {
            id: synthesize_id(&name, index),
            name,
            path,
            is_directory: true,
            children: Some(children),
            position: None,
        }
    }

    /// Children of a directory, empty for files
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        if self.is_directory {
            EntryKind::Folder
        } else {
            EntryKind::Note
        }
    }

    /// Number of nodes in this subtree, including this one
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Self::subtree_len).sum::<usize>()
    }
}

fn synthesize_id(name: &str, index: usize) -> String {
    format!("{name}-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entries_never_have_children() {
        let entry = DirectoryEntry::file("todo.md", PathBuf::from("notes/todo.md"), 2);
        assert_eq!(entry.id, "todo.md-2");
        assert!(entry.children.is_none());
        assert!(entry.children().is_empty());
        assert_eq!(entry.kind(), EntryKind::Note);
    }

    #[test]
    fn subtree_len_counts_nested_nodes() {
        let inner = DirectoryEntry::file("a.md", PathBuf::from("notes/Work/a.md"), 0);
        let work = DirectoryEntry::directory("Work", PathBuf::from("notes/Work"), 0, vec![inner]);
        assert_eq!(work.subtree_len(), 2);
        assert_eq!(work.kind(), EntryKind::Folder);
    }

    #[test]
    fn entry_kind_labels() {
        assert_eq!(EntryKind::Note.to_string(), "note");
        assert_eq!(EntryKind::Folder.label(), "Folder");
    }
}
