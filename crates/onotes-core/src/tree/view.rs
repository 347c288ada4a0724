//! Sidebar-facing tree state

use crate::error::Result;
use crate::models::DirectoryEntry;

use super::TreeUpdate;

/// What the sidebar should show in place of, or next to, the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeStatus {
    /// A walk is in flight
    Loading,
    /// The last walk found entries
    Ready,
    /// The last walk found an empty notes root
    Empty,
    /// The last walk failed; holds the user-facing message
    Failed(String),
}

/// The rendered notes tree and its load status
///
/// Entries are only ever replaced as a whole by a successful load. A failed
/// load keeps the previous entries and records an error instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTree {
    entries: Vec<DirectoryEntry>,
    status: TreeStatus,
    completed_loads: u64,
}

impl Default for NoteTree {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            status: TreeStatus::Loading,
            completed_loads: 0,
        }
    }
}

impl NoteTree {
    #[must_use]
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn status(&self) -> &TreeStatus {
        &self.status
    }

    /// Error message of the last load, if it failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            TreeStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, TreeStatus::Loading)
    }

    /// Number of loads that replaced the entries
    #[must_use]
    pub const fn completed_loads(&self) -> u64 {
        self.completed_loads
    }

    pub fn begin_load(&mut self) {
        self.status = TreeStatus::Loading;
    }

    /// Record the outcome of a walk.
    pub fn apply(&mut self, result: Result<Vec<DirectoryEntry>>) {
        match result {
            Ok(entries) => {
                self.status = if entries.is_empty() {
                    TreeStatus::Empty
                } else {
                    TreeStatus::Ready
                };
                self.entries = entries;
                self.completed_loads += 1;
            }
            Err(e) => {
                tracing::error!("Error loading files: {}", e);
                self.status = TreeStatus::Failed(e.user_message());
            }
        }
    }

    pub fn update(&mut self, update: TreeUpdate) {
        match update {
            TreeUpdate::Started => self.begin_load(),
            TreeUpdate::Finished(result) => self.apply(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{Error, LOAD_FAILURE_MESSAGE};

    fn sample() -> Vec<DirectoryEntry> {
        vec![DirectoryEntry::file("a.md", PathBuf::from("notes/a.md"), 0)]
    }

    fn denied() -> Error {
        Error::Listing {
            path: PathBuf::from("notes"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }
    }

    #[test]
    fn starts_loading() {
        let tree = NoteTree::default();
        assert!(tree.is_loading());
        assert!(tree.entries().is_empty());
    }

    #[test]
    fn empty_result_reports_empty_state() {
        let mut tree = NoteTree::default();
        tree.apply(Ok(Vec::new()));
        assert_eq!(tree.status(), &TreeStatus::Empty);
        assert_eq!(tree.error(), None);
    }

    #[test]
    fn failure_keeps_previous_entries() {
        let mut tree = NoteTree::default();
        tree.apply(Ok(sample()));
        assert_eq!(tree.status(), &TreeStatus::Ready);

        tree.begin_load();
        tree.apply(Err(denied()));

        assert_eq!(tree.entries(), sample().as_slice());
        assert_eq!(tree.error(), Some(LOAD_FAILURE_MESSAGE));
        assert_eq!(tree.completed_loads(), 1);
    }

    #[test]
    fn success_after_failure_clears_error() {
        let mut tree = NoteTree::default();
        tree.update(TreeUpdate::Finished(Err(denied())));
        tree.update(TreeUpdate::Started);
        assert!(tree.is_loading());
        tree.update(TreeUpdate::Finished(Ok(sample())));
        assert_eq!(tree.status(), &TreeStatus::Ready);
        assert_eq!(tree.error(), None);
    }
}
