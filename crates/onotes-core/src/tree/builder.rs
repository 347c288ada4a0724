//! Recursive directory walk producing the sidebar view model
//!
//! A walk happens in two phases. First every directory under the root is
//! listed; any failed listing aborts the walk. Only then are nodes built,
//! so a caller never sees a tree that silently lost a branch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::NotesLayout;
use crate::error::{Error, Result};
use crate::fs::NotesFs;
use crate::models::{DirectoryEntry, RawEntry};
use crate::util::compare_names;

/// Raw listings gathered during a walk, keyed by directory path
type Listings = HashMap<PathBuf, Vec<RawEntry>>;

/// Ensure the notes root exists, then walk it.
pub async fn load<F: NotesFs>(fs: &F, layout: &NotesLayout) -> Result<Vec<DirectoryEntry>> {
    let root = layout.notes_root();

    // A failure here resurfaces as a listing error just below.
    if let Err(e) = fs.create_dir_all(root).await {
        tracing::debug!("Could not ensure {} exists: {}", root.display(), e);
    }

    build_tree(fs, root).await
}

/// Walk `root` depth-first and build the sorted tree beneath it.
pub async fn build_tree<F: NotesFs>(fs: &F, root: &Path) -> Result<Vec<DirectoryEntry>> {
    let listings = collect_listings(fs, root).await?;
    let tree = assemble(root, &listings);

    tracing::debug!(
        "Walked {} directories under {} ({} entries)",
        listings.len(),
        root.display(),
        tree.iter().map(DirectoryEntry::subtree_len).sum::<usize>()
    );
    Ok(tree)
}

/// Directories first, then names ascending. The sort is stable, so entries
/// that compare equal keep their enumeration order.
pub fn sort_entries(entries: &mut [RawEntry]) {
    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| compare_names(&a.name, &b.name))
    });
}

async fn collect_listings<F: NotesFs>(fs: &F, root: &Path) -> Result<Listings> {
    let mut listings = Listings::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = fs
            .read_dir(&dir)
            .await
            .map_err(|source| Error::Listing {
                path: dir.clone(),
                source,
            })?;

        // Reverse so the stack pops subdirectories in listing order.
        pending.extend(
            entries
                .iter()
                .rev()
                .filter(|entry| entry.is_directory)
                .map(|entry| dir.join(&entry.name)),
        );
        listings.insert(dir, entries);
    }

    Ok(listings)
}

fn assemble(dir: &Path, listings: &Listings) -> Vec<DirectoryEntry> {
    let mut entries = listings.get(dir).cloned().unwrap_or_default();
    sort_entries(&mut entries);

    entries
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let path = dir.join(&raw.name);
            if raw.is_directory {
                let children = assemble(&path, listings);
                DirectoryEntry::directory(raw.name, path, index, children)
            } else {
                DirectoryEntry::file(raw.name, path, index)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fs::{LocalFs, MemoryFs};

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn sort_puts_directories_first_then_names() {
        let mut entries = vec![
            RawEntry::file("zeta.md"),
            RawEntry::directory("Work"),
            RawEntry::file("Alpha.md"),
            RawEntry::directory("archive"),
            RawEntry::file("beta.md"),
        ];
        sort_entries(&mut entries);

        let ordered: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            ordered,
            vec!["archive", "Work", "Alpha.md", "beta.md", "zeta.md"]
        );
        let first_file = entries.iter().position(|e| !e.is_directory).unwrap();
        assert!(entries[..first_file].iter().all(|e| e.is_directory));
        assert!(entries[first_file..].iter().all(|e| !e.is_directory));
    }

    #[test]
    fn sort_follows_locale_order_for_case_and_accents() {
        let mut entries = vec![
            RawEntry::file("zebra.md"),
            RawEntry::file("Über.md"),
            RawEntry::file("Notes.md"),
            RawEntry::file("notes.md"),
        ];
        sort_entries(&mut entries);

        let ordered: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(ordered, vec!["notes.md", "Notes.md", "Über.md", "zebra.md"]);
    }

    #[tokio::test]
    async fn accented_folders_sort_with_their_base_letter() {
        let fs = MemoryFs::new()
            .with_dir("notes/Zürich")
            .with_dir("notes/Ébauches")
            .with_dir("notes/archive")
            .with_file("notes/école.md", "");

        let tree = load(&fs, &NotesLayout::default()).await.unwrap();
        assert_eq!(
            names(&tree),
            vec!["archive", "Ébauches", "Zürich", "école.md"]
        );
    }

    #[tokio::test]
    async fn builds_nested_sorted_tree() {
        let fs = MemoryFs::new()
            .with_file("notes/todo.md", "")
            .with_file("notes/Work/meetings.md", "")
            .with_file("notes/Work/goals.md", "")
            .with_dir("notes/Personal")
            .with_file("notes/Personal/journal.md", "")
            .with_dir("notes/Personal/Trips");

        let tree = load(&fs, &NotesLayout::default()).await.unwrap();

        assert_eq!(names(&tree), vec!["Personal", "Work", "todo.md"]);
        assert_eq!(names(tree[0].children()), vec!["Trips", "journal.md"]);
        assert_eq!(names(tree[1].children()), vec!["goals.md", "meetings.md"]);
        assert_eq!(tree[0].children()[0].children, Some(Vec::new()));
        assert!(tree[2].children.is_none());

        assert_eq!(tree[1].id, "Work-1");
        assert_eq!(
            tree[1].children()[1].path,
            PathBuf::from("notes/Work/meetings.md")
        );
    }

    #[tokio::test]
    async fn empty_root_yields_no_entries() {
        let fs = MemoryFs::new().with_dir("notes");
        let tree = load(&fs, &NotesLayout::default()).await.unwrap();
        assert!(tree.is_empty());
    }

    #[tokio::test]
    async fn missing_root_is_created_first() {
        let fs = MemoryFs::new();
        let tree = load(&fs, &NotesLayout::default()).await.unwrap();
        assert!(tree.is_empty());
        assert!(fs.is_dir(Path::new("notes")));

        // Second load finds the same empty root.
        assert!(load(&fs, &NotesLayout::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_loads_are_identical() {
        let fs = MemoryFs::new()
            .with_file("notes/b.md", "")
            .with_file("notes/A/c.md", "")
            .with_file("notes/a.md", "");

        let first = load(&fs, &NotesLayout::default()).await.unwrap();
        let second = load(&fs, &NotesLayout::default()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn failing_subdirectory_aborts_the_walk() {
        let fs = MemoryFs::new()
            .with_file("notes/ok.md", "")
            .with_file("notes/Locked/secret.md", "");
        fs.deny("notes/Locked");

        let error = load(&fs, &NotesLayout::default()).await.unwrap_err();
        match error {
            Error::Listing { path, source } => {
                assert_eq!(path, PathBuf::from("notes/Locked"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn directory_deleted_mid_walk_aborts_the_walk() {
        let fs = MemoryFs::new()
            .with_file("notes/ok.md", "")
            .with_file("notes/Old/draft.md", "");
        fs.vanish("notes/Old");

        let error = load(&fs, &NotesLayout::default()).await.unwrap_err();
        match error {
            Error::Listing { path, source } => {
                assert_eq!(path, PathBuf::from("notes/Old"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn walk_reads_each_directory_once() {
        let fs = MemoryFs::new()
            .with_dir("notes/A/B")
            .with_dir("notes/C");
        load(&fs, &NotesLayout::default()).await.unwrap();
        assert_eq!(fs.read_dir_calls(), 4);
    }

    #[tokio::test]
    async fn walks_a_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("notes/Projects")).unwrap();
        std::fs::write(dir.path().join("notes/Projects/rust.md"), "# Rust").unwrap();
        std::fs::write(dir.path().join("notes/inbox.md"), "").unwrap();

        let fs = LocalFs::new(dir.path());
        let tree = load(&fs, &NotesLayout::default()).await.unwrap();
        assert_eq!(names(&tree), vec!["Projects", "inbox.md"]);
        assert_eq!(names(tree[0].children()), vec!["rust.md"]);
    }
}
