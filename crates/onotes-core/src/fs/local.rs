//! Disk-backed filesystem scoped to a storage root

use std::io;
use std::path::{Component, Path, PathBuf};

use tokio::fs;

use super::NotesFs;
use crate::models::RawEntry;

/// [`NotesFs`] over the real disk, rooted at the app's storage directory
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a relative path onto the root, refusing anything that could
    /// escape it.
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        for component in path.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("path escapes storage root: {}", path.display()),
                    ));
                }
            }
        }
        Ok(self.root.join(path))
    }
}

impl NotesFs for LocalFs {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let full = self.resolve(path)?;
        let mut reader = fs::read_dir(&full).await?;
        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let is_directory = entry.file_type().await?.is_dir();
            entries.push(RawEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory,
            });
        }
        Ok(entries)
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let full = self.resolve(path)?;
        fs::create_dir_all(full).await
    }

    async fn create_file(&self, path: &Path) -> io::Result<()> {
        let full = self.resolve(path)?;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(full)
            .await?;
        Ok(())
    }

    async fn read_text(&self, path: &Path) -> io::Result<String> {
        let full = self.resolve(path)?;
        fs::read_to_string(full).await
    }

    async fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        let full = self.resolve(path)?;
        fs::write(full, contents).await
    }
}
