//! Notes service for the desktop application

use std::path::Path;

use onotes_core::config::{AppConfig, NotesLayout};
use onotes_core::create::{submit_creation, CreateRequest};
use onotes_core::error::Result;
use onotes_core::fs::{LocalFs, NotesFs};
use onotes_core::notification::Notification;
use onotes_core::tree::TreeEvents;

/// Service for reading and writing notes
///
/// Owns the disk capability for the configured storage root and the
/// layout of the notes beneath it.
#[derive(Debug, Clone)]
pub struct NotesService {
    fs: LocalFs,
    layout: NotesLayout,
}

impl NotesService {
    pub fn new(config: &AppConfig) -> Self {
        tracing::info!("Notes storage root: {}", config.storage_root.display());
        Self {
            fs: LocalFs::new(&config.storage_root),
            layout: config.layout(),
        }
    }

    pub const fn fs(&self) -> &LocalFs {
        &self.fs
    }

    pub const fn layout(&self) -> &NotesLayout {
        &self.layout
    }

    /// Create a note or folder, queueing a tree reload on success
    pub async fn create<E: TreeEvents + ?Sized>(
        &self,
        request: &CreateRequest,
        events: &E,
    ) -> Notification {
        submit_creation(&self.fs, &self.layout, request, events).await
    }

    /// Read a note by its path relative to the storage root
    pub async fn read_note(&self, path: &Path) -> Result<String> {
        let contents = self.fs.read_text(path).await?;
        tracing::debug!("Read {} bytes from {}", contents.len(), path.display());
        Ok(contents)
    }

    /// Overwrite a note's contents
    pub async fn save_note(&self, path: &Path, contents: &str) -> Result<()> {
        self.fs.write_text(path, contents).await?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }
}
