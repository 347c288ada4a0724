//! Creating notes and folders under the notes root

use std::path::PathBuf;

use crate::config::NotesLayout;
use crate::error::{Error, Result};
use crate::fs::NotesFs;
use crate::models::EntryKind;
use crate::notification::Notification;
use crate::tree::{TreeEvent, TreeEvents};
use crate::util::normalize_text_option;

/// Trim a user-supplied name, rejecting empty and whitespace-only input.
///
/// No other characters are filtered; the host filesystem has the final say.
pub fn validate_name(raw: &str) -> Result<String> {
    normalize_text_option(Some(raw))
        .ok_or_else(|| Error::InvalidInput("name must not be empty".to_string()))
}

/// A validated request to create a note or a folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub kind: EntryKind,
    pub name: String,
}

impl CreateRequest {
    pub fn new(kind: EntryKind, raw_name: &str) -> Result<Self> {
        Ok(Self {
            kind,
            name: validate_name(raw_name)?,
        })
    }
}

/// Create the file or directory for `request` and return its path.
///
/// Notes become `<root>/<name>.<ext>` and must not already exist. Folders
/// are created recursively.
pub async fn create_entry<F: NotesFs>(
    fs: &F,
    layout: &NotesLayout,
    request: &CreateRequest,
) -> Result<PathBuf> {
    let CreateRequest { kind, name } = request;
    let path = layout.entry_path(*kind, name);
    let creation_error = |source| Error::Creation {
        kind: *kind,
        name: name.clone(),
        source,
    };

    match kind {
        EntryKind::Note => {
            fs.create_dir_all(layout.notes_root())
                .await
                .map_err(creation_error)?;
            fs.create_file(&path).await.map_err(creation_error)?;
        }
        EntryKind::Folder => fs.create_dir_all(&path).await.map_err(creation_error)?,
    }

    tracing::info!("Created {} at {}", kind, path.display());
    Ok(path)
}

/// Run a creation and report the outcome.
///
/// On success exactly one [`TreeEvent::Reload`] is emitted. Failures emit
/// nothing and are only reported through the returned notification.
pub async fn submit_creation<F, E>(
    fs: &F,
    layout: &NotesLayout,
    request: &CreateRequest,
    events: &E,
) -> Notification
where
    F: NotesFs,
    E: TreeEvents + ?Sized,
{
    let kind = request.kind;
    match create_entry(fs, layout, request).await {
        Ok(_) => {
            events.emit(TreeEvent::Reload);
            Notification::success(
                format!("{} added", kind.label()),
                format!("Your {kind} has been added."),
            )
        }
        Err(e) => {
            tracing::error!("Failed to create {}: {}", kind, e);
            Notification::error(format!("Failed to create {kind}"), e.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::{error::TryRecvError, unbounded_channel};

    use super::*;
    use crate::fs::MemoryFs;
    use crate::notification::NotificationLevel;

    #[test]
    fn validate_name_trims_and_rejects_blank() {
        assert_eq!(validate_name("  todo ").unwrap(), "todo");
        assert!(matches!(validate_name("   "), Err(Error::InvalidInput(_))));
        assert!(matches!(validate_name(""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn validate_name_is_permissive() {
        assert_eq!(validate_name("what? *really*").unwrap(), "what? *really*");
    }

    #[tokio::test]
    async fn creating_a_note_adds_md_file_and_one_reload() {
        let fs = MemoryFs::new().with_dir("notes");
        let (tx, mut rx) = unbounded_channel();
        let request = CreateRequest::new(EntryKind::Note, "todo").unwrap();

        let notification = submit_creation(&fs, &NotesLayout::default(), &request, &tx).await;

        assert_eq!(notification.level, NotificationLevel::Success);
        assert_eq!(notification.title, "Note added");
        assert_eq!(fs.contents(Path::new("notes/todo.md")).as_deref(), Some(""));
        assert_eq!(rx.try_recv(), Ok(TreeEvent::Reload));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn creating_a_folder_is_recursive() {
        let fs = MemoryFs::new();
        let request = CreateRequest::new(EntryKind::Folder, "Work").unwrap();

        let path = create_entry(&fs, &NotesLayout::default(), &request)
            .await
            .unwrap();
        assert_eq!(path, PathBuf::from("notes/Work"));
        assert!(fs.is_dir(Path::new("notes/Work")));
    }

    #[tokio::test]
    async fn collision_reports_failure_without_reload() {
        let fs = MemoryFs::new().with_file("notes/todo.md", "keep me");
        let (tx, mut rx) = unbounded_channel();
        let request = CreateRequest::new(EntryKind::Note, "todo").unwrap();

        let notification = submit_creation(&fs, &NotesLayout::default(), &request, &tx).await;

        assert!(notification.is_error());
        assert_eq!(notification.title, "Failed to create note");
        assert_eq!(
            fs.contents(Path::new("notes/todo.md")).as_deref(),
            Some("keep me")
        );
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn permission_denied_is_a_creation_failure() {
        let fs = MemoryFs::new().with_dir("notes");
        fs.deny("notes/Private");
        let request = CreateRequest::new(EntryKind::Folder, "Private").unwrap();

        let error = create_entry(&fs, &NotesLayout::default(), &request)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            Error::Creation {
                kind: EntryKind::Folder,
                ..
            }
        ));
    }
}
