//! Reload requests and the loop that serves them

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::config::NotesLayout;
use crate::error::Result;
use crate::fs::NotesFs;
use crate::models::DirectoryEntry;

use super::load;

/// Messages consumed by the owner of the notes tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// Walk the notes root again and replace the tree
    Reload,
}

/// Where producers such as the creation flow send tree events
pub trait TreeEvents {
    fn emit(&self, event: TreeEvent);
}

impl TreeEvents for UnboundedSender<TreeEvent> {
    fn emit(&self, event: TreeEvent) {
        if self.send(event).is_err() {
            tracing::warn!("Dropped {:?}: tree owner is gone", event);
        }
    }
}

/// Progress of one load, reported to the tree owner
#[derive(Debug)]
pub enum TreeUpdate {
    Started,
    Finished(Result<Vec<DirectoryEntry>>),
}

/// Load once, then reload for every [`TreeEvent::Reload`] received.
///
/// Loads never overlap: requests arriving while a walk is in flight wait
/// in the channel and are coalesced into a single follow-up walk. Returns
/// when every sender has been dropped.
pub async fn run_reload_loop<F, S>(
    fs: &F,
    layout: &NotesLayout,
    mut events: UnboundedReceiver<TreeEvent>,
    mut on_update: S,
) where
    F: NotesFs,
    S: FnMut(TreeUpdate),
{
    on_update(TreeUpdate::Started);
    on_update(TreeUpdate::Finished(load(fs, layout).await));

    while let Some(event) = events.recv().await {
        match event {
            TreeEvent::Reload => {
                let mut coalesced = 0_usize;
                while let Ok(TreeEvent::Reload) = events.try_recv() {
                    coalesced += 1;
                }
                if coalesced > 0 {
                    tracing::debug!("Coalesced {} queued reload requests", coalesced);
                }

                on_update(TreeUpdate::Started);
                on_update(TreeUpdate::Finished(load(fs, layout).await));
            }
        }
    }

    tracing::debug!("Reload loop finished");
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc::unbounded_channel;

    use super::*;
    use crate::fs::MemoryFs;
    use crate::tree::{NoteTree, TreeStatus};

    #[tokio::test]
    async fn initial_load_runs_without_events() {
        let fs = MemoryFs::new().with_file("notes/a.md", "");
        let (tx, rx) = unbounded_channel();
        drop(tx);

        let mut tree = NoteTree::default();
        run_reload_loop(&fs, &NotesLayout::default(), rx, |update| tree.update(update)).await;

        assert_eq!(tree.status(), &TreeStatus::Ready);
        assert_eq!(tree.completed_loads(), 1);
    }

    #[tokio::test]
    async fn queued_reloads_are_coalesced() {
        let fs = MemoryFs::new().with_dir("notes");
        let (tx, rx) = unbounded_channel();
        tx.emit(TreeEvent::Reload);
        tx.emit(TreeEvent::Reload);
        tx.emit(TreeEvent::Reload);
        drop(tx);

        let mut tree = NoteTree::default();
        run_reload_loop(&fs, &NotesLayout::default(), rx, |update| tree.update(update)).await;

        // Initial load plus one walk for the three queued requests.
        assert_eq!(tree.completed_loads(), 2);
        assert_eq!(fs.read_dir_calls(), 2);
    }

    #[tokio::test]
    async fn failed_reload_keeps_tree_and_reports_error() {
        let fs = MemoryFs::new().with_file("notes/a.md", "");
        let (tx, rx) = unbounded_channel();
        let mut tx = Some(tx);

        let mut tree = NoteTree::default();
        run_reload_loop(&fs, &NotesLayout::default(), rx, |update| {
            let finished = matches!(update, TreeUpdate::Finished(_));
            tree.update(update);
            if finished {
                if let Some(tx) = tx.take() {
                    fs.deny("notes");
                    tx.emit(TreeEvent::Reload);
                }
            }
        })
        .await;

        assert_eq!(tree.entries().len(), 1);
        assert_eq!(tree.entries()[0].name, "a.md");
        assert!(tree.error().is_some());
        assert_eq!(tree.completed_loads(), 1);
    }

    #[test]
    fn emit_after_receiver_dropped_is_harmless() {
        let (tx, rx) = unbounded_channel::<TreeEvent>();
        drop(rx);
        tx.emit(TreeEvent::Reload);
    }
}
