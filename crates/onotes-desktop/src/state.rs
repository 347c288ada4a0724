//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use onotes_core::create::CreateRequest;
use onotes_core::dialog::CreationMenu;
use onotes_core::notification::Notification;
use onotes_core::state::ActiveSelection;
use onotes_core::tree::{NoteTree, TreeEvent, TreeEvents};

use crate::services::NotesService;
use crate::theme::ResolvedTheme;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes tree shown in the sidebar
    pub tree: Signal<NoteTree>,
    /// Note open in the editor
    pub selection: Signal<ActiveSelection>,
    /// "+" popover and the name dialog behind it
    pub menu: Signal<CreationMenu>,
    /// Whether the sidebar is expanded
    pub sidebar_open: Signal<bool>,
    /// Whether the search dialog is showing
    pub nav_open: Signal<bool>,
    /// Toasts currently on screen
    pub notifications: Signal<Vec<Notification>>,
    pub theme: Signal<ResolvedTheme>,
    /// Filesystem access for notes
    pub notes: Signal<Arc<NotesService>>,
    /// Feeds the tree reload loop
    pub tree_events: Signal<UnboundedSender<TreeEvent>>,
}

impl AppState {
    pub fn toggle_sidebar(&mut self) {
        let open = *self.sidebar_open.peek();
        self.sidebar_open.set(!open);
    }

    pub fn toggle_nav(&mut self) {
        let open = *self.nav_open.peek();
        self.nav_open.set(!open);
    }

    /// Ask the tree owner to walk the notes root again
    pub fn request_reload(&self) {
        self.tree_events.peek().emit(TreeEvent::Reload);
    }

    /// Show a toast and schedule its removal
    pub fn notify(&mut self, notification: Notification) {
        let id = notification.id;
        self.notifications.write().push(notification);

        let mut notifications = self.notifications;
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            notifications.write().retain(|n| n.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.write().retain(|n| n.id != id);
    }

    /// Create a note or folder in the background.
    ///
    /// The menu is already closed at this point, so the outcome is only
    /// reported through a toast. Success also queues a tree reload.
    pub fn create_entry(&self, request: CreateRequest) {
        let notes = self.notes.peek().clone();
        let events = self.tree_events.peek().clone();
        let mut state = *self;

        spawn(async move {
            let notification = notes.create(&request, &events).await;
            state.notify(notification);
        });
    }
}
