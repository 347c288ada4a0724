//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::mpsc::unbounded_channel;

use onotes_core::config::AppConfig;
use onotes_core::dialog::CreationMenu;
use onotes_core::shortcut::ShortcutRegistry;
use onotes_core::state::ActiveSelection;
use onotes_core::tree::{run_reload_loop, NoteTree};

use crate::hotkey::key_event;
use crate::services::NotesService;
use crate::state::AppState;
use crate::theme::ResolvedTheme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    // State signals
    let mut tree = use_signal(NoteTree::default);
    let selection = use_signal(ActiveSelection::default);
    let menu = use_signal(CreationMenu::default);
    let sidebar_open = use_signal(|| true);
    let nav_open = use_signal(|| false);
    let notifications = use_signal(Vec::new);
    let theme = use_signal(ResolvedTheme::system);
    let notes = use_signal(|| Arc::new(NotesService::new(&config)));

    // The reload loop is the only writer of the tree; it lives as long as
    // the root component.
    let tree_events = use_hook(move || {
        let (tx, rx) = unbounded_channel();
        let service = notes.peek().clone();
        spawn(async move {
            run_reload_loop(service.fs(), service.layout(), rx, move |update| {
                tree.write().update(update);
            })
            .await;
        });
        Signal::new(tx)
    });

    let shortcuts = use_context_provider(ShortcutRegistry::new);

    use_context_provider(|| AppState {
        tree,
        selection,
        menu,
        sidebar_open,
        nav_open,
        notifications,
        theme,
        notes,
        tree_events,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = current_theme.attr();

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            tabindex: "0",
            autofocus: true,
            style: "
                height: 100vh;
                outline: none;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_app};
                color: {colors.text_primary};
            ",
            onkeydown: move |evt: KeyboardEvent| {
                let outcome = shortcuts.dispatch(&key_event(&evt));
                if outcome.prevent_default {
                    evt.prevent_default();
                }
                if outcome.stop_propagation {
                    evt.stop_propagation();
                }
            },

            Home {}
        }
    }
}
