//! Sidebar with the notes tree

use dioxus::prelude::*;
use onotes_core::shortcut::{KeyCombination, ShortcutOptions};

use super::{FileTree, PlusItem};
use crate::hotkey::use_keyboard_shortcut;
use crate::state::AppState;

const EXPANDED_WIDTH: u32 = 260;
const COLLAPSED_WIDTH: u32 = 48;

/// Collapsible sidebar: header, search, notes tree and footer actions
#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let open = (state.sidebar_open)();

    use_keyboard_shortcut(
        vec![KeyCombination::ctrl("b")],
        ShortcutOptions::default(),
        move |_| state.toggle_sidebar(),
    );
    use_keyboard_shortcut(
        vec![KeyCombination::ctrl("e")],
        ShortcutOptions::default(),
        move |_| state.toggle_nav(),
    );

    let width = if open { EXPANDED_WIDTH } else { COLLAPSED_WIDTH };
    let toggle_title = if open {
        "Collapse sidebar (Ctrl+B)"
    } else {
        "Expand sidebar (Ctrl+B)"
    };

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: {width}px;
                flex-shrink: 0;
                display: flex;
                flex-direction: column;
                background: {colors.bg_sidebar};
                border-right: 1px solid {colors.border};
                transition: width 0.15s ease;
            ",

            // Header
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 12px;
                    border-bottom: 1px solid {colors.border};
                ",
                if open {
                    span {
                        style: "font-weight: 600; font-size: 15px;",
                        "oNotes"
                    }
                }
                IconButton {
                    title: "{toggle_title}",
                    onclick: move |_| state.toggle_sidebar(),
                    if open { "«" } else { "»" }
                }
            }

            if open {
                // Search is a placeholder; nothing is indexed
                div {
                    style: "padding: 8px 12px;",
                    input {
                        r#type: "search",
                        placeholder: "Search notes...",
                        style: "
                            width: 100%;
                            box-sizing: border-box;
                            padding: 6px 8px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: {colors.bg_panel};
                            color: {colors.text_primary};
                        ",
                    }
                }

                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 8px 12px 4px;
                        font-size: 12px;
                        font-weight: 600;
                        color: {colors.text_muted};
                    ",
                    "Notes"
                    PlusItem {}
                }

                div {
                    style: "flex: 1; overflow-y: auto; padding: 0 4px 8px;",
                    FileTree {}
                }

                // Footer
                div {
                    style: "
                        display: flex;
                        gap: 4px;
                        padding: 8px 12px;
                        border-top: 1px solid {colors.border};
                    ",
                    IconButton {
                        title: "Search (Ctrl+E)",
                        onclick: move |_| state.toggle_nav(),
                        "⌕"
                    }
                    IconButton {
                        title: "Reload notes",
                        onclick: move |_| state.request_reload(),
                        "↻"
                    }
                    IconButton {
                        title: "Settings",
                        onclick: move |_| tracing::debug!("Settings are not available yet"),
                        "⚙"
                    }
                }
            }
        }
    }
}

/// Small square button used in the sidebar chrome
#[component]
fn IconButton(title: String, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        button {
            title: "{title}",
            style: "
                width: 28px;
                height: 28px;
                border: none;
                border-radius: 6px;
                background: transparent;
                color: {colors.text_muted};
                cursor: pointer;
                font-size: 14px;
            ",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
