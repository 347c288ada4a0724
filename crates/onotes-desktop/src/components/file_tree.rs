//! Recursive notes tree

use dioxus::prelude::*;
use onotes_core::models::{ActiveFile, DirectoryEntry};
use onotes_core::tree::TreeStatus;

use crate::state::AppState;

/// Indentation per nesting level
const INDENT_PX: usize = 14;

/// The notes tree, or whichever status message stands in for it
#[component]
pub fn FileTree() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let tree = (state.tree)();
    let entries = tree.entries().to_vec();
    let error = tree.error().map(str::to_string);

    // A reload keeps showing the previous entries until it finishes
    let placeholder = match tree.status() {
        TreeStatus::Loading if entries.is_empty() => Some("Loading files..."),
        TreeStatus::Empty => Some("No files found"),
        _ => None,
    };

    rsx! {
        div {
            class: "file-tree",

            {error.map(|message| rsx! {
                div {
                    style: "
                        padding: 8px;
                        font-size: 12px;
                        color: {colors.error};
                    ",
                    "{message}"
                }
            })}

            {placeholder.map(|message| rsx! {
                div {
                    style: "
                        padding: 8px;
                        font-size: 12px;
                        color: {colors.text_muted};
                    ",
                    "{message}"
                }
            })}

            for entry in entries {
                TreeNode { key: "{entry.id}", entry, depth: 0 }
            }
        }
    }
}

/// One folder (with its subtree) or one note
#[component]
fn TreeNode(entry: DirectoryEntry, depth: usize) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut expanded = use_signal(|| false);

    let indent = 8 + depth * INDENT_PX;
    let selected = (state.selection)().is_selected(&entry);
    let background = if selected { colors.bg_hover } else { "transparent" };
    let row_style = format!(
        "display: flex; align-items: center; gap: 6px; \
         padding: 4px 8px 4px {indent}px; border-radius: 6px; \
         cursor: pointer; user-select: none; background: {background};"
    );

    if entry.is_directory {
        let children = entry.children().to_vec();
        let marker = if expanded() { "▾" } else { "▸" };

        rsx! {
            div {
                div {
                    style: "{row_style}",
                    onclick: move |_| {
                        let open = expanded();
                        expanded.set(!open);
                    },
                    span { style: "width: 12px; color: {colors.text_muted};", "{marker}" }
                    span { "{entry.name}" }
                }
                if expanded() {
                    for child in children {
                        TreeNode { key: "{child.id}", entry: child, depth: depth + 1 }
                    }
                }
            }
        }
    } else {
        let file = ActiveFile::from_entry(&entry);

        rsx! {
            div {
                style: "{row_style}",
                onclick: move |_| state.selection.write().set_file(file.clone()),
                span { style: "width: 12px;" }
                span { "{entry.name}" }
            }
        }
    }
}
