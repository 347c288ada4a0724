//! Note editor component

use std::path::Path;

use dioxus::prelude::*;
use onotes_core::notification::Notification;
use onotes_core::shortcut::{KeyCombination, Modifier, ShortcutOptions};

use crate::hotkey::use_keyboard_shortcut;
use crate::state::AppState;

/// Plain markdown editor for the active note
///
/// Content is loaded whenever the selection changes and written back on
/// Ctrl+S (Cmd+S on macOS) or the Save button.
#[component]
pub fn NoteEditor() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    // Local state for the editor content
    let mut content = use_signal(String::new);
    let mut dirty = use_signal(|| false);
    let mut load_error = use_signal(|| None::<String>);

    // Reload content when the selected note changes
    use_effect(move || {
        let file = (state.selection)().current().clone();
        dirty.set(false);
        load_error.set(None);

        if file.is_empty() {
            content.set(String::new());
            return;
        }

        let notes = state.notes.peek().clone();
        spawn(async move {
            let result = notes.read_note(Path::new(&file.path)).await;

            // The user may have picked another note meanwhile
            if state.selection.peek().current().path != file.path {
                return;
            }

            match result {
                Ok(text) => content.set(text),
                Err(e) => {
                    tracing::error!("Failed to read {}: {}", file.path, e);
                    content.set(String::new());
                    load_error.set(Some(format!("Could not open {}", file.name)));
                }
            }
        });
    });

    use_keyboard_shortcut(
        vec![
            KeyCombination::ctrl("s"),
            KeyCombination::new("s").with(Modifier::Meta),
        ],
        ShortcutOptions::default(),
        move |_| save_note(state, content, dirty),
    );

    let has_file = !(state.selection)().current().is_empty();
    let is_dirty = dirty();
    let save_opacity = if is_dirty { "1" } else { "0.5" };
    let save_status = if is_dirty { "Unsaved changes" } else { "Saved" };

    rsx! {
        div {
            class: "note-editor",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                min-height: 0;
            ",

            {load_error().map(|message| rsx! {
                div {
                    style: "padding: 8px 16px; font-size: 12px; color: {colors.error};",
                    "{message}"
                }
            })}

            textarea {
                placeholder: "Write something...",
                disabled: !has_file,
                value: "{content}",
                style: "
                    flex: 1;
                    padding: 16px 24px;
                    border: none;
                    outline: none;
                    resize: none;
                    background: transparent;
                    color: {colors.text_primary};
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    font-size: 14px;
                    line-height: 1.6;
                ",
                oninput: move |evt| {
                    content.set(evt.value());
                    dirty.set(true);
                },
            }

            if has_file {
                div {
                    style: "
                        display: flex;
                        justify-content: flex-end;
                        align-items: center;
                        gap: 8px;
                        padding: 8px 16px;
                        border-top: 1px solid {colors.border};
                        font-size: 12px;
                        color: {colors.text_muted};
                    ",
                    span { "{save_status}" }
                    button {
                        disabled: !is_dirty,
                        style: "
                            padding: 4px 12px;
                            border: none;
                            border-radius: 6px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            opacity: {save_opacity};
                            cursor: pointer;
                        ",
                        onclick: move |_| save_note(state, content, dirty),
                        "Save"
                    }
                }
            }
        }
    }
}

/// Write the editor content back to the active note
fn save_note(mut state: AppState, content: Signal<String>, mut dirty: Signal<bool>) {
    let file = state.selection.peek().current().clone();
    if file.is_empty() || !*dirty.peek() {
        return;
    }

    let text = content.peek().clone();
    let notes = state.notes.peek().clone();
    spawn(async move {
        match notes.save_note(Path::new(&file.path), &text).await {
            Ok(()) => {
                // Keep the flag if the note was switched or edited meanwhile
                let unchanged = state.selection.peek().current().path == file.path
                    && *content.peek() == text;
                if unchanged {
                    dirty.set(false);
                }
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {}", file.path, e);
                state.notify(Notification::error("Failed to save note", e.to_string()));
            }
        }
    });
}
