//! "+" button offering new notes and folders

use dioxus::prelude::*;
use onotes_core::models::EntryKind;

use crate::state::AppState;

/// Popover trigger next to the "Notes" label
#[component]
pub fn PlusItem() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let popover_open = (state.menu)().is_open();

    rsx! {
        div {
            style: "position: relative;",

            button {
                title: "New note or folder",
                style: "
                    width: 22px;
                    height: 22px;
                    border: none;
                    border-radius: 4px;
                    background: transparent;
                    color: {colors.text_muted};
                    cursor: pointer;
                    font-size: 16px;
                    line-height: 1;
                ",
                onclick: move |_| state.menu.write().toggle(),
                "+"
            }

            if popover_open {
                // Clicking anywhere else closes the popover
                div {
                    style: "position: fixed; inset: 0; z-index: 9;",
                    onclick: move |_| state.menu.write().set_open(false),
                }
                div {
                    style: "
                        position: absolute;
                        right: 0;
                        top: 26px;
                        z-index: 10;
                        min-width: 140px;
                        padding: 4px;
                        border: 1px solid {colors.border};
                        border-radius: 8px;
                        background: {colors.bg_panel};
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                    ",
                    MenuItem {
                        label: "New Note",
                        onclick: move |_| state.menu.write().select(EntryKind::Note),
                    }
                    MenuItem {
                        label: "New Folder",
                        onclick: move |_| state.menu.write().select(EntryKind::Folder),
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItem(label: String, onclick: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "
                padding: 6px 10px;
                border-radius: 6px;
                cursor: pointer;
                font-size: 13px;
                color: {colors.text_primary};
            ",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
