//! Title bar above the editor

use dioxus::prelude::*;

use crate::state::AppState;

/// Shows the active note's name, or "untitled" before one is picked
#[component]
pub fn Topbar() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let selection = (state.selection)();
    let file = selection.current();

    let title = if file.is_empty() {
        "untitled".to_string()
    } else {
        file.name.clone()
    };

    rsx! {
        header {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                height: 44px;
                padding: 0 16px;
                border-bottom: 1px solid {colors.border};
            ",
            span { style: "font-weight: 500;", "{title}" }
            if !file.is_empty() {
                span {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "{file.path}"
                }
            }
        }
    }
}
