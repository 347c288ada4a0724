//! Search dialog toggled with Ctrl+E

use dioxus::prelude::*;

use crate::state::AppState;

/// Search field in a modal. Nothing is searched yet.
#[component]
pub fn NavDialog() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "
                position: fixed;
                inset: 0;
                z-index: 40;
                display: flex;
                justify-content: center;
                padding-top: 15vh;
                background: rgba(0, 0, 0, 0.3);
            ",
            onclick: move |_| state.nav_open.set(false),

            div {
                style: "
                    width: 480px;
                    height: fit-content;
                    padding: 12px;
                    border: 1px solid {colors.border};
                    border-radius: 10px;
                    background: {colors.bg_panel};
                ",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        state.nav_open.set(false);
                    }
                },

                input {
                    r#type: "search",
                    autofocus: true,
                    placeholder: "Search...",
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        padding: 8px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_app};
                        color: {colors.text_primary};
                    ",
                }
            }
        }
    }
}
