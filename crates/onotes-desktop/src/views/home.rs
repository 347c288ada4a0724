//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{NameInputDialog, NavDialog, NoteEditor, Sidebar, Toasts, Topbar};
use crate::state::AppState;

/// Home view component - sidebar, editor and overlays
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; height: 100vh;",

            Sidebar {}

            main {
                class: "main-content",
                style: "
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    min-width: 0;
                    background: {colors.bg_panel};
                ",

                Topbar {}
                NoteEditor {}
            }

            if (state.menu)().dialog().is_open() {
                NameInputDialog {}
            }

            if (state.nav_open)() {
                NavDialog {}
            }

            Toasts {}
        }
    }
}
