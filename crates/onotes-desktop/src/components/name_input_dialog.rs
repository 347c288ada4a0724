//! Modal asking for the name of a new note or folder

use dioxus::prelude::*;

use crate::state::AppState;

/// Name prompt opened from the "+" menu
///
/// Submitting closes the dialog at once; the creation itself runs in the
/// background and reports through a toast.
#[component]
pub fn NameInputDialog() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let menu = (state.menu)();
    let dialog = menu.dialog();

    let title = dialog.title();
    let placeholder = dialog.placeholder();
    let value = dialog.value().to_string();
    let can_submit = dialog.can_submit();
    let submit_opacity = if can_submit { "1" } else { "0.5" };

    rsx! {
        div {
            class: "dialog-backdrop",
            style: "
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.4);
            ",
            onclick: move |_| state.menu.write().dialog_mut().cancel(),

            form {
                style: "
                    width: 380px;
                    padding: 20px;
                    border: 1px solid {colors.border};
                    border-radius: 10px;
                    background: {colors.bg_panel};
                    color: {colors.text_primary};
                ",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        state.menu.write().dialog_mut().cancel();
                    }
                },
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let request = state.menu.write().dialog_mut().submit();
                    if let Some(request) = request {
                        state.create_entry(request);
                    }
                },

                h2 {
                    style: "margin: 0 0 12px; font-size: 16px; font-weight: 600;",
                    "{title}"
                }

                input {
                    r#type: "text",
                    autofocus: true,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        padding: 8px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_app};
                        color: {colors.text_primary};
                    ",
                    oninput: move |evt| state.menu.write().dialog_mut().set_value(evt.value()),
                }

                div {
                    style: "
                        display: flex;
                        justify-content: flex-end;
                        gap: 8px;
                        margin-top: 16px;
                    ",
                    button {
                        r#type: "button",
                        style: "
                            padding: 6px 14px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: transparent;
                            color: {colors.text_primary};
                            cursor: pointer;
                        ",
                        onclick: move |_| state.menu.write().dialog_mut().cancel(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        disabled: !can_submit,
                        style: "
                            padding: 6px 14px;
                            border: none;
                            border-radius: 6px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            opacity: {submit_opacity};
                            cursor: pointer;
                        ",
                        "Create"
                    }
                }
            }
        }
    }
}
