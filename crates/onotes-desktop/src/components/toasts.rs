//! Transient notifications

use dioxus::prelude::*;
use onotes_core::notification::Notification;

use crate::state::AppState;

/// Stack of toasts in the bottom-right corner
#[component]
pub fn Toasts() -> Element {
    let state = use_context::<AppState>();
    let notifications = (state.notifications)();

    rsx! {
        div {
            style: "
                position: fixed;
                right: 16px;
                bottom: 16px;
                z-index: 60;
                display: flex;
                flex-direction: column;
                gap: 8px;
            ",
            for notification in notifications {
                Toast { key: "{notification.id}", notification }
            }
        }
    }
}

#[component]
fn Toast(notification: Notification) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let accent = if notification.is_error() {
        colors.error
    } else {
        colors.success
    };
    let id = notification.id;

    rsx! {
        div {
            style: "
                min-width: 240px;
                max-width: 320px;
                padding: 10px 14px;
                border: 1px solid {colors.border};
                border-left: 3px solid {accent};
                border-radius: 8px;
                background: {colors.bg_panel};
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                cursor: pointer;
            ",
            onclick: move |_| state.dismiss(id),
            div { style: "font-weight: 600;", "{notification.title}" }
            div {
                style: "font-size: 12px; color: {colors.text_muted};",
                "{notification.description}"
            }
        }
    }
}
