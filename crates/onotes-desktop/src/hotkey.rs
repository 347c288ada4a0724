//! Window keyboard shortcuts
//!
//! The app root forwards every key-down to the [`ShortcutRegistry`] in
//! context; components bind combinations with [`use_keyboard_shortcut`].

use std::rc::Rc;

use dioxus::prelude::*;
use onotes_core::shortcut::{KeyEvent, KeyCombination, ShortcutOptions, ShortcutRegistry};

/// Translate a Dioxus key-down into the dispatcher's event type
pub fn key_event(data: &KeyboardData) -> KeyEvent {
    let modifiers = data.modifiers();
    KeyEvent {
        key: data.key().to_string(),
        ctrl: modifiers.ctrl(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.meta(),
        repeat: data.is_auto_repeating(),
    }
}

/// Bind `combinations` for as long as the calling component is mounted.
///
/// The binding is registered on first render only. Later renders swap in
/// the fresh callback and options; unmounting drops the handle, which
/// detaches it.
pub fn use_keyboard_shortcut(
    combinations: Vec<KeyCombination>,
    options: ShortcutOptions,
    callback: impl FnMut(&KeyEvent) + 'static,
) {
    let registry = use_context::<ShortcutRegistry>();
    let handle = use_hook(move || Rc::new(registry.register(combinations, options, |_| {})));
    handle.set_options(options);
    handle.set_callback(callback);
}
