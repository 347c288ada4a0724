//! Keyboard shortcut dispatch
//!
//! A [`ShortcutRegistry`] holds every live binding for a window. Key-down
//! events are fed to [`ShortcutRegistry::dispatch`], which reports whether
//! the default action should be suppressed and runs the matching callbacks.
//! Bindings live exactly as long as their [`ShortcutHandle`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A modifier key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl Modifier {
    pub const ALL: [Self; 4] = [Self::Ctrl, Self::Alt, Self::Shift, Self::Meta];

    const fn label(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
            Self::Meta => "Meta",
        }
    }
}

/// A key plus the exact set of modifiers that must be held with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub key: String,
    pub modifiers: Vec<Modifier>,
}

impl KeyCombination {
    /// The bare key with no modifiers
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Vec::new(),
        }
    }

    /// `Ctrl` + `key`
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self::new(key).with(Modifier::Ctrl)
    }

    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// Keys compare case-insensitively; every modifier must be in exactly
    /// the required state, so `Ctrl+B` does not fire for `Ctrl+Shift+B`.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key.to_lowercase() == self.key.to_lowercase()
            && Modifier::ALL
                .iter()
                .all(|m| self.modifiers.contains(m) == event.is_pressed(*m))
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in Modifier::ALL {
            if self.modifiers.contains(&modifier) {
                write!(f, "{}+", modifier.label())?;
            }
        }
        f.write_str(&self.key.to_uppercase())
    }
}

/// A key-down as seen by the window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Generated by holding the key down
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Ctrl => self.ctrl = true,
            Modifier::Alt => self.alt = true,
            Modifier::Shift => self.shift = true,
            Modifier::Meta => self.meta = true,
        }
        self
    }

    #[must_use]
    pub const fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    #[must_use]
    pub const fn is_pressed(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Shift => self.shift,
            Modifier::Meta => self.meta,
        }
    }
}

/// Per-binding behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ShortcutOptions {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    /// Fire on auto-repeated key-downs too
    pub repeat: bool,
    pub enabled: bool,
}

impl Default for ShortcutOptions {
    fn default() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
            repeat: false,
            enabled: true,
        }
    }
}

/// What the caller should do with the event after dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of bindings whose callback ran
    pub matched: usize,
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

type Callback = Rc<RefCell<Box<dyn FnMut(&KeyEvent)>>>;

fn boxed(callback: impl FnMut(&KeyEvent) + 'static) -> Callback {
    let callback: Box<dyn FnMut(&KeyEvent)> = Box::new(callback);
    Rc::new(RefCell::new(callback))
}

struct Binding {
    id: u64,
    combinations: Vec<KeyCombination>,
    options: ShortcutOptions,
    callback: Callback,
}

impl Binding {
    fn accepts(&self, event: &KeyEvent) -> bool {
        self.options.enabled
            && (self.options.repeat || !event.repeat)
            && self.combinations.iter().any(|combo| combo.matches(event))
    }
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    bindings: Vec<Binding>,
}

/// All shortcut bindings for one window
#[derive(Clone, Default)]
pub struct ShortcutRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PartialEq for ShortcutRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ShortcutRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a binding. It stays attached until the handle is dropped.
    pub fn register(
        &self,
        combinations: impl Into<Vec<KeyCombination>>,
        options: ShortcutOptions,
        callback: impl FnMut(&KeyEvent) + 'static,
    ) -> ShortcutHandle {
        let combinations = combinations.into();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;

        tracing::debug!(
            "Registered shortcut #{}: {}",
            id,
            combinations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        inner.bindings.push(Binding {
            id,
            combinations,
            options,
            callback: boxed(callback),
        });

        ShortcutHandle {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Number of attached bindings
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    /// Run every binding that accepts `event`.
    ///
    /// Callbacks are invoked after the registry borrow is released, so they
    /// may register, drop or reconfigure bindings themselves.
    pub fn dispatch(&self, event: &KeyEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        let callbacks: Vec<Callback> = {
            let inner = self.inner.borrow();
            inner
                .bindings
                .iter()
                .filter(|binding| binding.accepts(event))
                .map(|binding| {
                    outcome.prevent_default |= binding.options.prevent_default;
                    outcome.stop_propagation |= binding.options.stop_propagation;
                    Rc::clone(&binding.callback)
                })
                .collect()
        };

        outcome.matched = callbacks.len();
        for callback in callbacks {
            match callback.try_borrow_mut() {
                Ok(mut callback) => (*callback)(event),
                Err(_) => tracing::warn!("Skipped re-entrant shortcut for {:?}", event.key),
            }
        }
        outcome
    }
}

/// Keeps a binding attached; dropping it detaches the binding
pub struct ShortcutHandle {
    id: u64,
    registry: Weak<RefCell<RegistryInner>>,
}

impl fmt::Debug for ShortcutHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutHandle").field("id", &self.id).finish()
    }
}

impl ShortcutHandle {
    fn with_binding<R>(&self, update: impl FnOnce(&mut Binding) -> R) -> Option<R> {
        let registry = self.registry.upgrade()?;
        let mut inner = registry.borrow_mut();
        let binding = inner.bindings.iter_mut().find(|b| b.id == self.id)?;
        Some(update(binding))
    }

    /// Swap the callback without re-registering the binding
    pub fn set_callback(&self, callback: impl FnMut(&KeyEvent) + 'static) {
        let previous = self.with_binding(|binding| {
            std::mem::replace(&mut binding.callback, boxed(callback))
        });
        // Dropped outside the registry borrow; it may own other handles.
        drop(previous);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.with_binding(|binding| binding.options.enabled = enabled);
    }

    pub fn set_options(&self, options: ShortcutOptions) {
        self.with_binding(|binding| binding.options = options);
    }
}

impl Drop for ShortcutHandle {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut inner = registry.borrow_mut();
        let index = inner.bindings.iter().position(|binding| binding.id == self.id);
        let removed = index.map(|index| inner.bindings.remove(index));
        drop(inner);

        // The binding's callback is released outside the borrow.
        if removed.is_some() {
            tracing::debug!("Unregistered shortcut #{}", self.id);
        }
    }
}
