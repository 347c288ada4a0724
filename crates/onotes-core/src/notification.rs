//! Transient user-facing notifications

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast shown outside of any dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Unique per process, used to dismiss a specific toast
    pub id: u64,
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn new(level: NotificationLevel, title: String, description: String) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            level,
            title,
            description,
        }
    }

    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title.into(), description.into())
    }

    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title.into(), description.into())
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NotificationLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Notification::success("Note added", "Your note has been added.");
        let b = Notification::error("Failed", "nope");
        assert_ne!(a.id, b.id);
        assert!(!a.is_error());
        assert!(b.is_error());
    }
}
