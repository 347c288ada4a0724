//! Error types for onotes-core

use std::path::PathBuf;

use thiserror::Error;

use crate::models::EntryKind;

/// Result type alias using onotes-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown in place of the notes tree when a load fails
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load files. Please check permissions.";

/// Errors that can occur in onotes-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory listing failed during a tree walk
    #[error("Failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Creating a note or folder failed after validation passed
    #[error("Failed to create {kind} '{name}': {source}")]
    Creation {
        kind: EntryKind,
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Text suitable for showing to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(_) | Self::Listing { .. } => LOAD_FAILURE_MESSAGE.to_string(),
            Self::Creation { kind, name, source } => {
                if source.kind() == std::io::ErrorKind::AlreadyExists {
                    format!("A {kind} named '{name}' already exists.")
                } else {
                    format!("Could not create {kind} '{name}'.")
                }
            }
            Self::InvalidInput(message) => message.clone(),
            Self::Serialization(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn listing_errors_map_to_permission_message() {
        let error = Error::Listing {
            path: PathBuf::from("notes/Work"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(error.user_message(), LOAD_FAILURE_MESSAGE);
        assert!(error.to_string().contains("notes/Work"));
    }

    #[test]
    fn creation_collision_names_the_entry() {
        let error = Error::Creation {
            kind: EntryKind::Note,
            name: "todo".to_string(),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        assert_eq!(error.user_message(), "A note named 'todo' already exists.");
    }
}
