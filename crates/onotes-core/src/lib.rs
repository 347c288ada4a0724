//! onotes-core - Core library for oNotes
//!
//! This crate contains the filesystem seam, data models, notes tree builder,
//! creation flow and keyboard shortcut handling used by the desktop shell.

pub mod config;
pub mod create;
pub mod dialog;
pub mod error;
pub mod fs;
pub mod models;
pub mod notification;
pub mod shortcut;
pub mod state;
pub mod tree;
pub mod util;

pub use error::{Error, Result};
pub use models::{ActiveFile, DirectoryEntry};
