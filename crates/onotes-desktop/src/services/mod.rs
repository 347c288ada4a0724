//! Application services
//!
//! Shared access to the notes on disk.

mod notes;

pub use notes::NotesService;
