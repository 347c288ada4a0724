//! Data models for oNotes

mod active_file;
mod entry;
mod file_order;

pub use active_file::ActiveFile;
pub use entry::{DirectoryEntry, EntryKind, RawEntry};
pub use file_order::FileOrder;
