//! Host filesystem capability
//!
//! Every path handed to a [`NotesFs`] is relative to the application's
//! private storage root. The tree builder and the creation flow only ever
//! talk to this trait, so tests can swap the disk for [`MemoryFs`].

mod local;
mod memory;

use std::future::Future;
use std::io;
use std::path::Path;

pub use local::LocalFs;
pub use memory::MemoryFs;

use crate::models::RawEntry;

/// Filesystem operations the notes UI relies on
pub trait NotesFs {
    /// List the immediate entries of a directory, in host enumeration order
    fn read_dir(&self, path: &Path) -> impl Future<Output = io::Result<Vec<RawEntry>>>;

    /// Create a directory and any missing parents; succeeds if it exists
    fn create_dir_all(&self, path: &Path) -> impl Future<Output = io::Result<()>>;

    /// Create an empty file, failing with `AlreadyExists` on a collision
    fn create_file(&self, path: &Path) -> impl Future<Output = io::Result<()>>;

    fn read_text(&self, path: &Path) -> impl Future<Output = io::Result<String>>;

    fn write_text(&self, path: &Path, contents: &str) -> impl Future<Output = io::Result<()>>;
}
