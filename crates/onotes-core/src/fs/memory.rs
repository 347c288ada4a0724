//! In-memory filesystem with failure injection

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::NotesFs;
use crate::models::RawEntry;

#[derive(Debug)]
enum Node {
    /// Child names in enumeration order
    Dir(Vec<String>),
    File(String),
}

#[derive(Debug)]
struct MemoryState {
    nodes: HashMap<PathBuf, Node>,
    /// Injected failures, by path
    failures: HashMap<PathBuf, io::ErrorKind>,
    read_dir_calls: usize,
}

/// [`NotesFs`] kept entirely in memory.
///
/// Directory listings come back in insertion order, which lets callers
/// exercise the sort. Paths passed to [`MemoryFs::deny`] fail with
/// `PermissionDenied`, and paths passed to [`MemoryFs::vanish`] with
/// `NotFound`, until [`MemoryFs::allow`] is called.
#[derive(Debug)]
pub struct MemoryFs {
    state: Mutex<MemoryState>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    /// An empty storage root
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(PathBuf::new(), Node::Dir(Vec::new()));
        Self {
            state: Mutex::new(MemoryState {
                nodes,
                failures: HashMap::new(),
                read_dir_calls: 0,
            }),
        }
    }

    /// Add a directory (and its parents)
    #[must_use]
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.lock()
            .insert_dir_all(path.as_ref())
            .unwrap_or_else(|e| panic!("with_dir {}: {e}", path.as_ref().display()));
        self
    }

    /// Add a file with contents (and its parent directories)
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref();
        {
            let mut state = self.lock();
            if let Some(parent) = path.parent() {
                state
                    .insert_dir_all(parent)
                    .unwrap_or_else(|e| panic!("with_file {}: {e}", path.display()));
            }
            state
                .put_file(path, contents, true)
                .unwrap_or_else(|e| panic!("with_file {}: {e}", path.display()));
        }
        self
    }

    /// Make every operation on `path` fail with `PermissionDenied`
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.lock().failures.insert(path.into(), io::ErrorKind::PermissionDenied);
    }

    /// Make `path` fail with `NotFound` while its parent still lists it,
    /// as if it were deleted between two reads
    pub fn vanish(&self, path: impl Into<PathBuf>) {
        self.lock().failures.insert(path.into(), io::ErrorKind::NotFound);
    }

    /// Clear a failure set by [`MemoryFs::deny`] or [`MemoryFs::vanish`]
    pub fn allow(&self, path: &Path) {
        self.lock().failures.remove(path);
    }

    #[must_use]
    pub fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lock().nodes.get(path), Some(Node::Dir(_)))
    }

    /// Contents of a file, if `path` is one
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        match self.lock().nodes.get(path) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// How many listings have been served
    #[must_use]
    pub fn read_dir_calls(&self) -> usize {
        self.lock().read_dir_calls
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoryState {
    fn check_allowed(&self, path: &Path) -> io::Result<()> {
        match self.failures.get(path) {
            Some(&kind) => Err(io::Error::new(kind, format!("{kind}: {}", path.display()))),
            None => Ok(()),
        }
    }

    fn link(&mut self, parent: &Path, name: String) {
        if let Some(Node::Dir(children)) = self.nodes.get_mut(parent) {
            children.push(name);
        }
    }

    fn insert_dir_all(&mut self, path: &Path) -> io::Result<()> {
        let mut current = PathBuf::new();
        for component in path.components() {
            let name = component.as_os_str().to_string_lossy().into_owned();
            let parent = current.clone();
            current.push(&name);
            match self.nodes.get(&current) {
                Some(Node::Dir(_)) => {}
                Some(Node::File(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("a file exists at {}", current.display()),
                    ));
                }
                None => {
                    self.nodes.insert(current.clone(), Node::Dir(Vec::new()));
                    self.link(&parent, name);
                }
            }
        }
        Ok(())
    }

    fn put_file(&mut self, path: &Path, contents: &str, overwrite: bool) -> io::Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !matches!(self.nodes.get(parent), Some(Node::Dir(_))) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", parent.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "missing file name"))?;

        match self.nodes.get_mut(path) {
            Some(Node::Dir(_)) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("a directory exists at {}", path.display()),
            )),
            Some(Node::File(existing)) => {
                if !overwrite {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("file exists: {}", path.display()),
                    ));
                }
                contents.clone_into(existing);
                Ok(())
            }
            None => {
                self.nodes
                    .insert(path.to_path_buf(), Node::File(contents.to_string()));
                self.link(parent, name);
                Ok(())
            }
        }
    }
}

impl NotesFs for MemoryFs {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let mut state = self.lock();
        state.read_dir_calls += 1;
        state.check_allowed(path)?;
        let Some(Node::Dir(children)) = state.nodes.get(path) else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            ));
        };
        Ok(children
            .iter()
            .map(|name| RawEntry {
                name: name.clone(),
                is_directory: matches!(state.nodes.get(&path.join(name)), Some(Node::Dir(_))),
            })
            .collect())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        state.check_allowed(path)?;
        state.insert_dir_all(path)
    }

    async fn create_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        state.check_allowed(path)?;
        state.put_file(path, "", false)
    }

    async fn read_text(&self, path: &Path) -> io::Result<String> {
        let state = self.lock();
        state.check_allowed(path)?;
        match state.nodes.get(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            _ => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )),
        }
    }

    async fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut state = self.lock();
        state.check_allowed(path)?;
        state.put_file(path, contents, true)
    }
}
