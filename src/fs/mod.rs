//! Filesystem capability used by the actions.
//!
//! Actions never touch `std::fs` directly. They receive a [`FileSystem`]
//! whose paths are relative to the blog root, so tests can swap in the
//! in-memory implementation.

mod disk;
#[cfg(test)]
mod memory;

pub use disk::DiskFs;
#[cfg(test)]
pub use memory::MemoryFs;

use crate::error::Result;
use std::path::Path;

/// The operations scaffolding needs from a filesystem.
pub trait FileSystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create `path` and all missing parents. Succeeds if it already exists.
    fn mkdir_all(&self, path: &Path) -> Result<()>;

    /// Create `path` holding `content`. The file must not exist yet.
    ///
    /// Fails with [`crate::error::BlogError::AlreadyExists`] when something is
    /// already at `path`. If writing fails after the file was created, the
    /// file is removed again before the error is returned.
    fn create_new(&self, path: &Path, content: &str) -> Result<()>;
}
