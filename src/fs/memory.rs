use super::FileSystem;
use crate::error::{BlogError, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Uses `RefCell` since the CLI is single-threaded. Directories are tracked
/// explicitly so creating a file in a directory that was never created fails
/// the same way it does on disk.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    simulate_write_error: RefCell<bool>,
    simulate_file_write_error: RefCell<bool>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        self
    }

    /// Make every `mkdir_all` and `create_new` fail.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make only `create_new` fail, after its directory checks pass.
    pub fn set_simulate_file_write_error(&self, simulate: bool) {
        *self.simulate_file_write_error.borrow_mut() = simulate;
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn check_writable(&self, path: &Path) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(BlogError::Io(format!(
                "simulated write error at '{}'",
                path.display()
            )));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.file(path)
            .ok_or_else(|| BlogError::Io(format!("failed to read '{}': not found", path.display())))
    }

    fn mkdir_all(&self, path: &Path) -> Result<()> {
        self.check_writable(path)?;
        self.insert_dirs(path);
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &str) -> Result<()> {
        self.check_writable(path)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !self.dirs.borrow().contains(parent)
        {
            return Err(BlogError::Io(format!(
                "failed to create '{}': parent directory missing",
                path.display()
            )));
        }

        if self.exists(path) {
            return Err(BlogError::AlreadyExists {
                kind: "File".to_string(),
                path: path.display().to_string(),
            });
        }

        if *self.simulate_file_write_error.borrow() {
            return Err(BlogError::Io(format!(
                "failed to write '{}': simulated write error",
                path.display()
            )));
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
