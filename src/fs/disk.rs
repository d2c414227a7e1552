//! On-disk filesystem rooted at the blog directory.

use super::FileSystem;
use crate::error::{BlogError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Filesystem backed by the real disk. Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileSystem for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(self.resolve(path)).map_err(|e| {
            BlogError::Io(format!("failed to read '{}': {}", path.display(), e))
        })
    }

    fn mkdir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(self.resolve(path)).map_err(|e| {
            BlogError::Io(format!(
                "failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn create_new(&self, path: &Path, content: &str) -> Result<()> {
        write_new_file(&self.resolve(path), path, |file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
    }
}

/// Exclusively create `full_path` and fill it with `write`.
///
/// `display_path` is the root-relative path used in error messages. On a
/// failed write the half-written file is removed so a retry is not mistaken
/// for a collision.
fn write_new_file(
    full_path: &Path,
    display_path: &Path,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(full_path)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                BlogError::AlreadyExists {
                    kind: "File".to_string(),
                    path: display_path.display().to_string(),
                }
            } else {
                BlogError::Io(format!(
                    "failed to create '{}': {}",
                    display_path.display(),
                    e
                ))
            }
        })?;

    if let Err(e) = write(&mut file) {
        drop(file);
        let _ = fs::remove_file(full_path);
        return Err(BlogError::Io(format!(
            "failed to write '{}': {}",
            display_path.display(),
            e
        )));
    }

    Ok(())
}
