use crate::config::Config;
use crate::context::ProcessContext;
use crate::output::{Level, Output, format_line};
use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Output sink that keeps every line for assertions.
#[derive(Default)]
pub(crate) struct RecordingOutput {
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingOutput {
    /// Recorded lines formatted as they would be printed, without color.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|(level, message)| format_line(*level, message))
            .collect()
    }

    pub(crate) fn count(&self, level: Level) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }
}

impl Output for RecordingOutput {
    fn write(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

/// Context pinned to 2024-01-15T10:30:00Z with an in-memory root.
pub(crate) fn test_context(args: &[&str], config: Config) -> ProcessContext {
    ProcessContext::new(
        args.iter().map(|s| s.to_string()).collect(),
        PathBuf::from("/blog"),
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        config,
    )
}
