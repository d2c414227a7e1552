//! Target path computation for new posts and pages.

use crate::config::Config;
use crate::error::{BlogError, Result};
use crate::fs::FileSystem;
use crate::slug::slugify;
use crate::template::StubValues;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::PathBuf;

/// What kind of file is being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Post,
    Page,
}

impl DraftKind {
    /// Capitalized name used in messages (`Post Created: ...`).
    pub fn label(self) -> &'static str {
        match self {
            DraftKind::Post => "Post",
            DraftKind::Page => "Page",
        }
    }

    /// Lower-case name used in messages (`Creating new post: ...`).
    pub fn noun(self) -> &'static str {
        match self {
            DraftKind::Post => "post",
            DraftKind::Page => "page",
        }
    }

    pub fn base_dir(self, config: &Config) -> PathBuf {
        match self {
            DraftKind::Post => config.posts_path(),
            DraftKind::Page => config.pages_path(),
        }
    }

    pub fn stub_path(self, config: &Config) -> PathBuf {
        match self {
            DraftKind::Post => config.post_stub_path(),
            DraftKind::Page => config.page_stub_path(),
        }
    }
}

/// A post or page about to be written.
///
/// Built fresh for each invocation; only the file it produces persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub target_directory: PathBuf,
    pub file_name: String,
    pub target_path: PathBuf,
}

impl PostDraft {
    /// Compute where a new post or page titled `title` goes.
    ///
    /// Posts are named `<YYYY-MM-DD>-<slug>.md` (UTC date of `created_at`);
    /// pages are named `<slug>.md`. A non-empty category adds a subdirectory.
    pub fn new(
        kind: DraftKind,
        config: &Config,
        title: &str,
        category: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(BlogError::UserError(format!(
                "title '{}' has no letters or digits to build a file name from",
                title
            )));
        }

        let category = category.map(normalize_category).transpose()?.flatten();

        let file_name = match kind {
            DraftKind::Post => format!("{}-{}.md", created_at.format("%Y-%m-%d"), slug),
            DraftKind::Page => format!("{}.md", slug),
        };

        let mut target_directory = kind.base_dir(config);
        if let Some(category) = &category {
            target_directory.push(category);
        }
        let target_path = target_directory.join(&file_name);

        Ok(Self {
            title: title.to_string(),
            category,
            created_at,
            target_directory,
            file_name,
            target_path,
        })
    }

    /// Whether the target file is already present.
    pub fn collides(&self, fs: &dyn FileSystem) -> bool {
        fs.exists(&self.target_path)
    }

    /// ISO-8601 UTC timestamp with millisecond precision, e.g.
    /// `2024-01-15T10:30:00.000Z`.
    pub fn date_stamp(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn stub_values<'a>(&'a self, date: &'a str) -> StubValues<'a> {
        StubValues {
            title: &self.title,
            date,
            category: self.category.as_deref().unwrap_or(""),
        }
    }
}

/// Trim whitespace and surrounding slashes and drop empty segments.
///
/// Returns `Ok(None)` when nothing is left. `.` and `..` segments and
/// backslashes are rejected so a category can never leave its base directory.
fn normalize_category(raw: &str) -> Result<Option<String>> {
    if raw.contains('\\') {
        return Err(BlogError::UserError(format!(
            "invalid category '{}': backslashes are not allowed",
            raw
        )));
    }

    let segments: Vec<&str> = raw
        .trim()
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.iter().any(|s| *s == "." || *s == "..") {
        return Err(BlogError::UserError(format!(
            "invalid category '{}': '.' and '..' segments are not allowed",
            raw
        )));
    }

    if segments.is_empty() {
        Ok(None)
    } else {
        Ok(Some(segments.join("/")))
    }
}
