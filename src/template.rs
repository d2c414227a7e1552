//! Stub templates for new posts and pages.
//!
//! A stub is plain text with up to three placeholder tokens: `$title`,
//! `$date` and `$category`. Only the first occurrence of each token is
//! substituted, and substitution happens in a single pass over the stub,
//! so a title that itself contains `$date` is written verbatim.

use crate::error::Result;
use crate::fs::FileSystem;
use std::path::Path;

pub const TITLE_TOKEN: &str = "$title";
pub const DATE_TOKEN: &str = "$date";
pub const CATEGORY_TOKEN: &str = "$category";

/// Built-in post stub written by `start`.
pub const DEFAULT_POST_STUB: &str = r#"---
layout: post
title: "$title"
date: $date
categories: $category
---

"#;

/// Built-in page stub written by `start`.
pub const DEFAULT_PAGE_STUB: &str = r#"---
layout: page
title: "$title"
date: $date
category: $category
---

"#;

/// Values substituted into a stub.
#[derive(Debug, Clone)]
pub struct StubValues<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub category: &'a str,
}

/// An immutable stub template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    source: String,
}

impl StubTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read the stub at `path`. Stubs are never cached between invocations.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        Ok(Self::new(fs.read_to_string(path)?))
    }

    /// Substitute the first occurrence of each placeholder.
    ///
    /// The result always ends with a newline.
    pub fn render(&self, values: &StubValues<'_>) -> String {
        let mut hits: Vec<(usize, &str, &str)> = [
            (TITLE_TOKEN, values.title),
            (DATE_TOKEN, values.date),
            (CATEGORY_TOKEN, values.category),
        ]
        .into_iter()
        .filter_map(|(token, value)| self.source.find(token).map(|pos| (pos, token, value)))
        .collect();
        hits.sort_by_key(|(pos, _, _)| *pos);

        let mut rendered = String::with_capacity(self.source.len() + values.title.len());
        let mut cursor = 0;
        for (pos, token, value) in hits {
            rendered.push_str(&self.source[cursor..pos]);
            rendered.push_str(value);
            cursor = pos + token.len();
        }
        rendered.push_str(&self.source[cursor..]);

        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        rendered
    }
}
