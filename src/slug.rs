//! Title slugification for post and page file names.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("Invalid non-word regex"));

static HYPHEN_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid hyphen regex"));

/// Combining Diacritical Marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Convert a title into a filename-safe slug.
///
/// Decomposes the text (NFD), drops combining diacritics, lower-cases,
/// trims, turns whitespace runs into single hyphens, removes everything
/// outside `[A-Za-z0-9_-]` and collapses hyphen runs. Leading and trailing
/// hyphens are stripped, so the result is either empty or starts and ends
/// with a word character.
///
/// ```text
/// "Café Déjà Vu"  -> "cafe-deja-vu"
/// "Hello, World!" -> "hello-world"
/// "!!!"           -> ""
/// ```
pub fn slugify(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = stripped.to_lowercase();

    let hyphenated = WHITESPACE_REGEX.replace_all(lowered.trim(), "-");
    let cleaned = NON_WORD_REGEX.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN_REGEX.replace_all(&cleaned, "-");

    collapsed.trim_matches('-').to_string()
}
