//! Config struct definition and default implementation.

use serde::Deserialize;

/// Name of the config file looked up at the blog root.
pub const CONFIG_FILE_NAME: &str = "blog.yaml";

/// Configuration for the blog scaffolder.
///
/// This struct represents the contents of `blog.yaml`. Every path is
/// relative to the blog root. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Layout
    // =========================================================================
    /// Directory that holds dated posts (default: "_posts").
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// Directory that holds pages (default: "_pages").
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    // =========================================================================
    // Stubs
    // =========================================================================
    /// Stub template for new posts.
    #[serde(default = "default_post_stub")]
    pub post_stub: String,

    /// Stub template for new pages.
    #[serde(default = "default_page_stub")]
    pub page_stub: String,
}

fn default_posts_dir() -> String {
    "_posts".to_string()
}
fn default_pages_dir() -> String {
    "_pages".to_string()
}
fn default_post_stub() -> String {
    "zx/stubs/post.stub".to_string()
}
fn default_page_stub() -> String {
    "zx/stubs/page.stub".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            pages_dir: default_pages_dir(),
            post_stub: default_post_stub(),
            page_stub: default_page_stub(),
        }
    }
}
