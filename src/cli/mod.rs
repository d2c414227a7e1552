//! CLI argument parsing for blog.
//!
//! Uses clap derive macros for the global flags. The action itself
//! (`start`, `post`, `page`) and its parameters are collected verbatim and
//! validated by the `input` module, so an unknown action produces the
//! blog's own message instead of a clap usage error.

use clap::Parser;
use std::path::PathBuf;

/// Blog: scaffold new posts and pages for a Jekyll-style blog.
///
/// Actions:
/// - start                     create the post/page directories and stubs
/// - post <title> [category]   create `_posts/[category/]<date>-<slug>.md`
/// - page <title> [category]   create `_pages/[category/]<slug>.md`
#[derive(Parser, Debug)]
#[command(name = "blog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Blog root directory (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file relative to the root (defaults to blog.yaml when present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Action followed by its parameters.
    #[arg(value_name = "ACTION", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
