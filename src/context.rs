//! Per-invocation process context.
//!
//! Everything an action needs from its environment (the action tokens, the
//! blog root, the invocation instant and the configuration) is captured once
//! at startup and passed down explicitly. Components never read `std::env`
//! or the clock on their own.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{BlogError, Result};
use chrono::{DateTime, Utc};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved context for one CLI invocation.
#[derive(Debug, Clone)]
pub struct ProcessContext {
    /// Action token followed by its positional parameters.
    pub args: Vec<String>,

    /// Absolute path to the blog root.
    pub root: PathBuf,

    /// The instant the invocation started; used for file names and `$date`.
    pub now: DateTime<Utc>,

    pub config: Config,
}

impl ProcessContext {
    /// Build the context from parsed CLI arguments.
    ///
    /// The root defaults to the current working directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => env::current_dir().map_err(|e| {
                BlogError::UserError(format!("failed to get current working directory: {}", e))
            })?,
        };

        if !root.is_dir() {
            return Err(BlogError::UserError(format!(
                "blog root '{}' is not a directory",
                root.display()
            )));
        }

        let config = Config::resolve(&root, cli.config.as_deref())?;

        Ok(Self::new(cli.args.clone(), root, Utc::now(), config))
    }

    pub fn new(args: Vec<String>, root: PathBuf, now: DateTime<Utc>, config: Config) -> Self {
        Self {
            args,
            root,
            now,
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
