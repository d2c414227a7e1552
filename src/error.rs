//! Error types for the blog CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for blog operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum BlogError {
    /// The action tokens did not pass validation. Holds every message.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The computed target file is already present.
    #[error("{kind} already exists at {path}")]
    AlreadyExists { kind: String, path: String },

    /// Reading a stub or writing the scaffolded file failed.
    #[error("{0}")]
    Io(String),
}

impl BlogError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::Validation(_) => exit_codes::USER_ERROR,
            BlogError::UserError(_) => exit_codes::USER_ERROR,
            BlogError::AlreadyExists { .. } => exit_codes::ALREADY_EXISTS,
            BlogError::Io(_) => exit_codes::IO_FAILURE,
        }
    }

    /// The lines to report to the user, one `Error:` line each.
    pub fn messages(&self) -> Vec<String> {
        match self {
            BlogError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Result type alias for blog operations.
pub type Result<T> = std::result::Result<T, BlogError>;
