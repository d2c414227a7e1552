//! Exit code constants for the blog CLI.
//!
//! - 0: Success (including the idle path with no action)
//! - 1: User error (invalid action, missing title, bad category or config)
//! - 2: Target file already exists
//! - 3: I/O failure (stub unreadable, directory or file write failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The post or page being scaffolded already exists.
pub const ALREADY_EXISTS: i32 = 2;

/// Reading the stub or writing the new file failed.
pub const IO_FAILURE: i32 = 3;
