//! Leveled console output.
//!
//! Every user-facing line goes through an [`Output`] sink so actions never
//! print directly. The console sink prefixes each line with its level label
//! and colors it; tests substitute a recording sink.

use colored::{ColoredString, Colorize};
use std::fmt;

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
    Success,
}

impl Level {
    /// The label printed in front of the message.
    pub fn label(self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Error => "Error",
            Level::Success => "Success",
        }
    }

    fn paint(self, line: String) -> ColoredString {
        match self {
            Level::Info => line.blue(),
            Level::Error => line.red(),
            Level::Success => line.green(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format a message with its level label, e.g. `Success: Post Created: ...`.
pub fn format_line(level: Level, message: &str) -> String {
    format!("{}: {}", level.label(), message)
}

/// A sink for leveled user messages.
pub trait Output {
    fn write(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.write(Level::Success, message);
    }
}

/// Writes colored, labeled lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Create a console sink. With `color` false, colors are suppressed
    /// for the whole process.
    pub fn new(color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self
    }
}

impl Output for ConsoleOutput {
    fn write(&self, level: Level, message: &str) {
        println!("{}", level.paint(format_line(level, message)));
    }
}
