//! Blog: scaffolding helper for a Jekyll-style blog.
//!
//! This is the main entry point for the `blog` CLI. It parses arguments,
//! builds the process context, runs the requested action and maps errors
//! to exit codes.

mod actions;
mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod input;
pub mod output;
pub mod slug;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::ProcessContext;
use fs::DiskFs;
use output::{ConsoleOutput, Output};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = ConsoleOutput::new(!cli.no_color);

    let result = ProcessContext::from_cli(&cli).and_then(|ctx| {
        let fs = DiskFs::new(ctx.root());
        commands::run(&ctx, &fs, &output)
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            for message in err.messages() {
                output.error(&message);
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
