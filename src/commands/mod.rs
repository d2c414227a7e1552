//! Top-level command flow for blog.
//!
//! Validates the action tokens, selects the action and runs it. Output and
//! filesystem access are injected so the whole flow is testable in memory.

use crate::actions::Action;
use crate::context::ProcessContext;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::input::ActionRequest;
use crate::output::Output;

/// Printed when `blog` is run without an action.
pub const IDLE_MESSAGE: &str = "Preparation can only take you so far, after that you've got to take a few leaps of faith. - Michael Scofield, Prison Break.";

/// Run one invocation.
///
/// With no action tokens this only prints [`IDLE_MESSAGE`]. Invalid tokens
/// return [`crate::error::BlogError::Validation`] before any action runs.
pub fn run(ctx: &ProcessContext, fs: &dyn FileSystem, out: &dyn Output) -> Result<()> {
    if ctx.args.is_empty() {
        out.info(IDLE_MESSAGE);
        return Ok(());
    }

    let request = ActionRequest::from_args(&ctx.args)?;
    let action = Action::create(request.action_type);

    action.execute(fs, ctx, out, &request.params)
}
