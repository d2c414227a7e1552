//! Executable actions selected by the first CLI token.
//!
//! [`Action::create`] maps a validated [`ActionType`] to its action;
//! [`Action::execute`] runs it against the injected filesystem and output.

mod draft;
mod scaffold;
mod start;

use draft::DraftKind;

use crate::context::ProcessContext;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::input::ActionType;
use crate::output::Output;

/// A runnable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create the post/page directories and default stubs.
    Start,
    /// Scaffold a dated post.
    Post,
    /// Scaffold a page.
    Page,
}

impl Action {
    /// Select the action for a recognized action type.
    pub fn create(action_type: ActionType) -> Self {
        match action_type {
            ActionType::Start => Action::Start,
            ActionType::Post => Action::Post,
            ActionType::Page => Action::Page,
        }
    }

    /// Run the action. `params` are the positional tokens after the action.
    pub fn execute(
        &self,
        fs: &dyn FileSystem,
        ctx: &ProcessContext,
        out: &dyn Output,
        params: &[String],
    ) -> Result<()> {
        match self {
            Action::Start => start::execute(ctx, fs, out),
            Action::Post => scaffold::execute(DraftKind::Post, ctx, fs, out, params),
            Action::Page => scaffold::execute(DraftKind::Page, ctx, fs, out, params),
        }
    }
}
