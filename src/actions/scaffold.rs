//! Creating a new post or page from its stub.

use super::draft::{DraftKind, PostDraft};
use crate::context::ProcessContext;
use crate::error::{BlogError, Result};
use crate::fs::FileSystem;
use crate::input::ActionType;
use crate::output::Output;
use crate::template::StubTemplate;

/// Scaffold a post or page.
///
/// `params` are `[title, category?]`. Nothing is written when the target
/// already exists, even if it appears after the early check, and success is
/// only reported after the file is on disk.
pub(super) fn execute(
    kind: DraftKind,
    ctx: &ProcessContext,
    fs: &dyn FileSystem,
    out: &dyn Output,
    params: &[String],
) -> Result<()> {
    let action = action_type(kind);
    let title = params
        .first()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            BlogError::UserError(format!(
                "{} requires a {}",
                action,
                action.param_names().join(", ")
            ))
        })?;
    let category = params.get(1).map(String::as_str);

    out.info(&format!("Creating new {}: {}", kind.noun(), title));

    let draft = PostDraft::new(kind, &ctx.config, title, category, ctx.now)?;
    let target = draft.target_path.display().to_string();

    if draft.collides(fs) {
        return Err(BlogError::AlreadyExists {
            kind: kind.label().to_string(),
            path: target,
        });
    }

    let stub = StubTemplate::load(fs, &kind.stub_path(&ctx.config))?;
    let date = draft.date_stamp();
    let content = stub.render(&draft.stub_values(&date));

    fs.mkdir_all(&draft.target_directory)?;
    fs.create_new(&draft.target_path, &content)
        .map_err(|e| match e {
            BlogError::AlreadyExists { path, .. } => BlogError::AlreadyExists {
                kind: kind.label().to_string(),
                path,
            },
            e => e,
        })?;

    out.success(&format!("{} Created: {}", kind.label(), target));

    Ok(())
}

fn action_type(kind: DraftKind) -> ActionType {
    match kind {
        DraftKind::Post => ActionType::Post,
        DraftKind::Page => ActionType::Page,
    }
}
