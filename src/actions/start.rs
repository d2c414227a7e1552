//! Bootstrapping a blog workspace.

use crate::context::ProcessContext;
use crate::error::{BlogError, Result};
use crate::fs::FileSystem;
use crate::output::Output;
use crate::template::{DEFAULT_PAGE_STUB, DEFAULT_POST_STUB};

/// Create the post and page directories and write the default stubs.
///
/// Existing stubs are left alone, so running `start` again is harmless.
pub(super) fn execute(ctx: &ProcessContext, fs: &dyn FileSystem, out: &dyn Output) -> Result<()> {
    let config = &ctx.config;
    out.info("Preparing blog workspace");

    for dir in [config.posts_path(), config.pages_path()] {
        fs.mkdir_all(&dir)?;
        out.info(&format!("Directory ready: {}", dir.display()));
    }

    for (stub_path, default) in [
        (config.post_stub_path(), DEFAULT_POST_STUB),
        (config.page_stub_path(), DEFAULT_PAGE_STUB),
    ] {
        if fs.exists(&stub_path) {
            out.info(&format!("Stub already present: {}", stub_path.display()));
            continue;
        }

        if let Some(parent) = stub_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs.mkdir_all(parent)?;
        }
        match fs.create_new(&stub_path, default) {
            Ok(()) => out.success(&format!("Stub Created: {}", stub_path.display())),
            Err(BlogError::AlreadyExists { .. }) => {
                out.info(&format!("Stub already present: {}", stub_path.display()))
            }
            Err(e) => return Err(e),
        }
    }

    out.success("Blog workspace ready");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fs::MemoryFs;
    use crate::output::Level;
    use crate::test_support::{RecordingOutput, test_context};
    use std::path::Path;

    #[test]
    fn test_start_creates_dirs_and_stubs() {
        let ctx = test_context(&["start"], Config::default());
        let fs = MemoryFs::new();
        let out = RecordingOutput::default();

        execute(&ctx, &fs, &out).unwrap();

        assert!(fs.exists(Path::new("_posts")));
        assert!(fs.exists(Path::new("_pages")));
        assert_eq!(fs.file("zx/stubs/post.stub").unwrap(), DEFAULT_POST_STUB);
        assert_eq!(fs.file("zx/stubs/page.stub").unwrap(), DEFAULT_PAGE_STUB);
        assert_eq!(out.count(Level::Success), 3);
    }

    #[test]
    fn test_start_keeps_existing_stubs() {
        let ctx = test_context(&["start"], Config::default());
        let fs = MemoryFs::new().with_file("zx/stubs/post.stub", "custom $title");
        let out = RecordingOutput::default();

        execute(&ctx, &fs, &out).unwrap();
        execute(&ctx, &fs, &out).unwrap();

        assert_eq!(fs.file("zx/stubs/post.stub").unwrap(), "custom $title");
        assert_eq!(fs.file("zx/stubs/page.stub").unwrap(), DEFAULT_PAGE_STUB);
        assert!(
            out.lines()
                .contains(&"Info: Stub already present: zx/stubs/post.stub".to_string())
        );
    }

    #[test]
    fn test_start_uses_configured_layout() {
        let config = Config {
            posts_dir: "content/posts".to_string(),
            pages_dir: "content/pages".to_string(),
            post_stub: "post.stub".to_string(),
            ..Config::default()
        };
        let ctx = test_context(&["start"], config);
        let fs = MemoryFs::new();
        let out = RecordingOutput::default();

        execute(&ctx, &fs, &out).unwrap();

        assert!(fs.exists(Path::new("content/posts")));
        assert!(fs.exists(Path::new("content/pages")));
        assert!(fs.file("post.stub").is_some());
    }

    #[test]
    fn test_start_write_failure_propagates() {
        let ctx = test_context(&["start"], Config::default());
        let fs = MemoryFs::new();
        fs.set_simulate_write_error(true);
        let out = RecordingOutput::default();

        assert!(execute(&ctx, &fs, &out).is_err());
        assert_eq!(out.count(Level::Success), 0);
    }

    #[test]
    fn test_start_stub_write_failure_leaves_no_stub() {
        let ctx = test_context(&["start"], Config::default());
        let fs = MemoryFs::new();
        fs.set_simulate_file_write_error(true);
        let out = RecordingOutput::default();

        let err = execute(&ctx, &fs, &out).unwrap_err();

        assert!(matches!(err, BlogError::Io(_)));
        assert!(fs.exists(Path::new("_posts")));
        assert!(fs.file("zx/stubs/post.stub").is_none());
        assert_eq!(out.count(Level::Success), 0);
    }
}
