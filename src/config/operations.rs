//! Config loading, validation, and path helpers.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{BlogError, Result};
use std::path::{Component, Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(BlogError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BlogError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a blog rooted at `root`.
    ///
    /// An explicitly named file must exist. Otherwise `blog.yaml` at the root
    /// is used when present, and the defaults when it is not.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(root.join(path)),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BlogError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Every configured path must be non-empty, relative, and must not
    /// contain `..` segments.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("posts_dir", &self.posts_dir),
            ("pages_dir", &self.pages_dir),
            ("post_stub", &self.post_stub),
            ("page_stub", &self.page_stub),
        ];

        for (name, value) in fields {
            validate_relative_path(name, value)?;
        }

        Ok(())
    }

    pub fn posts_path(&self) -> PathBuf {
        PathBuf::from(&self.posts_dir)
    }

    pub fn pages_path(&self) -> PathBuf {
        PathBuf::from(&self.pages_dir)
    }

    pub fn post_stub_path(&self) -> PathBuf {
        PathBuf::from(&self.post_stub)
    }

    pub fn page_stub_path(&self) -> PathBuf {
        PathBuf::from(&self.page_stub)
    }
}

fn validate_relative_path(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlogError::UserError(format!(
            "config validation failed: {} must not be empty",
            name
        )));
    }

    let path = Path::new(value);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(BlogError::UserError(format!(
            "config validation failed: {} must be a relative path inside the blog (found '{}')",
            name, value
        )));
    }

    Ok(())
}
