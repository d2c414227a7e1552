//! Configuration model for blog.
//!
//! This module defines the Config struct that represents the optional
//! `blog.yaml` at the blog root. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for every field, and validation of
//! the configured paths.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config};
