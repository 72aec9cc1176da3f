//! gh-digest library
//!
//! This module exports the digest pipeline for use in integration tests and
//! as a library: CLI configuration, Markdown rendering, and the run loop
//! that ties them to the file system.

pub mod config;
pub mod pipeline;
pub mod render;

pub use config::{Config, ConfigError};
pub use pipeline::{DigestError, digest_from_slices, generate, run};
pub use render::{RenderOptions, render_markdown};
