// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Digest generation pipeline
//!
//! One run is a single sequential pass: load the five export files, classify
//! them, render the digest, and write it out. [`digest_from_slices`] runs the
//! same transformation on in-memory buffers without touching the file
//! system.

use std::path::PathBuf;

use gh_digest_activity::{Activity, ActivityItems, Category};
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::render::{RenderOptions, render_markdown};

/// Errors that abort a digest run
#[derive(Debug, Error)]
pub enum DigestError {
    /// The configuration is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The digest could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// The output path
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Render a digest from in-memory export buffers
///
/// `bytes` supplies the raw contents of each category's export file; an
/// empty slice stands for a missing file.
pub fn digest_from_slices<'a>(
    bytes: impl FnMut(Category) -> &'a [u8],
    options: &RenderOptions,
) -> String {
    let items = ActivityItems::from_slices(bytes);
    render_markdown(&Activity::classify(&items), options)
}

/// Render the digest for the export directory named by `config`
///
/// # Errors
///
/// Returns `DigestError::Config` if the export directory is not a directory.
pub fn generate(config: &Config) -> Result<String, DigestError> {
    config.validate()?;

    let items = ActivityItems::load_dir(&config.directory);
    let activity = Activity::classify(&items);

    for category in Category::ALL {
        info!(
            category = category.metadata_key(),
            total = activity.total(category),
            "Classified export"
        );
    }

    let options = RenderOptions::new(config.source_label()).with_body(config.include_body);
    Ok(render_markdown(&activity, &options))
}

/// Generate the digest and write it to the configured output path
///
/// Nothing is written when the export directory is invalid. An existing
/// output file is overwritten.
///
/// # Errors
///
/// Returns `DigestError::Config` if the export directory is not a directory,
/// or `DigestError::Write` if the output file cannot be written.
pub fn run(config: &Config) -> Result<PathBuf, DigestError> {
    let markdown = generate(config)?;
    let output = config.output_path();

    std::fs::write(&output, markdown.as_bytes()).map_err(|source| DigestError::Write {
        path: output.clone(),
        source,
    })?;

    info!(path = %output.display(), bytes = markdown.len(), "Wrote digest");
    Ok(output)
}
