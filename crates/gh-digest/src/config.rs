//! Configuration for the gh-digest command
//!
//! This module provides the command-line configuration: which export
//! directory to read, where to write the digest, and logging options.

use std::path::{Path, PathBuf};

use clap::Parser;

/// File name of the digest written into the export directory by default
pub const DEFAULT_OUTPUT_FILE: &str = "summary.md";

/// gh-digest - Turn a GitHub activity export into a Markdown digest
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gh-digest")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory containing the JSON export files (e.g. gh_20251125)
    pub directory: PathBuf,

    /// Output file
    ///
    /// Defaults to summary.md inside the export directory. An existing file
    /// is overwritten.
    #[arg(short, long, env = "GH_DIGEST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Include issue and PR body text as blockquotes under each item
    #[arg(long, default_value = "false")]
    pub include_body: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout only carries the result line.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Create a configuration for an export directory with default options
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Get the output path, defaulting to `<directory>/summary.md`
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.directory.join(DEFAULT_OUTPUT_FILE))
    }

    /// Label naming the export in the digest metadata
    ///
    /// This is the directory's final component, or the directory as given
    /// when it has none (e.g. `.`).
    #[must_use]
    pub fn source_label(&self) -> String {
        source_label(&self.directory)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the export directory does not exist or is not a
    /// directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.directory.exists() {
            return Err(ConfigError::DirectoryNotFound(self.directory.clone()));
        }
        if !self.directory.is_dir() {
            return Err(ConfigError::NotADirectory(self.directory.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

fn source_label(directory: &Path) -> String {
    directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Export directory not found
    #[error("{} is not a directory", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Export path exists but is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
