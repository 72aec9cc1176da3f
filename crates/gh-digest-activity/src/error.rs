// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gh-digest-activity

use thiserror::Error;

/// Errors that can occur while reading an activity export file
#[derive(Debug, Error)]
pub enum ActivityError {
    /// The export file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path that could not be read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The export file is not valid JSON
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The export file holds JSON, but not an array of items
    #[error("Expected a JSON array of items, found {found}")]
    NotAnArray {
        /// Kind of JSON value found at the top level
        found: &'static str,
    },
}

impl ActivityError {
    /// Check whether this error is a missing file
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
