// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Export file loading
//!
//! Each export file is expected to hold a JSON array of objects. Missing
//! categories are normal (not everyone reviews PRs every week), so the
//! infallible loaders turn every failure into an empty item list.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ActivityError;

/// Parse export bytes into raw JSON items
///
/// Empty or whitespace-only input and a top-level `null` yield no items.
///
/// # Errors
///
/// Returns `ActivityError::JsonParse` for malformed JSON and
/// `ActivityError::NotAnArray` when the top-level value is not an array.
pub fn parse_items(bytes: &[u8]) -> Result<Vec<Value>, ActivityError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(ActivityError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Read and parse an export file
///
/// # Errors
///
/// Returns `ActivityError::Io` if the file cannot be read, or any error
/// from [`parse_items`].
pub fn read_items(path: impl AsRef<Path>) -> Result<Vec<Value>, ActivityError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ActivityError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_items(&bytes)
}

/// Read an export file, treating any failure as "no items"
#[must_use]
pub fn load_items(path: impl AsRef<Path>) -> Vec<Value> {
    let path = path.as_ref();
    match read_items(path) {
        Ok(items) => {
            debug!(path = %path.display(), count = items.len(), "Loaded export file");
            items
        }
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "Export file not present, skipping");
            Vec::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable export file");
            Vec::new()
        }
    }
}

/// Parse in-memory export bytes, treating any failure as "no items"
#[must_use]
pub fn items_from_slice(bytes: &[u8]) -> Vec<Value> {
    parse_items(bytes).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring malformed export data");
        Vec::new()
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
