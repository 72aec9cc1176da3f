// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Timestamp normalization for exported activity dates
//!
//! GitHub exports mix several ISO 8601 spellings: `Z`-suffixed UTC times,
//! explicit offsets, and occasionally offset-naive values. Everything is
//! normalized to a [`Timestamp`] that orders by instant while keeping the
//! original offset for display.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// A normalized activity timestamp
pub type Timestamp = DateTime<FixedOffset>;

/// Offset-qualified layouts tried after RFC 3339
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Offset-naive layouts, interpreted as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO 8601 date string into a [`Timestamp`]
///
/// A trailing `Z` is treated as `+00:00`. Offset-naive values and bare dates
/// are taken as UTC. Returns `None` for absent, empty, or unparseable input.
#[must_use]
pub fn parse_timestamp(raw: Option<&str>) -> Option<Timestamp> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let normalized = raw.replace('Z', "+00:00");

    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(ts);
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

/// Format a timestamp as abbreviated month and day, e.g. `Nov 25`
///
/// Absent timestamps format as an empty string.
#[must_use]
pub fn format_short_date(ts: Option<&Timestamp>) -> String {
    ts.map(|t| t.format("%b %d").to_string()).unwrap_or_default()
}

/// Format a timestamp as a calendar date, e.g. `2025-11-25`
#[must_use]
pub fn format_iso_date(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}
