//! Normalized activity record types

use serde::{Deserialize, Serialize};

use crate::date::Timestamp;

/// Maximum length of a commit subject before it is shortened
pub const MAX_SUBJECT_CHARS: usize = 80;

/// Number of characters kept when a commit subject is shortened
const TRUNCATED_SUBJECT_CHARS: usize = 77;

/// A commit, reduced to its subject line and author date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Author date
    pub date: Option<Timestamp>,
    /// Shortened first line of the commit message
    pub message: String,
}

impl CommitRecord {
    /// Build a record from a raw commit message, shortening it to its subject
    #[must_use]
    pub fn new(message: &str, date: Option<Timestamp>) -> Self {
        Self {
            date,
            message: shorten_subject(message),
        }
    }
}

/// An issue, created or commented on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Issue title
    pub title: String,
    /// Lowercased state (e.g. "open", "closed"), possibly empty
    pub state: String,
    /// Creation date
    pub date: Option<Timestamp>,
    /// Web URL of the issue
    pub url: String,
    /// Issue description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A pull request, created or reviewed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRecord {
    /// Pull request title
    pub title: String,
    /// Lowercased state (e.g. "open", "merged"), possibly empty
    pub state: String,
    /// Creation date
    pub date: Option<Timestamp>,
    /// Web URL of the pull request
    pub url: String,
    /// Pull request description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Whether the state is exactly "merged"
    pub merged: bool,
}

impl PullRequestRecord {
    /// Build a record, lowercasing the state and deriving `merged` from it
    #[must_use]
    pub fn new(
        title: String,
        raw_state: &str,
        date: Option<Timestamp>,
        url: String,
        body: Option<String>,
    ) -> Self {
        let state = raw_state.to_lowercase();
        let merged = state == "merged";
        Self {
            title,
            state,
            date,
            url,
            body,
            merged,
        }
    }
}

/// Records that carry a date used for recency ordering
pub trait Dated {
    /// The record's date, if known
    fn date(&self) -> Option<&Timestamp>;
}

impl Dated for CommitRecord {
    fn date(&self) -> Option<&Timestamp> {
        self.date.as_ref()
    }
}

impl Dated for IssueRecord {
    fn date(&self) -> Option<&Timestamp> {
        self.date.as_ref()
    }
}

impl Dated for PullRequestRecord {
    fn date(&self) -> Option<&Timestamp> {
        self.date.as_ref()
    }
}

/// Reduce a commit message to its first line, trimmed
///
/// Subjects longer than [`MAX_SUBJECT_CHARS`] characters are cut to 77
/// characters followed by `...`.
#[must_use]
pub fn shorten_subject(message: &str) -> String {
    let first_line = message.split('\n').next().unwrap_or("").trim();
    if first_line.chars().count() > MAX_SUBJECT_CHARS {
        let mut short: String = first_line.chars().take(TRUNCATED_SUBJECT_CHARS).collect();
        short.push_str("...");
        short
    } else {
        first_line.to_string()
    }
}
