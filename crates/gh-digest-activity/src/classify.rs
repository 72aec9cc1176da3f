// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Record classification
//!
//! Turns raw export items into normalized records grouped by repository.
//! Field lookups are defensive: only JSON strings count as present, and
//! anything else falls back to a documented default so a partial item can
//! never abort a run.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::date::parse_timestamp;
use crate::record::{CommitRecord, Dated, IssueRecord, PullRequestRecord};

/// Repository identifier used when an item names no repository
pub const UNKNOWN_REPOSITORY: &str = "unknown";

/// Records grouped by repository, iterated in lexicographic order
pub type RepoGroup<T> = BTreeMap<String, Vec<T>>;

/// Look up a string at a path of object keys
fn str_at<'a>(item: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(item, |value, key| value.get(key))
        .and_then(Value::as_str)
}

/// Repository of a commit item: `repository.name`, else `unknown`
#[must_use]
pub fn commit_repository(item: &Value) -> String {
    str_at(item, &["repository", "name"])
        .unwrap_or(UNKNOWN_REPOSITORY)
        .to_string()
}

/// Repository of an issue or PR item: `repository.nameWithOwner`, then
/// `repository.name`, else `unknown`
#[must_use]
pub fn owned_repository(item: &Value) -> String {
    str_at(item, &["repository", "nameWithOwner"])
        .or_else(|| str_at(item, &["repository", "name"]))
        .unwrap_or(UNKNOWN_REPOSITORY)
        .to_string()
}

/// Extract a commit record from a raw export item
#[must_use]
pub fn extract_commit(item: &Value) -> CommitRecord {
    let message = str_at(item, &["commit", "message"]).unwrap_or("");
    let date = parse_timestamp(str_at(item, &["commit", "author", "date"]));
    CommitRecord::new(message, date)
}

/// Extract an issue record from a raw export item
#[must_use]
pub fn extract_issue(item: &Value) -> IssueRecord {
    IssueRecord {
        title: str_at(item, &["title"]).unwrap_or("").to_string(),
        state: str_at(item, &["state"]).unwrap_or("").to_lowercase(),
        date: parse_timestamp(str_at(item, &["createdAt"])),
        url: str_at(item, &["url"]).unwrap_or("").to_string(),
        body: str_at(item, &["body"]).map(str::to_string),
    }
}

/// Extract a pull request record from a raw export item
#[must_use]
pub fn extract_pull_request(item: &Value) -> PullRequestRecord {
    PullRequestRecord::new(
        str_at(item, &["title"]).unwrap_or("").to_string(),
        str_at(item, &["state"]).unwrap_or(""),
        parse_timestamp(str_at(item, &["createdAt"])),
        str_at(item, &["url"]).unwrap_or("").to_string(),
        str_at(item, &["body"]).map(str::to_string),
    )
}

/// Group items by repository and order each group newest first
///
/// Records without a date sort after all dated records of their group.
/// The sort is stable, so equal dates keep their input order.
pub fn group_by_repository<T, R, E>(items: &[Value], repository: R, extract: E) -> RepoGroup<T>
where
    T: Dated,
    R: Fn(&Value) -> String,
    E: Fn(&Value) -> T,
{
    let mut grouped: RepoGroup<T> = BTreeMap::new();
    for item in items {
        grouped
            .entry(repository(item))
            .or_default()
            .push(extract(item));
    }
    for records in grouped.values_mut() {
        records.sort_by(|a, b| b.date().cmp(&a.date()));
    }
    grouped
}

/// Classify commit export items
#[must_use]
pub fn group_commits(items: &[Value]) -> RepoGroup<CommitRecord> {
    group_by_repository(items, commit_repository, extract_commit)
}

/// Classify issue export items (created or commented)
#[must_use]
pub fn group_issues(items: &[Value]) -> RepoGroup<IssueRecord> {
    group_by_repository(items, owned_repository, extract_issue)
}

/// Classify pull request export items (created or reviewed)
#[must_use]
pub fn group_pull_requests(items: &[Value]) -> RepoGroup<PullRequestRecord> {
    group_by_repository(items, owned_repository, extract_pull_request)
}
