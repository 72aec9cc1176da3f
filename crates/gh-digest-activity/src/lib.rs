// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gh-digest-activity: GitHub activity export processing for gh-digest
//!
//! This library crate reads the JSON files produced by a GitHub activity
//! export (commits, issues, pull requests), normalizes their dates and
//! fields, and groups the records by repository for rendering.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gh_digest_activity::{Activity, ActivityItems, Category};
//!
//! let items = ActivityItems::load_dir("gh_20251125");
//! let activity = Activity::classify(&items);
//!
//! for (repo, commits) in &activity.commits {
//!     println!("{repo}: {} commits", commits.len());
//! }
//! println!("{} PRs reviewed", activity.total(Category::PrsReviewed));
//! ```

pub mod activity;
pub mod classify;
pub mod date;
pub mod error;
pub mod loader;
pub mod record;

pub use activity::{Activity, ActivityItems, Category};
pub use classify::{RepoGroup, UNKNOWN_REPOSITORY};
pub use date::Timestamp;
pub use error::ActivityError;
pub use record::{CommitRecord, IssueRecord, PullRequestRecord};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::activity::{Activity, ActivityItems, Category};
    pub use crate::classify::RepoGroup;
    pub use crate::date::{Timestamp, format_iso_date, format_short_date};
    pub use crate::error::ActivityError;
    pub use crate::record::{CommitRecord, Dated, IssueRecord, PullRequestRecord};
}
