// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The five activity categories of a GitHub export and their classified form

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::classify::{RepoGroup, group_commits, group_issues, group_pull_requests};
use crate::date::Timestamp;
use crate::loader::{items_from_slice, load_items};
use crate::record::{CommitRecord, Dated, IssueRecord, PullRequestRecord};

/// An activity category, one per export file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Commits authored
    Commits,
    /// Issues opened
    IssuesCreated,
    /// Issues commented on
    IssuesCommented,
    /// Pull requests opened
    PrsCreated,
    /// Pull requests reviewed
    PrsReviewed,
}

impl Category {
    /// All categories, in digest order
    pub const ALL: [Category; 5] = [
        Self::Commits,
        Self::IssuesCreated,
        Self::IssuesCommented,
        Self::PrsCreated,
        Self::PrsReviewed,
    ];

    /// Name of the export file holding this category
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Commits => "commits.json",
            Self::IssuesCreated => "issues_created.json",
            Self::IssuesCommented => "issues_commented.json",
            Self::PrsCreated => "prs_created.json",
            Self::PrsReviewed => "prs_reviewed.json",
        }
    }

    /// Human-readable section title
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Commits => "Commits",
            Self::IssuesCreated => "Issues Created",
            Self::IssuesCommented => "Issues Commented",
            Self::PrsCreated => "PRs Created",
            Self::PrsReviewed => "PRs Reviewed",
        }
    }

    /// Key used for this category's total in digest metadata
    #[must_use]
    pub fn metadata_key(&self) -> &'static str {
        match self {
            Self::Commits => "commits",
            Self::IssuesCreated => "issues_created",
            Self::IssuesCommented => "issues_commented",
            Self::PrsCreated => "prs_created",
            Self::PrsReviewed => "prs_reviewed",
        }
    }
}

/// Raw export items for every category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityItems {
    /// Items from `commits.json`
    pub commits: Vec<Value>,
    /// Items from `issues_created.json`
    pub issues_created: Vec<Value>,
    /// Items from `issues_commented.json`
    pub issues_commented: Vec<Value>,
    /// Items from `prs_created.json`
    pub prs_created: Vec<Value>,
    /// Items from `prs_reviewed.json`
    pub prs_reviewed: Vec<Value>,
}

impl ActivityItems {
    /// Build from a per-category source of items
    pub fn from_fn(mut items: impl FnMut(Category) -> Vec<Value>) -> Self {
        Self {
            commits: items(Category::Commits),
            issues_created: items(Category::IssuesCreated),
            issues_commented: items(Category::IssuesCommented),
            prs_created: items(Category::PrsCreated),
            prs_reviewed: items(Category::PrsReviewed),
        }
    }

    /// Load every category's export file from a directory
    ///
    /// Missing or malformed files contribute no items.
    #[must_use]
    pub fn load_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        debug!(path = %dir.display(), "Loading export directory");
        Self::from_fn(|category| load_items(dir.join(category.file_name())))
    }

    /// Parse every category from in-memory export bytes
    ///
    /// Malformed buffers contribute no items.
    pub fn from_slices<'a>(mut bytes: impl FnMut(Category) -> &'a [u8]) -> Self {
        Self::from_fn(|category| items_from_slice(bytes(category)))
    }

    /// Raw items of one category
    #[must_use]
    pub fn get(&self, category: Category) -> &[Value] {
        match category {
            Category::Commits => &self.commits,
            Category::IssuesCreated => &self.issues_created,
            Category::IssuesCommented => &self.issues_commented,
            Category::PrsCreated => &self.prs_created,
            Category::PrsReviewed => &self.prs_reviewed,
        }
    }
}

/// Classified activity: every category grouped by repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    /// Commits by repository
    pub commits: RepoGroup<CommitRecord>,
    /// Issues created by repository
    pub issues_created: RepoGroup<IssueRecord>,
    /// Issues commented on by repository
    pub issues_commented: RepoGroup<IssueRecord>,
    /// Pull requests created by repository
    pub prs_created: RepoGroup<PullRequestRecord>,
    /// Pull requests reviewed by repository
    pub prs_reviewed: RepoGroup<PullRequestRecord>,
}

impl Activity {
    /// Classify raw export items
    #[must_use]
    pub fn classify(items: &ActivityItems) -> Self {
        Self {
            commits: group_commits(&items.commits),
            issues_created: group_issues(&items.issues_created),
            issues_commented: group_issues(&items.issues_commented),
            prs_created: group_pull_requests(&items.prs_created),
            prs_reviewed: group_pull_requests(&items.prs_reviewed),
        }
    }

    /// Number of records in a category, across all repositories
    #[must_use]
    pub fn total(&self, category: Category) -> usize {
        match category {
            Category::Commits => count(&self.commits),
            Category::IssuesCreated => count(&self.issues_created),
            Category::IssuesCommented => count(&self.issues_commented),
            Category::PrsCreated => count(&self.prs_created),
            Category::PrsReviewed => count(&self.prs_reviewed),
        }
    }

    /// Earliest and latest dates among commits and created issues
    ///
    /// Pull requests and commented issues do not widen the period.
    #[must_use]
    pub fn period(&self) -> Option<(Timestamp, Timestamp)> {
        let mut dates = dates(&self.commits).chain(dates(&self.issues_created));
        let first = *dates.next()?;
        Some(dates.fold((first, first), |(min, max), d| (min.min(*d), max.max(*d))))
    }
}

fn count<T>(group: &RepoGroup<T>) -> usize {
    group.values().map(Vec::len).sum()
}

fn dates<T: Dated>(group: &RepoGroup<T>) -> impl Iterator<Item = &Timestamp> {
    group.values().flatten().filter_map(Dated::date)
}
