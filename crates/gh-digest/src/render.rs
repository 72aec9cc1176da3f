// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown digest rendering
//!
//! The digest is a YAML-style metadata block followed by one section per
//! activity category. Repositories are listed in lexicographic order and
//! each repository's records newest first, so identical input always
//! renders to identical output.

use gh_digest_activity::prelude::*;

/// Heading at the top of every digest
pub const DIGEST_TITLE: &str = "# Weekly GitHub Activity";

/// Delimiter line around the metadata block
const METADATA_FENCE: &str = "---";

/// Indent placed before body blockquote lines
const BODY_INDENT: &str = "  ";

/// Options controlling digest rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label naming the export (usually the export directory's name)
    pub source: String,
    /// Render issue and PR bodies as blockquotes
    pub include_body: bool,
}

impl RenderOptions {
    /// Create options for a source label, without bodies
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            include_body: false,
        }
    }

    /// Enable or disable body rendering
    #[must_use]
    pub fn with_body(mut self, include_body: bool) -> Self {
        self.include_body = include_body;
        self
    }
}

/// Render classified activity as a Markdown digest
#[must_use]
pub fn render_markdown(activity: &Activity, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    lines.push(METADATA_FENCE.to_string());
    lines.push(format!("period: {}", period_label(activity)));
    lines.push(format!("source: {}", options.source));
    for category in Category::ALL {
        lines.push(format!(
            "{}: {}",
            category.metadata_key(),
            activity.total(category)
        ));
    }
    lines.push(METADATA_FENCE.to_string());
    lines.push(String::new());
    lines.push(DIGEST_TITLE.to_string());
    lines.push(String::new());

    let include_body = options.include_body;

    render_section(&mut lines, activity, Category::Commits, &activity.commits, |c, out| {
        out.push(format!("- {}{}", c.message, date_part(c)));
    });

    render_section(
        &mut lines,
        activity,
        Category::IssuesCreated,
        &activity.issues_created,
        |issue, out| {
            out.push(format!(
                "- {}{}{}",
                issue.title,
                date_part(issue),
                state_part(&issue.state)
            ));
            if include_body {
                out.extend(format_body(issue.body.as_deref()));
            }
        },
    );

    render_section(
        &mut lines,
        activity,
        Category::IssuesCommented,
        &activity.issues_commented,
        |issue, out| {
            out.push(format!("- {}{}", issue.title, state_part(&issue.state)));
        },
    );

    render_section(
        &mut lines,
        activity,
        Category::PrsCreated,
        &activity.prs_created,
        |pr, out| {
            let state = if pr.merged {
                " [merged]".to_string()
            } else {
                state_part(&pr.state)
            };
            out.push(format!("- {}{}{}", pr.title, date_part(pr), state));
            if include_body {
                out.extend(format_body(pr.body.as_deref()));
            }
        },
    );

    render_section(
        &mut lines,
        activity,
        Category::PrsReviewed,
        &activity.prs_reviewed,
        |pr, out| {
            out.push(format!("- {}{}", pr.title, state_part(&pr.state)));
        },
    );

    lines.join("\n")
}

/// Render one category: heading, then each repository's records or `None`
fn render_section<T>(
    lines: &mut Vec<String>,
    activity: &Activity,
    category: Category,
    group: &RepoGroup<T>,
    mut render_record: impl FnMut(&T, &mut Vec<String>),
) {
    lines.push(format!(
        "## {} ({})",
        category.title(),
        activity.total(category)
    ));
    lines.push(String::new());

    if group.is_empty() {
        lines.push("None".to_string());
        lines.push(String::new());
        return;
    }

    for (repo, records) in group {
        lines.push(format!("### {repo}"));
        for record in records {
            render_record(record, lines);
        }
        lines.push(String::new());
    }
}

/// The `period` metadata value: `YYYY-MM-DD to YYYY-MM-DD` or `unknown`
#[must_use]
pub fn period_label(activity: &Activity) -> String {
    match activity.period() {
        Some((first, last)) => format!("{} to {}", format_iso_date(&first), format_iso_date(&last)),
        None => "unknown".to_string(),
    }
}

/// ` (Nov 25)`, or nothing when the record has no date
fn date_part(record: &impl Dated) -> String {
    let date = format_short_date(record.date());
    if date.is_empty() {
        String::new()
    } else {
        format!(" ({date})")
    }
}

/// ` [open]`, or nothing for an empty state
fn state_part(state: &str) -> String {
    if state.is_empty() {
        String::new()
    } else {
        format!(" [{state}]")
    }
}

/// Format body text as indented blockquote lines
///
/// Surrounding whitespace is trimmed first; a blank body yields no lines.
#[must_use]
pub fn format_body(body: Option<&str>) -> Vec<String> {
    let Some(body) = body.map(str::trim).filter(|b| !b.is_empty()) else {
        return Vec::new();
    };
    body.split('\n')
        .map(|line| format!("{BODY_INDENT}> {line}"))
        .collect()
}
