// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for gh-digest
//!
//! These tests use proptest to verify that the digest laws hold for
//! arbitrary exports: ordering, truncation, merged detection, and
//! determinism.

use gh_digest::render::RenderOptions;
use gh_digest::digest_from_slices;
use gh_digest_activity::Category;
use proptest::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary strings including edge cases
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("".to_string()),
        Just(" ".to_string()),
        Just("\t\n\r".to_string()),
        Just("日本語テスト".to_string()),
        Just("emoji 🔥🚀".to_string()),
        Just("[brackets] (parens)".to_string()),
        Just("a".repeat(200)),
        "[a-zA-Z0-9 ]{1,50}",
        ".{0,100}",
    ]
}

/// Generate optional dates, including malformed ones
fn arbitrary_date() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        Just(json!("not a date")),
        (1_600_000_000i64..1_800_000_000i64).prop_map(|secs| {
            json!(
                chrono::DateTime::from_timestamp(secs, 0)
                    .unwrap_or_default()
                    .to_rfc3339()
            )
        }),
    ]
}

fn repo_name() -> impl Strategy<Value = String> {
    "[a-d]{1,2}/[w-z]{1,2}"
}

fn commit_item() -> impl Strategy<Value = Value> {
    (repo_name(), arbitrary_text(), arbitrary_date()).prop_map(|(repo, message, date)| {
        json!({
            "repository": { "name": repo },
            "commit": { "message": message, "author": { "date": date } }
        })
    })
}

fn pr_item() -> impl Strategy<Value = Value> {
    let state = prop_oneof![
        Just("MERGED"),
        Just("merged"),
        Just("Merged"),
        Just("OPEN"),
        Just("CLOSED"),
        Just("merged_with_conflicts"),
        Just("unmerged"),
        Just(""),
    ];
    (repo_name(), "[A-Za-z]{1,20}", state, arbitrary_date()).prop_map(
        |(repo, title, state, date)| {
            json!({
                "repository": { "nameWithOwner": repo },
                "title": title,
                "state": state,
                "createdAt": date,
                "body": "body text"
            })
        },
    )
}

fn render(commits: &[Value], prs: &[Value], include_body: bool) -> String {
    let commits = serde_json::to_vec(commits).expect("serialize commits");
    let prs = serde_json::to_vec(prs).expect("serialize prs");
    digest_from_slices(
        |category| match category {
            Category::Commits => commits.as_slice(),
            Category::PrsCreated => prs.as_slice(),
            _ => b"".as_slice(),
        },
        &RenderOptions::new("gh_prop").with_body(include_body),
    )
}

/// Repository headings of one section, in output order
fn section_repositories(markdown: &str, title: &str) -> Vec<String> {
    let header = format!("## {title} (");
    markdown
        .lines()
        .skip_while(|line| !line.starts_with(&header))
        .skip(1)
        .take_while(|line| !line.starts_with("## "))
        .filter_map(|line| line.strip_prefix("### ").map(str::to_string))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: rendering the same export twice yields identical output
    #[test]
    fn prop_digest_is_deterministic(
        commits in proptest::collection::vec(commit_item(), 0..20),
        prs in proptest::collection::vec(pr_item(), 0..20),
        include_body in any::<bool>(),
    ) {
        prop_assert_eq!(
            render(&commits, &prs, include_body),
            render(&commits, &prs, include_body)
        );
    }

    /// Property: repositories are listed lexicographically regardless of input order
    #[test]
    fn prop_repositories_sorted(
        commits in proptest::collection::vec(commit_item(), 1..20),
    ) {
        let forward = render(&commits, &[], false);
        let mut reversed = commits.clone();
        reversed.reverse();
        let backward = render(&reversed, &[], false);

        let repos = section_repositories(&forward, "Commits");
        let mut sorted = repos.clone();
        sorted.sort();
        prop_assert_eq!(&repos, &sorted);
        prop_assert_eq!(repos, section_repositories(&backward, "Commits"));
    }

    /// Property: commit list lines never carry a subject longer than 80 characters
    #[test]
    fn prop_commit_lines_truncated(
        commits in proptest::collection::vec(commit_item(), 1..10),
    ) {
        let markdown = render(&commits, &[], false);
        let body = markdown.split("## Commits").nth(1).unwrap_or("");
        let section = body.split("## Issues Created").next().unwrap_or("");
        for line in section.lines().filter(|l| l.starts_with("- ")) {
            let subject = line.trim_start_matches("- ");
            let subject = match subject.rfind(" (") {
                Some(idx) if subject.ends_with(')') => &subject[..idx],
                _ => subject,
            };
            prop_assert!(subject.chars().count() <= 80, "too long: {}", subject);
        }
    }

    /// Property: the merged tag appears once per PR whose state is exactly "merged"
    #[test]
    fn prop_merged_tag_count(prs in proptest::collection::vec(pr_item(), 0..20)) {
        let markdown = render(&[], &prs, false);
        let expected = prs
            .iter()
            .filter(|pr| pr["state"].as_str().is_some_and(|s| s.to_lowercase() == "merged"))
            .count();
        prop_assert_eq!(markdown.matches(" [merged]\n").count(), expected);
    }

    /// Property: the section counts in the metadata match the number of items
    #[test]
    fn prop_metadata_counts_match(
        commits in proptest::collection::vec(commit_item(), 0..20),
        prs in proptest::collection::vec(pr_item(), 0..20),
    ) {
        let markdown = render(&commits, &prs, true);
        let commits_line = format!("commits: {}\n", commits.len());
        let prs_line = format!("prs_created: {}\n", prs.len());
        prop_assert!(markdown.contains(&commits_line));
        prop_assert!(markdown.contains(&prs_line));
        prop_assert!(markdown.ends_with('\n'));
        prop_assert!(!markdown.ends_with("\n\n"));
    }
}

#[test]
fn test_undated_records_sort_last() {
    let commits = vec![
        json!({"repository": {"name": "app"}, "commit": {"message": "undated"}}),
        json!({"repository": {"name": "app"}, "commit": {"message": "dated", "author": {"date": "2025-11-20T10:00:00Z"}}}),
    ];
    let markdown = render(&commits, &[], false);
    assert!(markdown.contains("### app\n- dated (Nov 20)\n- undated\n"));
}
