// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gh_digest::render::{RenderOptions, render_markdown};
use gh_digest_activity::{Activity, ActivityItems};
use serde_json::{Value, json};

/// Build an export with `n` items per category across a dozen repositories
fn sample_items(n: usize) -> ActivityItems {
    let issue = |i: usize| -> Value {
        json!({
            "repository": { "nameWithOwner": format!("acme/repo-{}", i % 12) },
            "title": format!("Item {}", i),
            "state": if i % 4 == 0 { "MERGED" } else { "OPEN" },
            "createdAt": format!("2025-11-{:02}T{:02}:00:00Z", 18 + i % 7, i % 24),
            "body": "First line of the description\nSecond line"
        })
    };
    let commit = |i: usize| -> Value {
        json!({
            "repository": { "name": format!("repo-{}", i % 12) },
            "commit": {
                "message": format!("Commit {} touching the renderer and its tests", i),
                "author": { "date": format!("2025-11-{:02}T{:02}:00:00Z", 18 + i % 7, i % 24) }
            }
        })
    };

    ActivityItems {
        commits: (0..n).map(commit).collect(),
        issues_created: (0..n).map(issue).collect(),
        issues_commented: (0..n).map(issue).collect(),
        prs_created: (0..n).map(issue).collect(),
        prs_reviewed: (0..n).map(issue).collect(),
    }
}

fn render_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1000] {
        let activity = Activity::classify(&sample_items(size));
        let plain = RenderOptions::new("gh_bench");
        let with_body = RenderOptions::new("gh_bench").with_body(true);

        group.bench_with_input(BenchmarkId::new("markdown", size), &activity, |b, a| {
            b.iter(|| render_markdown(std::hint::black_box(a), &plain))
        });
        group.bench_with_input(
            BenchmarkId::new("markdown_with_body", size),
            &activity,
            |b, a| b.iter(|| render_markdown(std::hint::black_box(a), &with_body)),
        );
    }

    group.finish();
}

fn classify_benchmarks(c: &mut Criterion) {
    let items = sample_items(500);

    c.bench_function("classify_500_per_category", |b| {
        b.iter(|| Activity::classify(std::hint::black_box(&items)))
    });
}

criterion_group!(benches, render_benchmarks, classify_benchmarks);
criterion_main!(benches);
