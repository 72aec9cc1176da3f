#![no_main]

//! Fuzz target for digest rendering
//!
//! Each category file gets its own arbitrary contents. Rendering must never
//! panic and must always produce the full set of sections.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use gh_digest::digest_from_slices;
use gh_digest::render::RenderOptions;
use gh_digest_activity::Category;

#[derive(Debug, Arbitrary)]
struct FuzzExport {
    commits: Vec<u8>,
    issues_created: Vec<u8>,
    issues_commented: Vec<u8>,
    prs_created: Vec<u8>,
    prs_reviewed: Vec<u8>,
    source: String,
    include_body: bool,
}

fuzz_target!(|export: FuzzExport| {
    let options = RenderOptions::new(export.source.as_str()).with_body(export.include_body);
    let markdown = digest_from_slices(
        |category| match category {
            Category::Commits => export.commits.as_slice(),
            Category::IssuesCreated => export.issues_created.as_slice(),
            Category::IssuesCommented => export.issues_commented.as_slice(),
            Category::PrsCreated => export.prs_created.as_slice(),
            Category::PrsReviewed => export.prs_reviewed.as_slice(),
        },
        &options,
    );

    assert!(markdown.starts_with("---\nperiod: "));
    for category in Category::ALL {
        assert!(markdown.contains(&format!("## {} (", category.title())));
    }
});
