#![no_main]

//! Fuzz target for export parsing and classification
//!
//! Arbitrary bytes must never panic the loader, the date normalizer, or any
//! of the classifiers.

use gh_digest_activity::date::parse_timestamp;
use gh_digest_activity::loader::items_from_slice;
use gh_digest_activity::{Activity, ActivityItems};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let items = items_from_slice(data);
    let activity = Activity::classify(&ActivityItems {
        commits: items.clone(),
        issues_created: items.clone(),
        issues_commented: items.clone(),
        prs_created: items.clone(),
        prs_reviewed: items,
    });
    let _ = activity.period();

    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_timestamp(Some(s));
    }
});
