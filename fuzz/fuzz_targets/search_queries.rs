// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end search.
//!
//! Arbitrary collections and queries must never panic, every result must
//! clear a threshold, and a repeated query must return the same ranking.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{compare_matches, Options, SearchEngine};
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    elements: Vec<String>,
    query: String,
    threshold: u8,
    tokenize: bool,
    exhaustive: bool,
    case_sensitive: bool,
    accent_sensitive: bool,
}

fuzz_target!(|input: SearchInput| {
    let elements: Vec<String> = input
        .elements
        .into_iter()
        .take(32)
        .map(|e| e.chars().take(40).collect())
        .collect();
    let query: String = input.query.chars().take(20).collect();

    let options = Options::builder()
        .threshold(f64::from(input.threshold.min(100)))
        .tokenize(input.tokenize)
        .exhaustive(input.exhaustive)
        .case_sensitive(input.case_sensitive)
        .accent_sensitive(input.accent_sensitive)
        .build();
    let threshold = options.threshold;

    let Ok(engine) = SearchEngine::new(elements, options) else {
        return;
    };

    let first = engine.search(&query);
    for m in &first {
        let token = m.token_score.unwrap_or(f64::NEG_INFINITY);
        assert!(m.score >= threshold || token >= threshold);
        assert!(m.index < engine.len());
    }
    for pair in first.windows(2) {
        assert_eq!(compare_matches(&pair[0], &pair[1]), Ordering::Less);
    }

    let second = engine.search(&query);
    let a: Vec<usize> = first.iter().map(|m| m.index).collect();
    let b: Vec<usize> = second.iter().map(|m| m.index).collect();
    assert_eq!(a, b);
});
