// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit distance and minimum-distance search.
//!
//! Checks the metric laws (identity, symmetry, length bounds) on arbitrary
//! UTF-8, and that exhaustive search never reports more edits than greedy.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{damerau_levenshtein, MatchError, MatchScorer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths: exhaustive search is quadratic in the field length
    let a: String = input.a.chars().take(24).collect();
    let b: String = input.b.chars().take(48).collect();

    let d = match damerau_levenshtein(&a, &b) {
        Ok(d) => d,
        Err(MatchError::EmptyOperand { .. }) => {
            assert!(a.is_empty() || b.is_empty());
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    let (la, lb) = (a.chars().count(), b.chars().count());
    assert_eq!(d, damerau_levenshtein(&b, &a).unwrap(), "not symmetric");
    assert!(d >= la.abs_diff(lb), "below length difference");
    assert!(d <= la.max(lb), "above longer length");
    assert_eq!(damerau_levenshtein(&a, &a).unwrap(), 0);

    let greedy = MatchScorer::new(false).min_distance(&a, &b).unwrap();
    let exhaustive = MatchScorer::new(true).min_distance(&a, &b).unwrap();
    assert!(exhaustive <= greedy, "exhaustive {exhaustive} > greedy {greedy}");
    assert!(greedy <= d);
});
