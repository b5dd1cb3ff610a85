// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matches get sorted.
//!
//! A chain of tie-breaks, each consulted only when everything before it is
//! equal:
//!
//! 1. **Best score** - `max(score, token_score)`, descending (missing token score = 0)
//! 2. **Worst score** - `min(score, token_score)`, descending (missing token score = 100)
//! 3. **Completeness** - descending
//! 4. **Token match count** - ascending (missing list = 1)
//! 5. **Index** - ascending, the element's position in the collection
//!
//! The last tier makes the order total, so the result of a query never depends
//! on which worker finished first.

use std::cmp::Ordering;

use crate::types::Match;

/// Compare two matches for ranking. `Less` means `a` ranks first.
///
/// # Example
///
/// ```ignore
/// // A strong whole-value score beats two middling ones
/// let a = Match { score: 100.0, token_score: Some(20.0), .. };
/// let b = Match { score: 50.0, token_score: Some(60.0), .. };
///
/// assert_eq!(compare_matches(&a, &b), Ordering::Less);
/// ```
pub fn compare_matches<T>(a: &Match<T>, b: &Match<T>) -> Ordering {
    descending(a.best_score(), b.best_score())
        .then_with(|| descending(a.worst_score(), b.worst_score()))
        .then_with(|| descending(a.completeness, b.completeness))
        .then_with(|| a.token_match_count().cmp(&b.token_match_count()))
        .then_with(|| a.index.cmp(&b.index))
}

/// Sort matches best-first in place.
pub fn rank_matches<T>(matches: &mut [Match<T>]) {
    matches.sort_by(compare_matches);
}

// Scores are never NaN (thresholds are validated, lengths are non-zero), but
// treat it as a tie rather than panic.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
