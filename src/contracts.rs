// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching pipeline.
//!
//! Debug-mode assertions only (`debug_assert!`), so they cost nothing in
//! release builds. They catch the bugs that would otherwise show up as a
//! silently wrong ranking.
//!
//! | Contract                  | Property                                            |
//! |---------------------------|-----------------------------------------------------|
//! | `check_score_bounded`     | percentages are finite and at most 100              |
//! | `check_match_shape`       | token fields present exactly when tokenizing        |
//! | `check_ranked`            | adjacent matches respect `compare_matches`          |
//! | `check_cache_bound`       | cache never holds more than its capacity            |
//! | `check_index_aligned`     | one index entry per element                         |

use std::cmp::Ordering;

use crate::scoring::compare_matches;
use crate::types::Match;

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a percentage is usable for thresholds and ranking.
///
/// # Panics (debug builds only)
/// Panics if `score` is NaN, infinite or above 100.
#[inline]
pub fn check_score_bounded(what: &str, score: f64) {
    debug_assert!(
        score.is_finite() && score <= 100.0,
        "Contract violation: {} = {} is not a percentage",
        what,
        score
    );
}

/// Check that a match carries token data exactly when the engine tokenizes.
#[inline]
pub fn check_match_shape<T>(m: &Match<T>, tokenize: bool) {
    debug_assert_eq!(
        m.token_score.is_some(),
        tokenize,
        "Contract violation: match {} token_score presence != tokenize ({})",
        m.index,
        tokenize
    );
    debug_assert_eq!(
        m.token_matches.is_some(),
        tokenize,
        "Contract violation: match {} token_matches presence != tokenize ({})",
        m.index,
        tokenize
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that matches are in ranked order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair compares `Greater`.
#[inline]
pub fn check_ranked<T>(matches: &[Match<T>]) {
    for (i, pair) in matches.windows(2).enumerate() {
        debug_assert!(
            compare_matches(&pair[0], &pair[1]) != Ordering::Greater,
            "Contract violation: ranked[{}] (element {}) should come after ranked[{}] (element {})",
            i,
            pair[0].index,
            i + 1,
            pair[1].index
        );
    }
}

// ============================================================================
// STRUCTURE CONTRACTS
// ============================================================================

/// Check that the cache respects its capacity.
#[inline]
pub fn check_cache_bound(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "Contract violation: cache holds {} entries, capacity {}",
        len,
        capacity
    );
}

/// Check that the index has exactly one entry per element.
#[inline]
pub fn check_index_aligned(index_len: usize, elements_len: usize) {
    debug_assert_eq!(
        index_len, elements_len,
        "Contract violation: index has {} entries for {} elements",
        index_len, elements_len
    );
}
