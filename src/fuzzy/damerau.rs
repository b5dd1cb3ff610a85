// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Damerau-Levenshtein edit distance (optimal string alignment variant).
//!
//! Classic Levenshtein DP plus one extra rule: two adjacent characters swapped
//! cost a single edit instead of two substitutions. That is the "restricted"
//! form: a transposed pair cannot be edited again afterwards.
//!
//! Only three rows of the table are alive at any time. The transposition rule
//! looks two rows back, so that is the minimum. Work is still O(|a|·|b|) with
//! no early exit; callers compare every candidate in full.
//!
//! Distances are measured in `char`s, never bytes. "café" vs "cafe" is one edit.

use crate::error::{MatchError, Result};

/// Per-operation edit costs.
///
/// Engine-wide constants. The defaults (all 1) are what every score in this
/// crate assumes; other values are a tuning knob for callers that build their
/// own [`DamerauLevenshtein`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCosts {
    pub deletion: usize,
    pub insertion: usize,
    pub substitution: usize,
    pub transposition: usize,
}

impl EditCosts {
    /// Every operation costs one edit.
    pub const UNIT: EditCosts = EditCosts {
        deletion: 1,
        insertion: 1,
        substitution: 1,
        transposition: 1,
    };
}

impl Default for EditCosts {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Edit distance calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein {
    costs: EditCosts,
}

impl DamerauLevenshtein {
    /// Calculator with unit costs.
    pub const fn new() -> Self {
        Self {
            costs: EditCosts::UNIT,
        }
    }

    /// Calculator with custom costs.
    pub const fn with_costs(costs: EditCosts) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> EditCosts {
        self.costs
    }

    /// Edit distance between two strings.
    ///
    /// Fails with [`MatchError::EmptyOperand`] if either side is empty. An empty
    /// operand has no meaningful similarity percentage downstream, so it is an
    /// error here rather than `max(|a|, |b|)`.
    pub fn distance(&self, a: &str, b: &str) -> Result<usize> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.distance_chars(&a, &b)
    }

    /// Edit distance over pre-split characters.
    ///
    /// The scorer slices patterns many times per comparison (prefix and
    /// substring scans), so it works on `&[char]` to avoid re-collecting.
    pub fn distance_chars(&self, a: &[char], b: &[char]) -> Result<usize> {
        if a.is_empty() || b.is_empty() {
            return Err(MatchError::EmptyOperand {
                left: a.iter().collect(),
                right: b.iter().collect(),
            });
        }

        let EditCosts {
            deletion,
            insertion,
            substitution,
            transposition,
        } = self.costs;
        let n = b.len();

        // Rows i-2, i-1 and i of the DP table.
        let mut two_back = vec![0usize; n + 1];
        let mut prev: Vec<usize> = (0..=n).map(|j| j * insertion).collect();
        let mut curr = vec![0usize; n + 1];

        for i in 1..=a.len() {
            curr[0] = i * deletion;
            for j in 1..=n {
                let subst_cost = if a[i - 1] == b[j - 1] { 0 } else { substitution };
                let mut cell = (prev[j] + deletion)
                    .min(curr[j - 1] + insertion)
                    .min(prev[j - 1] + subst_cost);

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    cell = cell.min(two_back[j - 2] + transposition);
                }
                curr[j] = cell;
            }
            std::mem::swap(&mut two_back, &mut prev);
            std::mem::swap(&mut prev, &mut curr);
        }

        Ok(prev[n])
    }
}

/// Unit-cost Damerau-Levenshtein distance.
pub fn damerau_levenshtein(a: &str, b: &str) -> Result<usize> {
    DamerauLevenshtein::new().distance(a, b)
}
