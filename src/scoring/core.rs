// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match scores.
//!
//! Every score is a percentage of the *search* length:
//!
//! ```text
//! score = 100 - 100 * min_distance / |search|
//! ```
//!
//! So 100 means "found verbatim" and 0 means "every character needed an edit".
//! With unit costs the greedy and exhaustive searches never exceed `|search|`
//! edits, so scores stay in `[0, 100]`. Thresholds are compared against this
//! number directly.
//!
//! # Minimum distance
//!
//! Comparing a short query against a long field with plain edit distance is
//! hopeless: "quijote" vs "El ingenioso hidalgo don Quijote" is dominated by
//! the length difference. Two strategies cut the field down first:
//!
//! | Mode       | Compared against                                  | Cost            |
//! |------------|---------------------------------------------------|-----------------|
//! | greedy     | field prefix of the query's length, and full field | 2 distances     |
//! | exhaustive | every substring of length `|search|..=|field|`     | O(\|field\|²) distances |
//!
//! Exhaustive mode lets the query "float" anywhere in the field. Its candidate
//! set is a superset of the greedy one, so its minimum is never larger.
//!
//! # Completeness
//!
//! ```text
//! completeness = min(1, |search| / |pattern|) * score
//! ```
//!
//! A perfect three-letter hit inside a forty-letter title is less complete
//! than the same hit against a four-letter title.

use crate::error::{MatchError, Result};
use crate::fuzzy::DamerauLevenshtein;
use crate::types::TokenMatch;
use crate::utils::char_len;

/// Outcome of scoring a search text against a list of candidate values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    /// Similarity percentage of the best candidate.
    pub score: f64,
    /// Minimum distance that produced `score`.
    pub distance: usize,
    /// Position of the best candidate in the list (first wins on ties).
    pub best_candidate: usize,
}

/// Outcome of scoring query tokens against candidate tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenScoreResult {
    /// Aggregate similarity over all query tokens, percent.
    pub token_score: f64,
    /// One pairing per query token, in query order.
    pub token_matches: Vec<TokenMatch>,
}

/// Percentage similarity for a distance against a search of `search_len` chars.
#[inline]
pub fn distance_to_score(distance: usize, search_len: usize) -> f64 {
    100.0 - 100.0 * distance as f64 / search_len as f64
}

/// Discount `score` by how much of `pattern` the search covers.
pub fn completeness(search: &str, pattern: &str, score: f64) -> f64 {
    completeness_from_lengths(char_len(search), char_len(pattern), score)
}

#[inline]
pub(crate) fn completeness_from_lengths(search_len: usize, pattern_len: usize, score: f64) -> f64 {
    let coverage = if pattern_len == 0 {
        1.0
    } else {
        (search_len as f64 / pattern_len as f64).min(1.0)
    };
    coverage * score
}

/// Distance-to-score conversion over one search mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer {
    distance: DamerauLevenshtein,
    exhaustive: bool,
}

impl MatchScorer {
    /// Scorer with unit edit costs.
    pub const fn new(exhaustive: bool) -> Self {
        Self {
            distance: DamerauLevenshtein::new(),
            exhaustive,
        }
    }

    /// Scorer over a custom distance calculator.
    pub fn with_distance(distance: DamerauLevenshtein, exhaustive: bool) -> Self {
        Self {
            distance,
            exhaustive,
        }
    }

    pub fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }

    /// Smallest distance between `search` and the part of `pattern` the current
    /// mode considers.
    pub fn min_distance(&self, search: &str, pattern: &str) -> Result<usize> {
        let search: Vec<char> = search.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.min_distance_chars(&search, &pattern)
    }

    pub(crate) fn min_distance_chars(&self, search: &[char], pattern: &[char]) -> Result<usize> {
        if search.is_empty() {
            return Err(MatchError::EmptySearch);
        }
        if search.len() >= pattern.len() {
            return self.distance.distance_chars(search, pattern);
        }
        if self.exhaustive {
            self.min_substring_distance(search, pattern)
        } else {
            let prefix = self.distance.distance_chars(search, &pattern[..search.len()])?;
            let full = self.distance.distance_chars(search, pattern)?;
            Ok(prefix.min(full))
        }
    }

    /// Scan every window of `pattern` from `|search|` up to `|pattern|` chars.
    fn min_substring_distance(&self, search: &[char], pattern: &[char]) -> Result<usize> {
        let mut min = usize::MAX;
        for len in search.len()..=pattern.len() {
            for window in pattern.windows(len) {
                min = min.min(self.distance.distance_chars(search, window)?);
                if min == 0 {
                    return Ok(0);
                }
            }
        }
        Ok(min)
    }

    /// Score `search` against each candidate and keep the best.
    ///
    /// Ties keep the earliest candidate, so candidate order is the tie-break.
    pub fn score<S: AsRef<str>>(&self, search: &str, candidates: &[S]) -> Result<ScoreResult> {
        let search_chars: Vec<char> = search.chars().collect();
        if search_chars.is_empty() {
            return Err(MatchError::EmptySearch);
        }

        let mut best: Option<(usize, usize)> = None;
        for (position, candidate) in candidates.iter().enumerate() {
            let pattern: Vec<char> = candidate.as_ref().chars().collect();
            let distance = self.min_distance_chars(&search_chars, &pattern)?;
            if best.map_or(true, |(_, min)| distance < min) {
                best = Some((position, distance));
            }
        }

        let (best_candidate, distance) = best.ok_or_else(|| MatchError::NoCandidates {
            search: search.to_string(),
        })?;
        Ok(ScoreResult {
            score: distance_to_score(distance, search_chars.len()),
            distance,
            best_candidate,
        })
    }

    /// Pair every query token with its closest candidate token.
    ///
    /// `query_tokens` and `candidate_tokens` are the folded forms used for
    /// distances; the `original_*` lists carry the text reported back in each
    /// [`TokenMatch`], position for position.
    pub fn token_score<Q, C, OQ, OC>(
        &self,
        query_tokens: &[Q],
        candidate_tokens: &[C],
        original_query_tokens: &[OQ],
        original_candidate_tokens: &[OC],
    ) -> Result<TokenScoreResult>
    where
        Q: AsRef<str>,
        C: AsRef<str>,
        OQ: AsRef<str>,
        OC: AsRef<str>,
    {
        if query_tokens.is_empty() {
            return Err(MatchError::EmptySearch);
        }
        if candidate_tokens.is_empty() {
            return Err(MatchError::NoCandidates {
                search: join_tokens(query_tokens),
            });
        }

        let candidates: Vec<Vec<char>> = candidate_tokens
            .iter()
            .map(|t| t.as_ref().chars().collect())
            .collect();

        let mut total_distance = 0usize;
        let mut total_length = 0usize;
        let mut token_matches = Vec::with_capacity(query_tokens.len());

        for (i, token) in query_tokens.iter().enumerate() {
            let token = token.as_ref();
            let token_chars: Vec<char> = token.chars().collect();
            if token_chars.is_empty() {
                return Err(MatchError::EmptyToken { position: i });
            }

            let mut best: Option<(usize, usize)> = None;
            for (j, candidate) in candidates.iter().enumerate() {
                let distance = self.min_distance_chars(&token_chars, candidate)?;
                if best.map_or(true, |(_, min)| distance < min) {
                    best = Some((j, distance));
                }
            }
            let Some((j, distance)) = best else {
                unreachable!("candidate tokens checked non-empty above");
            };

            total_distance += distance;
            total_length += token_chars.len();

            let score = distance_to_score(distance, token_chars.len());
            token_matches.push(TokenMatch {
                search_token: original_or(original_query_tokens, i, token),
                pattern_token: original_or(
                    original_candidate_tokens,
                    j,
                    candidate_tokens[j].as_ref(),
                ),
                score,
                completeness: completeness_from_lengths(
                    token_chars.len(),
                    candidates[j].len(),
                    score,
                ),
            });
        }

        Ok(TokenScoreResult {
            token_score: distance_to_score(total_distance, total_length),
            token_matches,
        })
    }
}

fn original_or<S: AsRef<str>>(originals: &[S], position: usize, fallback: &str) -> String {
    originals
        .get(position)
        .map_or(fallback, AsRef::as_ref)
        .to_string()
}

fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
