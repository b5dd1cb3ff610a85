// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring one element against one prepared query.
//!
//! Two scores can be computed per element:
//!
//! - **whole-value**: the folded query against each folded field value
//! - **token**: every query token against every element token
//!
//! With tokenizing on, the token score is always computed. The whole-value
//! score is computed whenever either side has more than one token. When both
//! sides are a single token the two would be the same comparison, so the
//! whole-value numbers are borrowed from the first (and only) token match.
//!
//! An element qualifies if **either** score reaches its threshold.

use std::sync::Arc;

use crate::contracts::{check_match_shape, check_score_bounded};
use crate::error::{MatchError, Result};
use crate::index::IndexEntry;
use crate::options::Options;
use crate::scoring::{completeness, MatchScorer};
use crate::types::Match;
use crate::utils::{apply_sensitivity, tokenize};

/// A query folded and split once, shared read-only by every element task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// Case/accent folded query text.
    pub searchable: String,
    /// Tokens of the folded text.
    pub tokens: Vec<String>,
    /// Tokens of the raw text, reported back in token matches.
    pub original_tokens: Vec<String>,
}

impl PreparedQuery {
    pub fn new(raw: &str, options: &Options) -> Self {
        let searchable = apply_sensitivity(raw, options);
        let (tokens, original_tokens) = if options.tokenize {
            (tokenize(&searchable), tokenize(raw))
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            searchable,
            tokens,
            original_tokens,
        }
    }
}

/// Score one element. `Ok(None)` means it scored but fell below both thresholds.
pub fn evaluate<T>(
    scorer: &MatchScorer,
    options: &Options,
    query: &PreparedQuery,
    entry: &IndexEntry,
    item: &Arc<T>,
    index: usize,
) -> Result<Option<Match<T>>> {
    let needs_whole_value =
        !options.tokenize || query.tokens.len() > 1 || entry.searchable_tokens.len() > 1;

    let whole_value = if needs_whole_value {
        let result = scorer.score(&query.searchable, &entry.searchable_values)?;
        let pattern = &entry.searchable_values[result.best_candidate];
        Some((
            result.score,
            completeness(&query.searchable, pattern, result.score),
        ))
    } else {
        None
    };

    if !options.tokenize {
        let Some((score, completeness)) = whole_value else {
            return Err(MatchError::EmptySearch);
        };
        check_score_bounded("score", score);
        if score < options.threshold {
            return Ok(None);
        }
        let m = Match {
            item: Arc::clone(item),
            index,
            score,
            completeness,
            token_score: None,
            token_matches: None,
        };
        check_match_shape(&m, false);
        return Ok(Some(m));
    }

    let tokens = scorer.token_score(
        &query.tokens,
        &entry.searchable_tokens,
        &query.original_tokens,
        &entry.original_tokens,
    )?;

    let (score, completeness) = match whole_value {
        Some(scores) => scores,
        None => {
            let first = tokens.token_matches.first().ok_or(MatchError::EmptySearch)?;
            (first.score, first.completeness)
        }
    };
    check_score_bounded("score", score);
    check_score_bounded("token_score", tokens.token_score);

    let qualifies = score >= options.threshold
        || tokens.token_score >= options.effective_token_threshold();
    if !qualifies {
        return Ok(None);
    }

    let m = Match {
        item: Arc::clone(item),
        index,
        score,
        completeness,
        token_score: Some(tokens.token_score),
        token_matches: Some(tokens.token_matches),
    };
    check_match_shape(&m, true);
    Ok(Some(m))
}
