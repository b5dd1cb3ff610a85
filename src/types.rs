// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types and the element access trait.
//!
//! # Invariants
//!
//! - **Match**: `index < elements.len()` and `item` is the element at that index.
//!   Matches share the element through an `Arc`; nothing is cloned per query.
//!
//! - **Match**: `token_score` and `token_matches` are both `Some` or both `None`.
//!   They are present exactly when the engine tokenizes.
//!
//! - **TokenMatch**: one per query token, in query order.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Best pairing of one query token with one element token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMatch {
    /// Query token as typed (before case/accent folding).
    pub search_token: String,
    /// Element token as stored (before case/accent folding).
    pub pattern_token: String,
    /// Per-token similarity, percent.
    pub score: f64,
    /// Per-token completeness, percent.
    pub completeness: f64,
}

/// One element that passed the threshold for one query.
#[derive(Debug)]
pub struct Match<T> {
    /// The matched element, shared with the engine.
    pub item: Arc<T>,
    /// Position of the element in the collection the engine was built from.
    pub index: usize,
    /// Whole-value similarity, percent.
    pub score: f64,
    /// Score discounted by how much of the field the query covers.
    pub completeness: f64,
    /// Aggregate token similarity, percent. Present only when tokenizing.
    pub token_score: Option<f64>,
    /// Per-query-token pairings. Present only when tokenizing.
    pub token_matches: Option<Vec<TokenMatch>>,
}

// Manual impl: cloning a match clones the `Arc`, so `T` needn't be `Clone`.
impl<T> Clone for Match<T> {
    fn clone(&self) -> Self {
        Self {
            item: Arc::clone(&self.item),
            index: self.index,
            score: self.score,
            completeness: self.completeness,
            token_score: self.token_score,
            token_matches: self.token_matches.clone(),
        }
    }
}

impl<T> Match<T> {
    /// `max(score, token_score)`, with a missing token score counted as 0.
    pub fn best_score(&self) -> f64 {
        self.score.max(self.token_score.unwrap_or(0.0))
    }

    /// `min(score, token_score)`, with a missing token score counted as 100.
    pub fn worst_score(&self) -> f64 {
        self.score.min(self.token_score.unwrap_or(100.0))
    }

    /// Number of token matches, with a missing list counted as one.
    pub fn token_match_count(&self) -> usize {
        self.token_matches.as_ref().map_or(1, Vec::len)
    }
}

/// Anything whose text the engine can search.
///
/// Plain-string elements answer [`value`](Searchable::value) and are searched
/// when no keys are configured. Record elements answer
/// [`field`](Searchable::field) for each configured key. Both are read once,
/// when the engine is built.
pub trait Searchable {
    /// The element's text when it is a plain string.
    fn value(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// The text of a named field when the element is a record.
    fn field(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl Searchable for str {
    fn value(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Searchable for String {
    fn value(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn value(&self) -> Option<Cow<'_, str>> {
        (**self).value()
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field(key)
    }
}

impl<T: Searchable + ?Sized> Searchable for Box<T> {
    fn value(&self) -> Option<Cow<'_, str>> {
        (**self).value()
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field(key)
    }
}

impl<T: Searchable + ?Sized> Searchable for Arc<T> {
    fn value(&self) -> Option<Cow<'_, str>> {
        (**self).value()
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field(key)
    }
}

/// JSON strings are plain values; JSON objects are records whose string,
/// number and boolean members are fields.
impl Searchable for serde_json::Value {
    fn value(&self) -> Option<Cow<'_, str>> {
        match self {
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            _ => None,
        }
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            serde_json::Value::Number(n) => Some(Cow::Owned(n.to_string())),
            serde_json::Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }
}

impl Searchable for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl Searchable for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|s| Cow::Borrowed(s.as_str()))
    }
}
