// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-element precomputation.
//!
//! Everything a query needs from an element is worked out once, here: the raw
//! field values, their folded forms and (when tokenizing) both token lists.
//! Queries never look at the elements themselves again.
//!
//! # Invariants
//!
//! 1. **ALIGNED**: `entries[i]` describes `elements[i]`. Same length, same order.
//! 2. **KEY_ORDER**: `original_values[k]` is the value of `keys[k]`.
//! 3. **FOLDED**: `searchable_values[k] == apply_sensitivity(original_values[k])`.
//! 4. **TOKENS**: token lists are empty unless tokenizing; otherwise all fields'
//!    tokens concatenated in key order, originals and folded position for position.

use rayon::prelude::*;

use crate::error::ConfigError;
use crate::options::Options;
use crate::types::Searchable;
use crate::utils::{apply_sensitivity, tokenize};

/// Precomputed text of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    /// One value per key, verbatim.
    pub original_values: Vec<String>,
    /// One value per key, case/accent folded.
    pub searchable_values: Vec<String>,
    /// Whitespace tokens of every original value, in key order.
    pub original_tokens: Vec<String>,
    /// Whitespace tokens of every folded value, in key order.
    pub searchable_tokens: Vec<String>,
}

impl IndexEntry {
    fn new(original_values: Vec<String>, options: &Options) -> Self {
        let searchable_values: Vec<String> = original_values
            .iter()
            .map(|value| apply_sensitivity(value, options))
            .collect();

        let (original_tokens, searchable_tokens) = if options.tokenize {
            (tokenize_all(&original_values), tokenize_all(&searchable_values))
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            original_values,
            searchable_values,
            original_tokens,
            searchable_tokens,
        }
    }
}

fn tokenize_all(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|value| tokenize(value)).collect()
}

/// Precomputed text of a whole collection, one entry per element.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Resolve and fold every element's fields.
    ///
    /// With no keys configured each element must be a plain value; otherwise
    /// every element must expose every key. Any element that doesn't fails
    /// the whole build.
    pub fn build<E>(elements: &[E], options: &Options) -> Result<Self, ConfigError>
    where
        E: Searchable + Sync,
    {
        let values = elements
            .par_iter()
            .enumerate()
            .map(|(position, element)| resolve_values(element, position, &options.keys))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_values(values, options))
    }

    /// Build from values already extracted by the caller, one list per element.
    pub fn from_values(values: Vec<Vec<String>>, options: &Options) -> Self {
        let entries: Vec<IndexEntry> = values
            .into_par_iter()
            .map(|original_values| IndexEntry::new(original_values, options))
            .collect();

        log::trace!(
            "indexed {} elements ({} keys, tokenize={})",
            entries.len(),
            options.keys.len(),
            options.tokenize
        );

        Self { entries }
    }

    pub fn get(&self, position: usize) -> Option<&IndexEntry> {
        self.entries.get(position)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn resolve_values<E: Searchable>(
    element: &E,
    position: usize,
    keys: &[String],
) -> Result<Vec<String>, ConfigError> {
    if keys.is_empty() {
        return element
            .value()
            .map(|value| vec![value.into_owned()])
            .ok_or(ConfigError::MissingValue { element: position });
    }

    keys.iter()
        .map(|key| {
            element
                .field(key)
                .map(|value| value.into_owned())
                .ok_or_else(|| ConfigError::MissingField {
                    element: position,
                    key: key.clone(),
                })
        })
        .collect()
}
