// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-collection matching options.
//!
//! Immutable once an engine is built. Serde-friendly so a host can keep them in
//! its own config file; every field has a default, so `{}` is a valid document.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default minimum score (percent) for an element to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 40.0;

/// How queries are compared against elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Compare case exactly. When false both sides are lowercased.
    pub case_sensitive: bool,
    /// Compare accents exactly. When false diacritics are stripped.
    pub accent_sensitive: bool,
    /// Minimum whole-value score, in percent.
    pub threshold: f64,
    /// Also score per whitespace token.
    pub tokenize: bool,
    /// Minimum token score, in percent. Falls back to `threshold`.
    pub token_threshold: Option<f64>,
    /// Rank results before returning them.
    pub sorted: bool,
    /// Scan every substring of longer fields instead of prefix + full.
    pub exhaustive: bool,
    /// Field names to search, in order. Empty for plain-string elements.
    pub keys: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            accent_sensitive: false,
            threshold: DEFAULT_THRESHOLD,
            tokenize: true,
            token_threshold: None,
            sorted: true,
            exhaustive: false,
            keys: Vec::new(),
        }
    }
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Token threshold with the fallback applied.
    pub fn effective_token_threshold(&self) -> f64 {
        self.token_threshold.unwrap_or(self.threshold)
    }

    /// Check the percentage invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_percentage("threshold", self.threshold)?;
        if let Some(token_threshold) = self.token_threshold {
            check_percentage("token_threshold", token_threshold)?;
        }
        Ok(())
    }
}

fn check_percentage(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        // NaN lands here too: it is not contained in any range
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}

/// Chainable constructor for [`Options`].
///
/// ```
/// use fuzzrank::Options;
///
/// let options = Options::builder()
///     .threshold(60.0)
///     .keys(["author", "title"])
///     .build();
/// assert_eq!(options.keys, vec!["author", "title"]);
/// assert_eq!(options.effective_token_threshold(), 60.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.options.case_sensitive = yes;
        self
    }

    pub fn accent_sensitive(mut self, yes: bool) -> Self {
        self.options.accent_sensitive = yes;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.options.threshold = threshold;
        self
    }

    pub fn tokenize(mut self, yes: bool) -> Self {
        self.options.tokenize = yes;
        self
    }

    pub fn token_threshold(mut self, threshold: f64) -> Self {
        self.options.token_threshold = Some(threshold);
        self
    }

    pub fn sorted(mut self, yes: bool) -> Self {
        self.options.sorted = yes;
        self
    }

    pub fn exhaustive(mut self, yes: bool) -> Self {
        self.options.exhaustive = yes;
        self
    }

    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}
