// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two families, split by who handles them:
//!
//! - [`MatchError`] comes out of the numeric layer (distance, score, token score).
//!   The search orchestration logs it and drops the offending element; it never
//!   aborts a query.
//! - [`ConfigError`] comes out of engine construction. Bad thresholds or missing
//!   fields are the caller's problem and surface before any query runs.

use thiserror::Error;

/// Result alias for scoring operations.
pub type Result<T, E = MatchError> = std::result::Result<T, E>;

/// A distance or score could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// One of the two distance operands was empty.
    #[error("cannot compute distance between {left:?} and {right:?}: empty operand")]
    EmptyOperand { left: String, right: String },

    /// Search text for a min-distance or score computation was empty.
    #[error("search text is empty")]
    EmptySearch,

    /// No candidate values or tokens to score against.
    #[error("no candidates to score {search:?} against")]
    NoCandidates { search: String },

    /// A query token was empty (tokenizers never produce these, callers might).
    #[error("query token {position} is empty")]
    EmptyToken { position: usize },
}

/// Engine construction failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A threshold is NaN, negative or above 100.
    #[error("{name} must be a percentage in [0, 100], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    /// A record element does not expose one of the configured keys.
    #[error("element {element} has no field {key:?}")]
    MissingField { element: usize, key: String },

    /// No keys are configured and the element is not a plain value.
    #[error("element {element} has no plain value and no keys are configured")]
    MissingValue { element: usize },

    /// The dedicated worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}
