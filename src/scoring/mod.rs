// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! `core` turns edit distances into percentages (whole-value, per-token,
//! completeness). `ranking` orders the resulting matches.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_matches, rank_matches};
