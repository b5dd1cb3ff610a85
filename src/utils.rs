// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Both the index and every query go through the same two functions, so the
//! distance layer only ever sees text folded the same way on both sides.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::options::Options;

/// Strip diacritics: NFD-decompose, then drop combining marks.
///
/// - "café" → "cafe"
/// - "ñandú" → "nandu"
/// - "harīṣh" → "harish"
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Fold `text` according to the case and accent flags of `options`.
///
/// Accents go first, then case. Pure function of its inputs.
pub fn apply_sensitivity(text: &str, options: &Options) -> String {
    let text = if options.accent_sensitive {
        text.to_string()
    } else {
        remove_accents(text)
    };
    if options.case_sensitive {
        text
    } else {
        text.to_lowercase()
    }
}

/// Split on whitespace, dropping empty tokens, preserving order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Length in characters, which is the unit every score is expressed in.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
