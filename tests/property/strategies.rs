//! Input generators shared by the property suites.

use fuzzrank::{Match, TokenMatch};
use proptest::prelude::*;
use std::sync::Arc;

/// Short lowercase words.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

/// Words with accents, case and the odd multi-byte char.
pub fn unicode_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-ZáéíóúñüÁÉÑ日本]{1,8}").unwrap()
}

/// One to four words joined by spaces.
pub fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..5).prop_map(|words| words.join(" "))
}

/// A small collection of phrases.
pub fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(phrase(), 1..12)
}

fn percentage() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(50.0),
        Just(100.0),
        (0u32..=100).prop_map(f64::from),
    ]
}

/// Arbitrary match records, with or without token data.
pub fn matches() -> impl Strategy<Value = Vec<Match<()>>> {
    let one = (
        percentage(),
        percentage(),
        prop::option::of(percentage()),
        1usize..4,
    );
    prop::collection::vec(one, 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (score, completeness, token_score, tokens))| Match {
                item: Arc::new(()),
                index,
                score,
                completeness,
                token_score,
                token_matches: token_score.map(|s| {
                    vec![
                        TokenMatch {
                            search_token: "q".into(),
                            pattern_token: "p".into(),
                            score: s,
                            completeness: s,
                        };
                        tokens
                    ]
                }),
            })
            .collect()
    })
}
