//! End-to-end scoring through the engine.

use super::common::{assert_close, find, title_engine};
use fuzzrank::Options;

#[test]
fn test_typo_finds_title() {
    let engine = title_engine(Options::default());
    let results = engine.search("qixote");

    assert_eq!(results.len(), 1);
    let m = &results[0];
    assert_eq!(m.index, 0);
    assert_close(m.token_score.unwrap(), 100.0 - 200.0 / 6.0);

    let tm = &m.token_matches.as_ref().unwrap()[0];
    assert_eq!(tm.search_token, "qixote");
    assert_eq!(tm.pattern_token, "Quijote");
    assert_close(tm.completeness, (100.0 - 200.0 / 6.0) * 6.0 / 7.0);
}

#[test]
fn test_accents_folded_by_default() {
    let results = title_engine(Options::default()).search("sueno");
    assert_eq!(results[0].index, 6);
    assert_eq!(results[0].token_score, Some(100.0));
    // Reported text is the stored token, not the folded one
    assert_eq!(results[0].token_matches.as_ref().unwrap()[0].pattern_token, "sueño");
}

#[test]
fn test_accent_sensitive_counts_the_accent() {
    let options = Options::builder().accent_sensitive(true).build();
    let results = title_engine(options).search("sueno");
    assert_eq!(results[0].index, 6);
    assert_close(results[0].token_score.unwrap(), 80.0);
}

#[test]
fn test_case_sensitive_counts_the_case() {
    let options = Options::builder().case_sensitive(true).build();
    let results = title_engine(options).search("galatea");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].index, 1);
    assert_close(results[0].token_score.unwrap(), 100.0 - 100.0 / 7.0);
}

#[test]
fn test_greedy_whole_value_compares_prefix_and_full() {
    let options = Options::builder().tokenize(false).build();
    let results = title_engine(options).search("galatea");

    // "la galatea" needs three insertions; the prefix "la gala" is further away
    assert_eq!(results.len(), 1);
    assert_close(results[0].score, 100.0 - 300.0 / 7.0);
    assert_close(results[0].completeness, 0.7 * results[0].score);
    assert!(results[0].token_score.is_none());
}

#[test]
fn test_exhaustive_finds_embedded_value() {
    let options = Options::builder().tokenize(false).exhaustive(true).build();
    let results = title_engine(options).search("galatea");

    assert_eq!(results[0].index, 1);
    assert_eq!(results[0].score, 100.0);
    assert_close(results[0].completeness, 70.0);
    assert!(results.len() > 1);
}

#[test]
fn test_single_token_borrows_token_scores() {
    let results = title_engine(Options::default()).search("fuenteovejuna");
    let m = find(&results, 4).unwrap();

    let tm = &m.token_matches.as_ref().unwrap()[0];
    assert_eq!(m.score, tm.score);
    assert_eq!(m.completeness, tm.completeness);
    assert_eq!(m.score, 100.0);
}

#[test]
fn test_empty_query_returns_nothing() {
    let engine = title_engine(Options::default());
    assert!(engine.search("").is_empty());
    assert_eq!(engine.cache_len(), 0);
}

#[test]
fn test_no_match_is_empty_not_error() {
    let results = title_engine(Options::default()).search("zzzzzzzz");
    assert!(results.is_empty());
}
