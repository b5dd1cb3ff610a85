//! Threshold rules: whole-value OR token score.

use super::common::{assert_close, engine_over, find, title_engine};
use fuzzrank::Options;

#[test]
fn test_token_score_alone_qualifies() {
    let options = Options::builder().threshold(90.0).token_threshold(90.0).build();
    let results = title_engine(options).search("sevilla burlador");

    let m = find(&results, 7).expect("token score should carry the element");
    assert!(m.score < 90.0);
    assert_eq!(m.token_score, Some(100.0));
}

#[test]
fn test_whole_value_alone_qualifies() {
    // One missing space: close as a whole, far from either token
    let options = Options::builder().threshold(85.0).token_threshold(90.0).build();
    let results = engine_over(&["la galatea"], options).search("lagalatea");

    assert_eq!(results.len(), 1);
    assert_close(results[0].score, 100.0 - 100.0 / 9.0);
    assert_close(results[0].token_score.unwrap(), 100.0 - 200.0 / 9.0);
    assert_close(results[0].completeness, 0.9 * results[0].score);
}

#[test]
fn test_below_both_thresholds_is_dropped() {
    let options = Options::builder().threshold(90.0).token_threshold(90.0).build();
    assert!(engine_over(&["la galatea"], options).search("lagalatea").is_empty());
}

#[test]
fn test_token_threshold_defaults_to_threshold() {
    // "sueno" vs "sueño" with accents kept: token score 80
    let strict = Options::builder().accent_sensitive(true).threshold(81.0).build();
    assert!(find(&title_engine(strict).search("sueno"), 6).is_none());

    let loose = Options::builder().accent_sensitive(true).threshold(80.0).build();
    assert!(find(&title_engine(loose).search("sueno"), 6).is_some());
}

#[test]
fn test_threshold_is_inclusive() {
    let options = Options::builder().tokenize(false).threshold(50.0).build();
    // One substitution over two chars: exactly 50
    let results = engine_over(&["ab"], options).search("ac");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 50.0);
}

#[test]
fn test_zero_threshold_admits_everything_scorable() {
    let options = Options::builder().threshold(0.0).build();
    let engine = title_engine(options);
    assert_eq!(engine.search("x").len(), engine.len());
}

#[test]
fn test_failed_element_is_skipped() {
    let options = Options::builder().tokenize(false).threshold(0.0).build();
    let engine = engine_over(&["galatea", "", "quijote"], options);
    let results = engine.search("galatea");

    let hits: Vec<usize> = results.iter().map(|m| m.index).collect();
    assert!(hits.contains(&0));
    assert!(hits.contains(&2));
    assert!(!hits.contains(&1));
}
