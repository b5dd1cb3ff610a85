//! Minimum distance, scores and completeness.

use super::common::assert_close;
use fuzzrank::{completeness, distance_to_score, MatchError, MatchScorer};

const GREEDY: MatchScorer = MatchScorer::new(false);
const EXHAUSTIVE: MatchScorer = MatchScorer::new(true);

#[test]
fn test_greedy_checks_prefix_and_full() {
    assert_eq!(GREEDY.min_distance("cerv", "cervantes").unwrap(), 0);
    assert_eq!(GREEDY.min_distance("lagalatea", "la galatea").unwrap(), 1);
    // Neither the prefix nor the whole field lines up
    assert_eq!(GREEDY.min_distance("quijote", "el quijote").unwrap(), 3);
}

#[test]
fn test_exhaustive_floats_inside_the_field() {
    assert_eq!(EXHAUSTIVE.min_distance("quijote", "el quijote").unwrap(), 0);
    assert_eq!(EXHAUSTIVE.min_distance("mancha", "don quijote de la mancha").unwrap(), 0);
    assert_eq!(GREEDY.min_distance("mancha", "don quijote de la mancha").unwrap(), 5);
}

#[test]
fn test_longer_search_is_a_plain_comparison() {
    for scorer in [GREEDY, EXHAUSTIVE] {
        assert_eq!(scorer.min_distance("galateas", "galatea").unwrap(), 1);
    }
}

#[test]
fn test_score_picks_closest_candidate() {
    let result = GREEDY.score("vega", &["lope", "de", "vega"]).unwrap();
    assert_eq!(result.best_candidate, 2);
    assert_eq!(result.distance, 0);
    assert_eq!(result.score, 100.0);
}

#[test]
fn test_score_ties_keep_first_candidate() {
    let result = GREEDY.score("vega", &["vegas", "vega"]).unwrap();
    assert_eq!(result.best_candidate, 0);
}

#[test]
fn test_score_errors() {
    assert_eq!(GREEDY.score("", &["x"]), Err(MatchError::EmptySearch));
    assert!(matches!(
        GREEDY.score("x", &[] as &[&str]),
        Err(MatchError::NoCandidates { .. })
    ));
    assert!(matches!(
        GREEDY.score("x", &["ok", ""]),
        Err(MatchError::EmptyOperand { .. })
    ));
}

#[test]
fn test_token_score_weights_by_token_length() {
    let result = GREEDY
        .token_score(
            &["miguel", "cervantez"],
            &["de", "cervantes", "saavedra"],
            &["Miguel", "Cervantez"],
            &["de", "Cervantes", "Saavedra"],
        )
        .unwrap();

    // "miguel" -> "de": 5 edits out of 6, tied with "saavedra", first wins
    // "cervantez" -> "cervantes": 1 edit out of 9
    assert_close(result.token_score, 100.0 - 100.0 * 6.0 / 15.0);
    assert_eq!(result.token_matches.len(), 2);
    assert_eq!(result.token_matches[1].search_token, "Cervantez");
    assert_eq!(result.token_matches[1].pattern_token, "Cervantes");
    assert_close(result.token_matches[1].score, 100.0 - 100.0 / 9.0);
}

#[test]
fn test_distance_to_score() {
    assert_eq!(distance_to_score(0, 7), 100.0);
    assert_eq!(distance_to_score(7, 7), 0.0);
    assert_close(distance_to_score(2, 6), 100.0 - 200.0 / 6.0);
}

#[test]
fn test_completeness_scales_with_length_ratio() {
    assert_eq!(completeness("galatea", "galatea", 100.0), 100.0);
    assert_eq!(completeness("galateas", "galatea", 100.0), 100.0);
    assert_close(completeness("gala", "galatea", 100.0), 400.0 / 7.0);
    assert_close(completeness("gala", "galatea", 50.0), 200.0 / 7.0);
}
