//! Score bounds and greedy/exhaustive relationship.

use super::strategies::{phrase, word};
use fuzzrank::{completeness, MatchScorer};
use proptest::prelude::*;

const GREEDY: MatchScorer = MatchScorer::new(false);
const EXHAUSTIVE: MatchScorer = MatchScorer::new(true);

proptest! {
    #[test]
    fn prop_exhaustive_never_worse(search in word(), pattern in phrase()) {
        let greedy = GREEDY.min_distance(&search, &pattern).unwrap();
        let exhaustive = EXHAUSTIVE.min_distance(&search, &pattern).unwrap();
        prop_assert!(exhaustive <= greedy);
    }

    #[test]
    fn prop_min_distance_at_most_search_length(search in word(), pattern in phrase()) {
        prop_assume!(search.len() < pattern.len());
        prop_assert!(GREEDY.min_distance(&search, &pattern).unwrap() <= search.len());
    }

    #[test]
    fn prop_score_in_range(search in word(), candidates in prop::collection::vec(phrase(), 1..4)) {
        for scorer in [GREEDY, EXHAUSTIVE] {
            let result = scorer.score(&search, &candidates).unwrap();
            prop_assert!((0.0..=100.0).contains(&result.score));
            prop_assert!(result.best_candidate < candidates.len());
        }
    }

    #[test]
    fn prop_perfect_score_iff_zero_distance(search in word(), pattern in word()) {
        let result = GREEDY.score(&search, &[&pattern]).unwrap();
        prop_assert_eq!(result.score == 100.0, result.distance == 0);
    }

    #[test]
    fn prop_pattern_prefix_scores_perfect(pattern in phrase(), cut in 1usize..40) {
        let len = pattern.chars().count();
        let search: String = pattern.chars().take(cut.min(len)).collect();
        prop_assert_eq!(GREEDY.score(&search, &[&pattern]).unwrap().score, 100.0);
    }

    #[test]
    fn prop_completeness_never_exceeds_score(search in word(), pattern in word(), score in 0.0f64..=100.0) {
        let c = completeness(&search, &pattern, score);
        prop_assert!(c <= score + 1e-9);
        prop_assert!(c >= 0.0);
        if search.len() >= pattern.len() {
            prop_assert_eq!(c, score);
        }
    }

    #[test]
    fn prop_token_score_is_length_weighted(
        query in prop::collection::vec(word(), 1..4),
        tokens in prop::collection::vec(word(), 1..6),
    ) {
        let result = GREEDY.token_score(&query, &tokens, &query, &tokens).unwrap();
        prop_assert_eq!(result.token_matches.len(), query.len());

        let total: usize = query.iter().map(String::len).sum();
        let weighted: f64 = result
            .token_matches
            .iter()
            .zip(&query)
            .map(|(tm, q)| tm.score * q.len() as f64)
            .sum::<f64>()
            / total as f64;
        prop_assert!((weighted - result.token_score).abs() < 1e-6);
    }
}
