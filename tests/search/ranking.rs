//! Result ordering through the engine.

use super::common::{book_engine, indices, title_engine};
use fuzzrank::{compare_matches, Options};
use std::cmp::Ordering;

#[test]
fn test_weakest_score_breaks_best_score_ties() {
    // Every Cervantes book has token score 100; the title decides
    let results = book_engine(Options::default()).search("cervantes");
    assert_eq!(indices(&results), vec![1, 2, 0]);
}

#[test]
fn test_full_ties_keep_collection_order() {
    let results = book_engine(Options::default()).search("lope");
    assert_eq!(indices(&results), vec![3, 4, 2]);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].completeness, results[1].completeness);
}

#[test]
fn test_chain_over_a_mixed_result_set() {
    let results = title_engine(Options::default()).search("de la");
    // 0: best 100. 5 and 3: best 75, split on the weaker score.
    // 1, 6, 7: best 50. 1 wins on weaker score, 6 beats 7 on completeness.
    assert_eq!(indices(&results), vec![0, 5, 3, 1, 6, 7]);
}

#[test]
fn test_results_are_pairwise_ordered() {
    let results = title_engine(Options::builder().threshold(0.0).build()).search("el de");
    for pair in results.windows(2) {
        assert_ne!(compare_matches(&pair[0], &pair[1]), Ordering::Greater);
    }
}

#[test]
fn test_unsorted_keeps_collection_order() {
    let options = Options::builder().sorted(false).build();
    let results = title_engine(options).search("de la");
    assert_eq!(indices(&results), vec![0, 1, 3, 5, 6, 7]);
}
