//! Metric properties of the edit distance.

use super::strategies::{unicode_word, word};
use fuzzrank::damerau_levenshtein;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_identity(a in unicode_word()) {
        prop_assert_eq!(damerau_levenshtein(&a, &a).unwrap(), 0);
    }

    #[test]
    fn prop_symmetric(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(
            damerau_levenshtein(&a, &b).unwrap(),
            damerau_levenshtein(&b, &a).unwrap()
        );
    }

    #[test]
    fn prop_bounded_by_longer_length(a in unicode_word(), b in unicode_word()) {
        let d = damerau_levenshtein(&a, &b).unwrap();
        let (la, lb) = (a.chars().count(), b.chars().count());
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    #[test]
    fn prop_zero_only_for_equal(a in word(), b in word()) {
        let d = damerau_levenshtein(&a, &b).unwrap();
        prop_assert_eq!(d == 0, a == b);
    }

    /// strsim's optimal string alignment is the same recurrence.
    #[test]
    fn prop_agrees_with_strsim(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(damerau_levenshtein(&a, &b).unwrap(), strsim::osa_distance(&a, &b));
    }

    #[test]
    fn prop_adjacent_swap_costs_one(a in prop::string::string_regex("[a-z]{2,8}").unwrap(), at in 0usize..7) {
        let mut chars: Vec<char> = a.chars().collect();
        let i = at % (chars.len() - 1);
        prop_assume!(chars[i] != chars[i + 1]);
        chars.swap(i, i + 1);
        let swapped: String = chars.into_iter().collect();
        prop_assert_eq!(damerau_levenshtein(&a, &swapped).unwrap(), 1);
    }
}
