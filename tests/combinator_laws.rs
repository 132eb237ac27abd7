#![cfg(feature = "combinator")]
//! Property-based tests for the sequence combinators.
//!
//! This module verifies that:
//!
//! - **Shuffle**: the result is a permutation and the input is untouched
//! - **Flatten**: flattening a flat sequence is the identity
//! - **Intersection**: results come from every sequence, in first-sequence order
//! - **Difference**: results avoid every other sequence
//! - **Zip**: one group per position of the first sequence

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use underbar::combinator::{Nested, difference, flatten, intersection, shuffle, shuffle_with, zip};

// =============================================================================
// Shuffle
// =============================================================================

proptest! {
    /// A shuffle is a permutation of its input
    #[test]
    fn prop_shuffle_is_permutation(values in prop::collection::vec(any::<i32>(), 0..64), seed in any::<u64>()) {
        let original = values.clone();
        let mut shuffled = shuffle_with(&values, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(&values, &original);
        prop_assert_eq!(shuffled.len(), values.len());

        let mut sorted = values.clone();
        sorted.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, sorted);
    }
}

proptest! {
    /// The same seed yields the same permutation
    #[test]
    fn prop_shuffle_is_deterministic_per_seed(values in prop::collection::vec(any::<u8>(), 0..32), seed in any::<u64>()) {
        let first = shuffle_with(&values, &mut StdRng::seed_from_u64(seed));
        let second = shuffle_with(&values, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}

proptest! {
    /// shuffle with the thread RNG is still a permutation
    #[test]
    fn prop_thread_shuffle_is_permutation(values in prop::collection::vec(0_u8..4, 0..32)) {
        let mut shuffled = shuffle(&values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, sorted);
    }
}

// =============================================================================
// Flatten
// =============================================================================

proptest! {
    /// Flattening leaves only is the identity
    #[test]
    fn prop_flatten_leaves_is_identity(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let leaves: Vec<Nested<i32>> = values.iter().copied().map(Nested::from).collect();
        prop_assert_eq!(flatten(&leaves), values);
    }
}

proptest! {
    /// Wrapping every element in its own branch does not change the result
    #[test]
    fn prop_flatten_ignores_branch_depth(values in prop::collection::vec(any::<i32>(), 0..32), depth in 1_usize..5) {
        let wrapped: Vec<Nested<i32>> = values
            .iter()
            .map(|value| {
                (0..depth).fold(Nested::Leaf(*value), |inner, _| Nested::Branch(vec![inner]))
            })
            .collect();
        prop_assert_eq!(flatten(&wrapped), values);
    }
}

// =============================================================================
// Intersection and Difference
// =============================================================================

fn small_sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..12, 0..24)
}

proptest! {
    /// Every shared element appears in all sequences; order follows the first
    #[test]
    fn prop_intersection_is_common_subsequence(first in small_sequence(), second in small_sequence(), third in small_sequence()) {
        let shared = intersection(&[&first[..], &second[..], &third[..]]);

        for value in &shared {
            prop_assert!(first.contains(value) && second.contains(value) && third.contains(value));
        }
        let expected: Vec<u8> = first
            .iter()
            .copied()
            .filter(|value| second.contains(value) && third.contains(value))
            .collect();
        prop_assert_eq!(shared, expected);
    }
}

proptest! {
    /// difference and intersection partition the first sequence
    #[test]
    fn prop_difference_complements_intersection(first in small_sequence(), second in small_sequence()) {
        let shared = intersection(&[&first[..], &second[..]]);
        let remaining = difference(&[&first[..], &second[..]]);

        prop_assert_eq!(shared.len() + remaining.len(), first.len());
        for value in &remaining {
            prop_assert!(!second.contains(value));
        }
    }
}

proptest! {
    /// A single sequence is its own intersection and difference
    #[test]
    fn prop_single_sequence_is_kept(first in small_sequence()) {
        prop_assert_eq!(intersection(&[&first[..]]), first.clone());
        prop_assert_eq!(difference(&[&first[..]]), first);
    }
}

// =============================================================================
// Zip
// =============================================================================

proptest! {
    /// zip produces one group per element of the first sequence
    #[test]
    fn prop_zip_follows_first_sequence(first in small_sequence(), second in small_sequence()) {
        let zipped = zip(&[&first[..], &second[..]]);

        prop_assert_eq!(zipped.len(), first.len());
        for (index, group) in zipped.iter().enumerate() {
            prop_assert_eq!(group.len(), 2);
            prop_assert_eq!(group[0], Some(first[index]));
            prop_assert_eq!(group[1], second.get(index).copied());
        }
    }
}
