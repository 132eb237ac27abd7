#![cfg(feature = "collection")]
//! Property-based tests for the reducer and the operations derived from it.
//!
//! This module verifies that:
//!
//! - **Traversal**: `each` visits every element once, in index order
//! - **Reduction**: `fold` and `reduce` agree with iterator folds
//! - **Partition**: `filter` and `reject` split a sequence without loss
//! - **Quantifiers**: `some` is the dual of `every`
//! - **Uniqueness**: `uniq` keeps first occurrences only

use proptest::prelude::*;
use std::collections::BTreeMap;
use underbar::collection::{
    contains, each, every, filter, first_n, fold, index_of, last_n, map, reduce, reject, some, uniq,
};

// =============================================================================
// Traversal
// =============================================================================

proptest! {
    /// each visits indices 0..len exactly once, in order
    #[test]
    fn prop_each_visits_in_index_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut visited = Vec::new();
        each(&values, |value, index, _| visited.push((*index, *value)));

        let expected: Vec<(usize, i32)> = values.iter().copied().enumerate().collect();
        prop_assert_eq!(visited, expected);
    }
}

proptest! {
    /// each over a mapping visits every association exactly once
    #[test]
    fn prop_each_visits_every_association(mapping in prop::collection::btree_map(any::<u8>(), any::<i16>(), 0..32)) {
        let mut visited = BTreeMap::new();
        let mut repeats = 0;
        each(&mapping, |value, key, _| {
            if visited.insert(*key, *value).is_some() {
                repeats += 1;
            }
        });

        prop_assert_eq!(repeats, 0);
        prop_assert_eq!(visited, mapping);
    }
}

proptest! {
    /// index_of finds the first occurrence of an element known to be present
    #[test]
    fn prop_index_of_finds_first_occurrence(values in prop::collection::vec(0..8_i32, 1..32), pick in any::<prop::sample::Index>()) {
        let target = values[pick.index(values.len())];
        let found = index_of(&values, &target).expect("target is present");

        prop_assert_eq!(values[found], target);
        prop_assert!(values[..found].iter().all(|value| *value != target));
    }
}

// =============================================================================
// Reduction
// =============================================================================

proptest! {
    /// fold with addition matches Iterator::sum
    #[test]
    fn prop_fold_matches_iterator_sum(values in prop::collection::vec(-1000_i64..1000, 0..64)) {
        let folded = fold(&values, |total, value| Some(*total + value), 0_i64);
        prop_assert_eq!(folded, values.iter().sum::<i64>());
    }
}

proptest! {
    /// reduce without a seed equals a fold seeded with the first element
    #[test]
    fn prop_reduce_without_seed(values in prop::collection::vec(-1000_i64..1000, 0..64)) {
        let reduced = reduce(&values, |total, value| Some(*total + value), None);
        let expected = values.iter().copied().reduce(|left, right| left + right);
        prop_assert_eq!(reduced, expected);
    }
}

proptest! {
    /// An empty collection folds to its seed
    #[test]
    fn prop_fold_empty_returns_seed(seed in any::<i32>()) {
        let empty: Vec<i32> = Vec::new();
        prop_assert_eq!(fold(&empty, |_, _| Some(0), seed), seed);
        prop_assert_eq!(reduce(&empty, |_, _| Some(0), Some(seed)), Some(seed));
    }
}

proptest! {
    /// map preserves length and order
    #[test]
    fn prop_map_preserves_shape(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let doubled = map(&values, |value| i32::from(*value) * 2);
        let expected: Vec<i32> = values.iter().map(|value| i32::from(*value) * 2).collect();
        prop_assert_eq!(doubled, expected);
    }
}

// =============================================================================
// Partition
// =============================================================================

proptest! {
    /// filter and reject partition the input
    #[test]
    fn prop_filter_reject_partition(values in prop::collection::vec(any::<i32>(), 0..64), modulus in 1_i32..5) {
        let kept = filter(&values, |value| value % modulus == 0);
        let dropped = reject(&values, |value| value % modulus == 0);

        prop_assert_eq!(kept.len() + dropped.len(), values.len());
        prop_assert!(kept.iter().all(|value| value % modulus == 0));
        prop_assert!(dropped.iter().all(|value| value % modulus != 0));
    }
}

proptest! {
    /// first_n and last_n are prefixes and suffixes of the input
    #[test]
    fn prop_first_last_n(values in prop::collection::vec(any::<u8>(), 0..32), count in 0_usize..40) {
        let head = first_n(&values, count);
        let tail = last_n(&values, count);
        let taken = count.min(values.len());

        prop_assert_eq!(&head[..], &values[..taken]);
        prop_assert_eq!(&tail[..], &values[values.len() - taken..]);
    }
}

// =============================================================================
// Quantifiers
// =============================================================================

proptest! {
    /// some(p) == !every(!p)
    #[test]
    fn prop_some_is_dual_of_every(values in prop::collection::vec(any::<i8>(), 0..32), threshold in any::<i8>()) {
        let any_above = some(&values, |value| *value > threshold);
        let all_at_most = every(&values, |value| *value <= threshold);
        prop_assert_eq!(any_above, !all_at_most);
    }
}

proptest! {
    /// contains agrees with slice::contains
    #[test]
    fn prop_contains_matches_slice(values in prop::collection::vec(0_u8..16, 0..32), target in 0_u8..16) {
        prop_assert_eq!(contains(&values, &target), values.contains(&target));
    }
}

// =============================================================================
// Uniqueness
// =============================================================================

proptest! {
    /// uniq is idempotent, duplicate-free, and keeps first occurrences in order
    #[test]
    fn prop_uniq(values in prop::collection::vec(0_u8..10, 0..48)) {
        let unique = uniq(&values);

        prop_assert_eq!(uniq(&unique), unique.clone());
        for (position, value) in unique.iter().enumerate() {
            prop_assert!(!unique[..position].contains(value));
            prop_assert!(values.contains(value));
        }
        for value in &values {
            prop_assert!(unique.contains(value));
        }

        let mut seen = Vec::new();
        for value in &values {
            if !seen.contains(value) {
                seen.push(*value);
            }
        }
        prop_assert_eq!(unique, seen);
    }
}
