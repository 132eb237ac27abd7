//! Zipping sequences together by index.

use crate::collection::{each, map};

/// Groups the `i`-th elements of every sequence, for each index of the first
/// sequence.
///
/// Shorter sequences contribute `None` for the indices they lack; longer
/// ones are cut at the length of the first sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::zip;
///
/// let zipped = zip(&[&["a", "b", "c", "d"], &["1", "2", "3"]]);
/// assert_eq!(zipped[3], vec![Some("d"), None]);
/// assert_eq!(zipped.len(), 4);
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let Some(leader) = sequences.first() else {
        return Vec::new();
    };
    let mut zipped = Vec::with_capacity(leader.len());
    each(*leader, |_, index, _| {
        zipped.push(map(sequences, |sequence| sequence.get(*index).cloned()));
    });
    zipped
}

/// Pairs two sequences of possibly different element types.
///
/// The result has the length of `left`; missing `right` elements are `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::zip2;
///
/// assert_eq!(
///     zip2(&['a', 'b', 'c', 'd'], &[1, 2, 3]),
///     vec![('a', Some(1)), ('b', Some(2)), ('c', Some(3)), ('d', None)]
/// );
/// ```
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, Option<B>)> {
    map(left, {
        let mut index = 0;
        move |element| {
            let pair = (element.clone(), right.get(index).cloned());
            index += 1;
            pair
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zip_fills_missing_slots_with_none() {
        let zipped = zip(&[&["a", "b", "c", "d"], &["1", "2", "3"]]);
        assert_eq!(
            zipped,
            vec![
                vec![Some("a"), Some("1")],
                vec![Some("b"), Some("2")],
                vec![Some("c"), Some("3")],
                vec![Some("d"), None],
            ]
        );
    }

    #[rstest]
    fn zip_is_bounded_by_first_sequence() {
        let zipped = zip(&[&[1, 2], &[10, 20, 30], &[100]]);
        assert_eq!(
            zipped,
            vec![
                vec![Some(1), Some(10), Some(100)],
                vec![Some(2), Some(20), None],
            ]
        );
    }

    #[rstest]
    fn zip_of_nothing_is_empty() {
        assert!(zip::<i32>(&[]).is_empty());
        assert!(zip::<i32>(&[&[], &[1]]).is_empty());
    }

    #[rstest]
    fn zip2_mixes_types() {
        let pairs = zip2(&["x", "y"], &[1.5]);
        assert_eq!(pairs, vec![("x", Some(1.5)), ("y", None)]);
    }
}
