//! Flattening arbitrarily nested sequences.

use crate::collection::each;

/// A node of an arbitrarily nested sequence.
///
/// Build literals with the [`nested!`](crate::nested) macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A nested sequence.
    Branch(Vec<Self>),
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

/// Builds a `Vec<Nested<T>>` from a bracketed literal.
///
/// Each item is either a bracketed group (which becomes a
/// [`Nested::Branch`]) or a single token tree such as a literal, an
/// identifier or a parenthesized expression (which becomes a
/// [`Nested::Leaf`]).
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::{Nested, flatten};
/// use underbar::nested;
///
/// let tree = nested![1, [2, [3, [4]], 5]];
/// assert_eq!(tree[0], Nested::Leaf(1));
/// assert_eq!(flatten(&tree), vec![1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! nested {
    (@node [$($inner:tt)*]) => {
        $crate::combinator::Nested::Branch($crate::nested![$($inner)*])
    };
    (@node $value:expr) => {
        $crate::combinator::Nested::Leaf($value)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@node $item)),*]
    };
}

/// Flattens `nested` depth-first, left to right.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::{Nested, flatten};
///
/// let tree = vec![
///     Nested::Leaf('a'),
///     Nested::Branch(vec![Nested::Leaf('b'), Nested::Branch(vec![])]),
/// ];
/// assert_eq!(flatten(&tree), vec!['a', 'b']);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

/// Flattens `nested` onto the end of `result`, which is also returned.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::flatten_into;
/// use underbar::nested;
///
/// let mut result = vec![0];
/// flatten_into(&nested![[1], 2], &mut result);
/// assert_eq!(result, vec![0, 1, 2]);
/// ```
pub fn flatten_into<'r, T: Clone>(nested: &[Nested<T>], result: &'r mut Vec<T>) -> &'r mut Vec<T> {
    each(nested, |item, _, _| match item {
        Nested::Leaf(value) => result.push(value.clone()),
        Nested::Branch(children) => {
            flatten_into(children, result);
        }
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flattens_deep_nesting() {
        let tree = nested![1, [2, [3, [4]], 5]];
        assert_eq!(flatten(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn empty_branches_contribute_nothing() {
        let tree: Vec<Nested<i32>> = nested![[], [[]], 7, []];
        assert_eq!(flatten(&tree), vec![7]);
    }

    #[rstest]
    fn macro_accepts_parenthesized_expressions() {
        let base = 10;
        let tree = nested![(base + 1), [(base * 2)]];
        assert_eq!(
            tree,
            vec![
                Nested::Leaf(11),
                Nested::Branch(vec![Nested::Leaf(20)]),
            ]
        );
    }

    #[rstest]
    fn flatten_into_appends_to_existing_accumulator() {
        let mut result = vec!["start"];
        let returned = flatten_into(&nested!["a", ["b"]], &mut result);
        returned.push("end");
        assert_eq!(result, vec!["start", "a", "b", "end"]);
    }

    #[rstest]
    fn leaves_convert_from_values() {
        assert_eq!(Nested::from(3), Nested::Leaf(3));
    }
}
