//! Uniformly random permutations (Fisher–Yates).

use rand::Rng;

/// Returns a shuffled copy of `sequence`, using the thread-local generator.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::shuffle;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&numbers);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, numbers);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Returns a shuffled copy of `sequence`, drawing from `rng`.
///
/// Walks the copy from the back, swapping each slot with a uniformly chosen
/// slot at or before it. The input is never modified.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::combinator::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for current in (1..shuffled.len()).rev() {
        let chosen = rng.gen_range(0..=current);
        shuffled.swap(current, chosen);
    }
    shuffled
}
