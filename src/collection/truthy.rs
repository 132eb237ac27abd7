//! Truthiness and the identity function.
//!
//! Predicates in this crate may return any [`Truthy`] value, not only `bool`.
//! [`identity`] is the default iterator: combined with [`Truthy`] it gives
//! the "identity truthiness" used by
//! [`every_truthy`](super::every_truthy) and [`some_truthy`](super::some_truthy).

/// Returns the value unchanged.
///
/// Useful wherever an iterator is required but no transformation is wanted.
///
/// # Examples
///
/// ```
/// use underbar::collection::{identity, map};
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(map(&[1, 2, 3], |value| identity(*value)), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A value with a boolean reading.
///
/// - Numbers are truthy unless zero (floats: unless zero or NaN).
/// - Strings are truthy unless empty.
/// - `Option` is truthy when `Some`, regardless of the content.
/// - `()` is never truthy.
pub trait Truthy {
    /// Returns the boolean reading of `self`.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),*) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-7, true)]
    fn integers_are_truthy_unless_zero(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(f64::NAN, false)]
    #[case(0.5, true)]
    fn floats_are_truthy_unless_zero_or_nan(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn strings_are_truthy_unless_empty() {
        assert!("moe".is_truthy());
        assert!(!"".is_truthy());
        assert!(!String::new().is_truthy());
    }

    #[rstest]
    fn options_are_truthy_when_present() {
        assert!(Some(0).is_truthy());
        assert!(!None::<i32>.is_truthy());
    }

    #[rstest]
    fn unit_is_never_truthy() {
        assert!(!().is_truthy());
    }
}
