//! Random sampling utilities shared by the law checkers and the example
//! entities.
//!
//! Sampling is intentionally unseeded: every draw goes through the
//! thread-local generator, and callers only rely on *variety*, never on
//! reproducibility.

use rand::Rng;

/// Alphabet used by [`random_string`]: the 36 lowercase alphanumerics.
const ALPHANUMERIC_LOWER: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Runs `action` once per index in `0..limit`, collecting the results in
/// order.
///
/// # Examples
///
/// ```rust
/// use magmoid::sampling::times;
///
/// let squares = times(4, |index| index * index);
/// assert_eq!(squares, vec![0, 1, 4, 9]);
///
/// let none: Vec<usize> = times(0, |index| index);
/// assert!(none.is_empty());
/// ```
#[must_use]
pub fn times<T>(limit: usize, action: impl FnMut(usize) -> T) -> Vec<T> {
    (0..limit).map(action).collect()
}

/// Draws a uniform integer from the inclusive range `[ceil(min), floor(max)]`.
///
/// Fractional bounds tighten inward, so `(0.2, 3.9)` samples from
/// `{1, 2, 3}`.
///
/// # Panics
///
/// Panics when the tightened range contains no integer, i.e. when
/// `ceil(min) > floor(max)`.
///
/// # Examples
///
/// ```rust
/// use magmoid::sampling::random_int_inclusive;
///
/// let drawn = random_int_inclusive(1.0, 6.0);
/// assert!((1..=6).contains(&drawn));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn random_int_inclusive(min: f64, max: f64) -> i64 {
    let lower = min.ceil() as i64;
    let upper = max.floor() as i64;
    rand::rng().random_range(lower..=upper)
}

/// Draws a random lowercase-alphanumeric string.
///
/// The length is uniform over `0..=8`, so the empty string is a valid (if
/// infrequent) sample; string-like carriers whose identity is the empty
/// string depend on it being reachable.
///
/// # Examples
///
/// ```rust
/// use magmoid::sampling::random_string;
///
/// let drawn = random_string();
/// assert!(drawn.len() <= 8);
/// assert!(drawn.bytes().all(|byte| byte.is_ascii_digit() || byte.is_ascii_lowercase()));
/// ```
#[must_use]
pub fn random_string() -> String {
    let length = random_int_inclusive(2.0, 10.0) - 2;
    let mut generator = rand::rng();
    (0..length)
        .map(|_| {
            let index = generator.random_range(0..ALPHANUMERIC_LOWER.len());
            char::from(ALPHANUMERIC_LOWER[index])
        })
        .collect()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_random_int_inclusive_lands_inside_integer_bounds(
            lower in -1_000i32..=1_000,
            span in 0i32..=1_000,
        ) {
            let upper = lower + span;
            let drawn = random_int_inclusive(f64::from(lower), f64::from(upper));
            prop_assert!((i64::from(lower)..=i64::from(upper)).contains(&drawn));
        }

        #[test]
        fn prop_fractional_bounds_tighten_inward(
            base in -100i32..=100,
            fraction in 0.1f64..=0.9,
        ) {
            let min = f64::from(base) + fraction;
            let max = f64::from(base) + 2.0 + fraction;
            let drawn = random_int_inclusive(min, max);
            prop_assert!((i64::from(base) + 1..=i64::from(base) + 2).contains(&drawn));
        }
    }
}
