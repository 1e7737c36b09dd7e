//! A positive-integer term under addition.

use std::any::Any;
use std::ops::Add;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use crate::algebra::{Magma, Monoid, Semigroup, Testable};
use crate::entities::ConstructionError;
use crate::sampling::random_int_inclusive;

/// Smallest admissible value.
const POS_INT_TERM_MIN: u64 = 1;

/// Upper bound for random draws.
const POS_INT_TERM_RANDOM_MAX: f64 = 1_000_000_000.0;

/// A strictly positive integer whose binary operation is addition.
///
/// The sum of two positive integers is positive, so `+` is closed and
/// associative. There is no identity inside the set: the only candidate is
/// 0, which [`create`](PosIntTerm::create) rejects. `PosIntTerm` is
/// therefore a semigroup and deliberately not a monoid.
///
/// # Examples
///
/// ```
/// use magmoid::entities::PosIntTerm;
///
/// let five = PosIntTerm::create(5)?;
/// let nine = PosIntTerm::create(9)?;
/// assert_eq!((five + nine).value(), 14);
///
/// assert!(PosIntTerm::create(0).is_err());
/// # Ok::<(), magmoid::entities::ConstructionError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PosIntTerm(u64);

impl PosIntTerm {
    /// Creates a `PosIntTerm` from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `value` is less than 1.
    pub fn create(value: u64) -> Result<Self, ConstructionError> {
        if value < POS_INT_TERM_MIN {
            return Err(ConstructionError::new(
                Self::NAME,
                "value must be at least 1",
            ));
        }
        Ok(Self(value))
    }

    /// The wrapped integer.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl Add for PosIntTerm {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Testable for PosIntTerm {
    const NAME: &'static str = "PosIntTerm";

    fn make_random() -> Self {
        Self(random_int_inclusive(1.0, POS_INT_TERM_RANDOM_MAX).unsigned_abs())
    }

    fn describes(value: &dyn Any) -> bool {
        value
            .downcast_ref::<Self>()
            .is_some_and(|term| term.0 >= POS_INT_TERM_MIN)
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Magma for PosIntTerm {
    const OPERATION: &'static str = "add";

    fn combine(self, other: Self) -> Self {
        self + other
    }
}

impl Semigroup for PosIntTerm {}

// 0 is the only candidate identity for addition and it is not a member.
assert_impl_all!(PosIntTerm: Semigroup);
assert_not_impl_any!(PosIntTerm: Monoid);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::laws::check_semigroup;

    #[rstest]
    #[case(5, 9, 14)]
    #[case(1, 2, 3)]
    #[case(9001, 1337, 10338)]
    fn addition_matches_arithmetic(#[case] left: u64, #[case] right: u64, #[case] expected: u64) {
        let first = PosIntTerm::create(left).expect("left operand");
        let second = PosIntTerm::create(right).expect("right operand");
        assert_eq!((first + second).value(), expected);
    }

    #[rstest]
    fn create_rejects_zero() {
        let error = PosIntTerm::create(0).expect_err("zero is not positive");
        assert_eq!(error.to_string(), "PosIntTerm: value must be at least 1");
    }

    #[rstest]
    fn create_accepts_the_minimum() {
        assert_eq!(PosIntTerm::create(1).map(|term| term.value()), Ok(1));
    }

    #[rstest]
    fn describes_rejects_foreign_and_out_of_domain_values() {
        let member = PosIntTerm::create(7).expect("member");
        assert!(PosIntTerm::describes(&member));
        assert!(!PosIntTerm::describes(&7_u64));
        assert!(!PosIntTerm::describes(&PosIntTerm(0)));
    }

    #[rstest]
    fn combine_delegates_to_addition() {
        let first = PosIntTerm::create(20).expect("first");
        let second = PosIntTerm::create(22).expect("second");
        assert_eq!(first.combine(second).value(), 42);
    }

    #[rstest]
    fn registers_as_a_semigroup() {
        let report = check_semigroup::<PosIntTerm>();
        assert!(report.passed(), "{report}");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_create_accepts_every_positive(value in 1u64..=1_000_000) {
            prop_assert!(PosIntTerm::create(value).is_ok());
        }

        #[test]
        fn prop_addition_is_associative(
            first in 1u64..=1_000_000,
            second in 1u64..=1_000_000,
            third in 1u64..=1_000_000,
        ) {
            let x = PosIntTerm::create(first).unwrap();
            let y = PosIntTerm::create(second).unwrap();
            let z = PosIntTerm::create(third).unwrap();
            prop_assert_eq!((x + y) + z, x + (y + z));
        }

        #[test]
        fn prop_sums_stay_members(
            first in 1u64..=1_000_000,
            second in 1u64..=1_000_000,
        ) {
            let x = PosIntTerm::create(first).unwrap();
            let y = PosIntTerm::create(second).unwrap();
            prop_assert!(PosIntTerm::describes(&(x + y)));
        }
    }
}
