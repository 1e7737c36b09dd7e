//! An even-integer factor under multiplication.

use std::any::Any;
use std::ops::Mul;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use crate::algebra::{Magma, Monoid, Semigroup, Testable};
use crate::entities::ConstructionError;
use crate::sampling::random_int_inclusive;

/// Magnitude bound for the halved random draw.
const EVEN_FACTOR_RANDOM_BOUND: f64 = 100.0;

/// An even integer whose binary operation is multiplication.
///
/// A product with at least one even factor is even, so `*` is closed and
/// associative over the evens. The multiplicative identity 1 is odd and
/// hence outside the set, which keeps `EvenFactor` a semigroup rather than
/// a monoid. Zero is even and very much a member.
///
/// # Examples
///
/// ```
/// use magmoid::entities::EvenFactor;
///
/// let minus_four = EvenFactor::create(-4)?;
/// let six = EvenFactor::create(6)?;
/// assert_eq!((minus_four * six).value(), -24);
///
/// assert!(EvenFactor::create(3).is_err());
/// # Ok::<(), magmoid::entities::ConstructionError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EvenFactor(i64);

impl EvenFactor {
    /// Creates an `EvenFactor` from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `value` is odd.
    pub fn create(value: i64) -> Result<Self, ConstructionError> {
        if value % 2 != 0 {
            return Err(ConstructionError::new(
                Self::NAME,
                "value must be an even integer",
            ));
        }
        Ok(Self(value))
    }

    /// The wrapped integer.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Mul for EvenFactor {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Testable for EvenFactor {
    const NAME: &'static str = "EvenFactor";

    fn make_random() -> Self {
        Self(2 * random_int_inclusive(-EVEN_FACTOR_RANDOM_BOUND, EVEN_FACTOR_RANDOM_BOUND))
    }

    fn describes(value: &dyn Any) -> bool {
        value
            .downcast_ref::<Self>()
            .is_some_and(|factor| factor.0 % 2 == 0)
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Magma for EvenFactor {
    const OPERATION: &'static str = "times";

    fn combine(self, other: Self) -> Self {
        self * other
    }
}

impl Semigroup for EvenFactor {}

// The multiplicative identity 1 is odd, so there is no member identity.
assert_impl_all!(EvenFactor: Semigroup);
assert_not_impl_any!(EvenFactor: Monoid);
