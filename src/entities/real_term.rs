//! A non-NaN real term under addition.

use std::any::Any;
use std::cmp::Ordering;
use std::ops::Add;

use rand::Rng;
use static_assertions::assert_impl_all;

use crate::algebra::{Magma, Monoid, Semigroup, Testable};
use crate::entities::ConstructionError;
use crate::sampling::random_int_inclusive;

/// Two members closer than this compare equal.
const EQUALITY_TOLERANCE: f64 = 1e-7;

/// Largest power of ten used to scale random draws.
const MAX_MAGNITUDE_EXPONENT: f64 = 3.0;

/// Any non-NaN floating-point number, infinities included, whose binary
/// operation is addition.
///
/// Floating-point addition accumulates rounding error, so
/// [`equals`](Testable::equals) compares within a tolerance of `1e-7`
/// rather than bit-for-bit; `PartialEq` stays exact. The identity is `0.0`,
/// making `RealTerm` the numeric monoid of the family.
///
/// Opposite infinities are the one operand pair whose sum falls outside the
/// set; adding them panics rather than producing a NaN member.
///
/// # Examples
///
/// ```
/// use magmoid::algebra::{Monoid, Testable};
/// use magmoid::entities::RealTerm;
///
/// let term = RealTerm::create(9.2834)?;
/// let shifted = term + RealTerm::identity();
/// assert!(shifted.equals(&term));
///
/// assert!(RealTerm::create(f64::NAN).is_err());
/// # Ok::<(), magmoid::entities::ConstructionError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealTerm(f64);

impl RealTerm {
    /// Creates a `RealTerm` from a floating-point number.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `value` is NaN.
    pub fn create(value: f64) -> Result<Self, ConstructionError> {
        if value.is_nan() {
            return Err(ConstructionError::new(Self::NAME, "value must not be NaN"));
        }
        Ok(Self(value))
    }

    /// The wrapped number.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Add for RealTerm {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the sum is NaN; opposite infinities are the only operands
    /// that produce one.
    fn add(self, other: Self) -> Self {
        let value = self.0 + other.0;
        assert!(!value.is_nan(), "add requires a non-NaN sum");
        Self(value)
    }
}

impl Testable for RealTerm {
    const NAME: &'static str = "RealTerm";

    /// Draws `(2r - 1) * 10^k` with `r` uniform in `[0, 1)` and `k` uniform
    /// in `{0, 1, 2, 3}`, spreading samples across four orders of
    /// magnitude.
    fn make_random() -> Self {
        let offset = 2.0 * rand::rng().random::<f64>() - 1.0;
        let exponent = random_int_inclusive(0.0, MAX_MAGNITUDE_EXPONENT);
        #[allow(clippy::cast_possible_truncation)]
        let scale = 10.0_f64.powi(exponent as i32);
        Self(offset * scale)
    }

    fn describes(value: &dyn Any) -> bool {
        value
            .downcast_ref::<Self>()
            .is_some_and(|term| !term.0.is_nan())
    }

    fn equals(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
            || (self.0 - other.0).abs() < EQUALITY_TOLERANCE
    }
}

impl Magma for RealTerm {
    const OPERATION: &'static str = "add";

    fn combine(self, other: Self) -> Self {
        self + other
    }
}

impl Semigroup for RealTerm {}

impl Monoid for RealTerm {
    fn identity() -> Self {
        Self(0.0)
    }
}

assert_impl_all!(RealTerm: Monoid);
