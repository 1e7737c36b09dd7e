//! A string-concatenation monoid.

use std::any::Any;

use static_assertions::assert_impl_all;

use crate::algebra::{Magma, Monoid, Semigroup, Testable};
use crate::sampling::random_string;

/// Any owned string under concatenation.
///
/// Every string is a member, so [`new`](SubString::new) is infallible: the
/// carrier type itself proves the invariant. Concatenation is closed and
/// associative, and the empty string is a two-sided identity, making
/// `SubString` the textual monoid of the family.
///
/// # Examples
///
/// ```
/// use magmoid::entities::SubString;
///
/// let greeting = SubString::new("hi").concat(SubString::new("World"));
/// assert_eq!(greeting.value(), "hiWorld");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubString(String);

impl SubString {
    /// Wraps a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wrapped text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Appends `other` after `self`.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.0.push_str(&other.0);
        self
    }
}

impl Testable for SubString {
    const NAME: &'static str = "SubString";

    fn make_random() -> Self {
        Self(random_string())
    }

    fn describes(value: &dyn Any) -> bool {
        value.downcast_ref::<Self>().is_some()
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Magma for SubString {
    const OPERATION: &'static str = "concat";

    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl Semigroup for SubString {}

impl Monoid for SubString {
    fn identity() -> Self {
        Self(String::new())
    }
}

assert_impl_all!(SubString: Monoid);
