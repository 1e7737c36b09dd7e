//! Associative operations with a two-sided identity.

use crate::algebra::Semigroup;

/// A [`Semigroup`] with a distinguished two-sided identity element.
///
/// # Laws
///
/// - **Left identity**: `Self::identity().combine(x)` equals `x`.
/// - **Right identity**: `x.combine(Self::identity())` equals `x`.
///
/// The identity must itself be a member of the described set. Uniqueness is
/// not part of the contract: [`crate::laws::check_monoid`] confirms the
/// element this trait provides and nothing more.
///
/// # Examples
///
/// ```rust
/// use magmoid::algebra::{Magma, Monoid};
/// use magmoid::entities::SubString;
///
/// let greeting = SubString::new("hi").combine(SubString::identity());
/// assert_eq!(greeting.value(), "hi");
///
/// let words = vec![SubString::new("hi"), SubString::new("World")];
/// assert_eq!(SubString::combine_all(words).value(), "hiWorld");
/// ```
pub trait Monoid: Semigroup {
    /// The two-sided identity element.
    #[must_use]
    fn identity() -> Self;

    /// Folds `items` left-to-right with [`combine`](crate::algebra::Magma::combine),
    /// starting from [`identity`](Monoid::identity).
    ///
    /// Empty input yields the identity itself.
    #[must_use]
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Self::identity(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}
