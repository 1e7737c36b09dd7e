//! Associative binary operations.

use crate::algebra::Magma;

/// A [`Magma`] whose operation is associative.
///
/// # Laws
///
/// - **Associativity**: for all members `x`, `y`, `z`,
///   `(x.combine(y)).combine(z)` equals `x.combine(y.combine(z))` under
///   [`equals`](crate::algebra::Testable::equals).
///
/// Associativity is what makes reduction well-defined: any grouping of a
/// fold yields the same member. [`crate::laws::check_semigroup`] confirms
/// the law stochastically (and closure along with it).
///
/// # Examples
///
/// ```rust
/// use magmoid::algebra::Semigroup;
/// use magmoid::entities::PosIntTerm;
///
/// let terms = vec![
///     PosIntTerm::create(1)?,
///     PosIntTerm::create(2)?,
///     PosIntTerm::create(3)?,
/// ];
/// assert_eq!(PosIntTerm::reduce_all(terms).map(|term| term.value()), Some(6));
///
/// assert!(PosIntTerm::reduce_all(Vec::new()).is_none());
/// # Ok::<(), magmoid::entities::ConstructionError>(())
/// ```
pub trait Semigroup: Magma {
    /// Reduces `items` left-to-right with [`Magma::combine`].
    ///
    /// Returns `None` for empty input. Associativity guarantees the grouping
    /// does not matter.
    fn reduce_all<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
