//! Closed binary operations.

use crate::algebra::Testable;

/// A set equipped with a closed binary operation.
///
/// # Laws
///
/// - **Closure**: for all members `x` and `y`, `x.combine(y)` is again a
///   member of the set (it satisfies
///   [`describes`](crate::algebra::Testable::describes)).
///
/// Nothing further is promised: the operation may be non-associative and
/// have no identity. [`crate::laws::check_magma`] confirms closure
/// stochastically.
///
/// # Examples
///
/// ```rust
/// use magmoid::algebra::Magma;
/// use magmoid::entities::Tree;
///
/// let fused = Tree::leaf(1.0).combine(Tree::leaf(2.0));
/// assert!(fused.value().is_none());
/// ```
pub trait Magma: Testable {
    /// Display name of the binary operation, used in report headings.
    const OPERATION: &'static str;

    /// Combines two members with the type's binary operation.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}
