//! The capability contract shared by every checkable type.

use std::any::Any;
use std::fmt::Debug;

/// The capability contract a type must carry before any of its structure
/// laws can be checked.
///
/// `Testable` is the floor of the tower: it says nothing about operations,
/// only that the type can present itself for stochastic examination. The
/// supertraits pull in what the checkers need mechanically (`Clone` to reuse
/// samples across groupings, `Debug` to render counterexamples, `'static`
/// to participate in [`describes`](Testable::describes) downcasts and the
/// one-time confirmation registry).
///
/// # Contract
///
/// - [`NAME`](Testable::NAME) is non-empty and stable.
/// - [`make_random`](Testable::make_random) must be able to produce varied
///   output across calls; a constant generator starves every stochastic
///   check downstream.
/// - [`describes`](Testable::describes) answers set membership for an
///   arbitrary runtime value. Values of foreign types are never members.
/// - [`equals`](Testable::equals) is reflexive.
///
/// [`crate::laws::confirm_testable`] audits this contract once per type per
/// process.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
///
/// use magmoid::algebra::Testable;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Parity(bool);
///
/// impl Testable for Parity {
///     const NAME: &'static str = "Parity";
///
///     fn make_random() -> Self {
///         Self(rand::random())
///     }
///
///     fn describes(value: &dyn Any) -> bool {
///         value.downcast_ref::<Self>().is_some()
///     }
///
///     fn equals(&self, other: &Self) -> bool {
///         self == other
///     }
/// }
///
/// assert!(Parity::describes(&Parity(true)));
/// assert!(!Parity::describes(&42));
/// ```
pub trait Testable: Clone + Debug + 'static {
    /// Stable, human-readable type name used in report headings.
    const NAME: &'static str;

    /// Draws a fresh instance from the described set.
    #[must_use]
    fn make_random() -> Self;

    /// Whether `value` is a member of the described set.
    ///
    /// Implementations downcast to `Self` and then re-validate the domain
    /// invariant, so a shape-correct value holding an out-of-domain payload
    /// is rejected.
    fn describes(value: &dyn Any) -> bool;

    /// Law-level equivalence between two members.
    ///
    /// Must be reflexive. Carriers with approximate representations may
    /// compare within a tolerance here while keeping `PartialEq` exact.
    fn equals(&self, other: &Self) -> bool;
}
