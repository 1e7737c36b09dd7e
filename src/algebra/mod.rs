//! The algebraic structure tower.
//!
//! Structures refine one another through supertraits:
//!
//! - [`Testable`]: the capability contract every checked type carries
//!   (stable name, random generator, membership predicate, reflexive
//!   equivalence)
//! - [`Magma`]: a closed binary operation (`combine`)
//! - [`Semigroup`]: a magma whose operation is associative
//! - [`Monoid`]: a semigroup with a two-sided identity element
//!
//! Implementing one of these traits states an *intent*; whether the
//! implementation actually upholds the corresponding laws is what the
//! checkers in [`crate::laws`] confirm stochastically.
//!
//! # Examples
//!
//! ```rust
//! use magmoid::algebra::{Monoid, Semigroup};
//! use magmoid::entities::{PosIntTerm, SubString};
//!
//! // A semigroup reduces without a starting element.
//! let terms = vec![PosIntTerm::create(5)?, PosIntTerm::create(9)?];
//! assert_eq!(PosIntTerm::reduce_all(terms).map(|term| term.value()), Some(14));
//!
//! // A monoid folds from its identity, so empty input is fine.
//! assert_eq!(SubString::combine_all(Vec::new()).value(), "");
//! # Ok::<(), magmoid::entities::ConstructionError>(())
//! ```

mod magma;
mod monoid;
mod semigroup;
mod testable;

pub use magma::Magma;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use testable::Testable;
