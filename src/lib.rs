//! # magmoid
//!
//! Composable, report-producing law checkers for algebraic structures:
//! magma (closure), semigroup (associativity), and monoid (two-sided
//! identity).
//!
//! ## Overview
//!
//! The crate is built around a small tower of traits and the checkers that
//! audit them:
//!
//! - **Structure tower** ([`algebra`]): [`algebra::Testable`] is the
//!   capability contract every checked type carries (a stable name, a random
//!   generator, a membership predicate, and a reflexive equivalence);
//!   [`algebra::Magma`], [`algebra::Semigroup`], and [`algebra::Monoid`]
//!   refine it with a closed binary operation, associativity, and a
//!   two-sided identity.
//! - **Law checkers** ([`laws`]): [`laws::check_magma`],
//!   [`laws::check_semigroup`], and [`laws::check_monoid`] draw
//!   [`laws::STOCHASTIC_LIMIT`] random samples per scenario and produce a
//!   structured [`laws::Report`] instead of panicking. Each checker nests
//!   the suites of every weaker structure, so confirming a monoid
//!   transitively confirms the semigroup and magma laws too.
//! - **Sampling** ([`sampling`]): the small random-generation utilities the
//!   checkers and example types share.
//! - **Entities** ([`entities`]): five worked carrier types, from the
//!   magma-only [`entities::Tree`] up to the monoids
//!   [`entities::RealTerm`] and [`entities::SubString`].
//!
//! ## Example
//!
//! ```rust
//! use magmoid::entities::RealTerm;
//! use magmoid::laws::check_monoid;
//!
//! let report = check_monoid::<RealTerm>();
//! assert!(report.passed(), "{report}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use magmoid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::entities::*;
    pub use crate::laws::*;
    pub use crate::sampling::*;
}

pub mod algebra;

pub mod entities;

pub mod laws;

pub mod sampling;
