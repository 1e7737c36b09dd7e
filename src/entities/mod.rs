//! Example carrier types exercising the structure tower.
//!
//! Each type registers with the narrowest checker its operation honestly
//! supports:
//!
//! - [`Tree`]: a magma only; fusing creates structure and is not
//!   associative.
//! - [`PosIntTerm`] and [`EvenFactor`]: semigroups whose candidate
//!   identities fall outside the described set.
//! - [`RealTerm`] and [`SubString`]: full monoids.
//!
//! Fallible constructors follow the `create` convention and return
//! [`ConstructionError`] when a value fails its domain invariant.

mod error;
mod even_factor;
mod pos_int_term;
mod real_term;
mod sub_string;
mod tree;

pub use error::ConstructionError;
pub use even_factor::EvenFactor;
pub use pos_int_term::PosIntTerm;
pub use real_term::RealTerm;
pub use sub_string::SubString;
pub use tree::Tree;
