//! Stochastic law checkers and the report tree they produce.
//!
//! Each checker draws [`STOCHASTIC_LIMIT`] random samples per scenario and
//! records verdicts into a [`Report`] instead of panicking, so a failing
//! scenario never prevents its siblings from running and a single render
//! shows every outcome at once. There are no retries: a law either holds on
//! every drawn sample or the scenario fails with the first counterexample.
//!
//! Checkers compose downward:
//!
//! - [`check_magma`] confirms the [`Testable`](crate::algebra::Testable)
//!   contract (once per type per process, via [`confirm_testable`]) and the
//!   closure law.
//! - [`check_semigroup`] nests the magma suite and adds associativity.
//! - [`check_monoid`] nests the semigroup suite and adds the two-sided
//!   identity law.
//!
//! # Examples
//!
//! ```rust
//! use magmoid::entities::SubString;
//! use magmoid::laws::check_monoid;
//!
//! let report = check_monoid::<SubString>();
//! assert!(report.passed(), "{report}");
//! print!("{report}");
//! ```

mod magma;
mod monoid;
mod report;
mod semigroup;
mod testable;

pub use magma::check_magma;
pub use monoid::check_monoid;
pub use report::{LawSuite, Report, Scenario, Verdict};
pub use semigroup::check_semigroup;
pub use testable::confirm_testable;

use crate::algebra::Testable;

/// Number of random samples drawn per stochastic scenario.
pub const STOCHASTIC_LIMIT: usize = 11;

/// Builds the expectation result every scenario body is made of.
pub(crate) fn verify(condition: bool, message: impl FnOnce() -> String) -> Result<(), String> {
    if condition { Ok(()) } else { Err(message()) }
}

/// Assembles a report from the one-time contract confirmation (when this is
/// the type's first) and the structure suite.
pub(crate) fn report_for<T: Testable>(suite: LawSuite) -> Report {
    let mut sections = Vec::with_capacity(2);
    if let Some(contract) = confirm_testable::<T>() {
        sections.push(contract);
    }
    sections.push(suite);
    Report::from_sections(sections)
}
