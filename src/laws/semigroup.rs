//! Associativity checking for semigroups.

use crate::algebra::Semigroup;
use crate::laws::magma::magma_suite;
use crate::laws::{LawSuite, Report, STOCHASTIC_LIMIT, Scenario, report_for, verify};
use crate::sampling::times;

/// Confirms the semigroup laws for `S`: the one-time contract audit, the
/// magma suite (nested), and associativity.
///
/// Draws [`STOCHASTIC_LIMIT`] operand triples; both groupings of every
/// triple must agree under `equals`.
///
/// # Examples
///
/// ```rust
/// use magmoid::entities::PosIntTerm;
/// use magmoid::laws::check_semigroup;
///
/// let report = check_semigroup::<PosIntTerm>();
/// assert!(report.passed(), "{report}");
/// ```
#[must_use]
pub fn check_semigroup<S: Semigroup>() -> Report {
    report_for::<S>(semigroup_suite::<S>())
}

/// The semigroup suite alone: the magma suite nested, associativity
/// recorded after it.
pub(crate) fn semigroup_suite<S: Semigroup>() -> LawSuite {
    let mut suite = LawSuite::named(format!(
        "({} & binary operation `{}`) as a semigroup",
        S::NAME,
        S::OPERATION
    ));
    suite.nest(magma_suite::<S>());
    suite.record(Scenario::run(
        format!("`{}` is associative", S::OPERATION),
        associativity_body::<S>,
    ));
    suite
}

fn associativity_body<S: Semigroup>() -> Result<(), String> {
    let triples = times(STOCHASTIC_LIMIT, |_| {
        (S::make_random(), S::make_random(), S::make_random())
    });
    for (first, second, third) in triples {
        let grouped_left = first.clone().combine(second.clone()).combine(third.clone());
        let grouped_right = first.clone().combine(second.clone().combine(third.clone()));
        verify(grouped_left.equals(&grouped_right), || {
            format!(
                "grouping matters for x = {first:?}, y = {second:?}, z = {third:?}: \
                 (x {operation} y) {operation} z = {grouped_left:?} but \
                 x {operation} (y {operation} z) = {grouped_right:?}",
                operation = S::OPERATION
            )
        })?;
    }
    Ok(())
}
