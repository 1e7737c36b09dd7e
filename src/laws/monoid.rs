//! Identity checking for monoids.

use crate::algebra::Monoid;
use crate::laws::semigroup::semigroup_suite;
use crate::laws::{LawSuite, Report, STOCHASTIC_LIMIT, Scenario, report_for, verify};
use crate::sampling::times;

/// Confirms the monoid laws for `M`: the one-time contract audit, the
/// semigroup suite (nested, with the magma suite inside it), and the
/// two-sided identity law.
///
/// The identity element must itself be a member, absorb itself, and leave
/// each of [`STOCHASTIC_LIMIT`] sampled members unchanged from both sides.
///
/// # Examples
///
/// ```rust
/// use magmoid::entities::RealTerm;
/// use magmoid::laws::check_monoid;
///
/// let report = check_monoid::<RealTerm>();
/// assert!(report.passed(), "{report}");
/// ```
#[must_use]
pub fn check_monoid<M: Monoid>() -> Report {
    report_for::<M>(monoid_suite::<M>())
}

fn monoid_suite<M: Monoid>() -> LawSuite {
    let mut suite = LawSuite::named(format!(
        "({} & binary operation `{}`) as a monoid",
        M::NAME,
        M::OPERATION
    ));
    suite.nest(semigroup_suite::<M>());
    suite.record(Scenario::run(
        format!("`{}` has a two-sided identity element", M::OPERATION),
        identity_body::<M>,
    ));
    suite
}

fn identity_body<M: Monoid>() -> Result<(), String> {
    let identity = M::identity();
    verify(M::describes(&identity), || {
        format!("the identity {identity:?} is not a member of {}", M::NAME)
    })?;
    verify(
        identity.clone().combine(identity.clone()).equals(&identity),
        || format!("the identity {identity:?} does not absorb itself"),
    )?;

    let samples = times(STOCHASTIC_LIMIT, |_| M::make_random());
    for sample in samples {
        let left = M::identity().combine(sample.clone());
        verify(left.equals(&sample), || {
            format!(
                "left identity failed: {identity:?} {operation} {sample:?} = {left:?}",
                operation = M::OPERATION
            )
        })?;
        let right = sample.clone().combine(M::identity());
        verify(right.equals(&sample), || {
            format!(
                "right identity failed: {sample:?} {operation} {identity:?} = {right:?}",
                operation = M::OPERATION
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::entities::SubString;
    use crate::laws::check_monoid;

    #[rstest]
    fn sub_string_identity_holds() {
        let report = check_monoid::<SubString>();
        assert!(report.passed(), "{report}");
    }

    #[rstest]
    fn suites_nest_monoid_over_semigroup_over_magma() {
        let report = check_monoid::<SubString>();
        let monoid = report.sections().last().expect("structure suite");
        assert!(monoid.name().ends_with("as a monoid"));
        let semigroup = &monoid.nested()[0];
        assert!(semigroup.name().ends_with("as a semigroup"));
        let magma = &semigroup.nested()[0];
        assert!(magma.name().ends_with("as a magma"));
        assert!(magma.nested().is_empty());
    }
}
