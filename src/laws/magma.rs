//! Closure checking for magmas.

use crate::algebra::Magma;
use crate::laws::{LawSuite, Report, STOCHASTIC_LIMIT, Scenario, report_for, verify};
use crate::sampling::times;

/// Confirms the magma laws for `M`: the one-time
/// [`Testable`](crate::algebra::Testable) contract audit, then closure of
/// the binary operation.
///
/// Draws [`STOCHASTIC_LIMIT`] operand pairs; every combination must stay
/// inside the described set.
///
/// # Examples
///
/// ```rust
/// use magmoid::entities::Tree;
/// use magmoid::laws::check_magma;
///
/// let report = check_magma::<Tree>();
/// assert!(report.passed(), "{report}");
/// ```
#[must_use]
pub fn check_magma<M: Magma>() -> Report {
    report_for::<M>(magma_suite::<M>())
}

/// The magma suite alone, without the contract section. Stronger checkers
/// nest this.
pub(crate) fn magma_suite<M: Magma>() -> LawSuite {
    let mut suite = LawSuite::named(format!(
        "({} & binary operation `{}`) as a magma",
        M::NAME,
        M::OPERATION
    ));
    suite.record(Scenario::run(
        format!("`{}` combines any two members into a member", M::OPERATION),
        closure_body::<M>,
    ));
    suite
}

fn closure_body<M: Magma>() -> Result<(), String> {
    let pairs = times(STOCHASTIC_LIMIT, |_| (M::make_random(), M::make_random()));
    for (first, second) in pairs {
        let combined = first.clone().combine(second.clone());
        verify(M::describes(&combined), || {
            format!(
                "{first:?} `{operation}` {second:?} escaped the set: {combined:?}",
                operation = M::OPERATION
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::entities::Tree;
    use crate::laws::check_magma;

    #[rstest]
    fn tree_closure_holds() {
        let report = check_magma::<Tree>();
        assert!(report.passed(), "{report}");
    }

    #[rstest]
    fn the_structure_suite_names_type_and_operation() {
        let report = check_magma::<Tree>();
        let suite = report.sections().last().expect("structure suite");
        assert_eq!(suite.name(), "(Tree & binary operation `fuse`) as a magma");
        assert_eq!(suite.scenarios().len(), 1);
        assert!(suite.nested().is_empty());
    }
}
