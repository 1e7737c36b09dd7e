//! Integration tests for the identity checker.
//!
//! Confirms that the shipped monoids pass, that a first check of a fresh
//! type yields the full four-scenario report, and that a wrong or
//! non-member identity fails only the identity scenario.

use std::any::Any;

use rstest::rstest;

use magmoid::algebra::{Magma, Monoid, Semigroup, Testable};
use magmoid::entities::{RealTerm, SubString};
use magmoid::laws::check_monoid;

// =============================================================================
// Shipped entities
// =============================================================================

/// Real addition with zero as identity satisfies every law in the tower.
#[rstest]
fn test_real_term_passes_the_monoid_laws() {
    let report = check_monoid::<RealTerm>();
    assert!(report.passed(), "{report}");
}

/// String concatenation with the empty string as identity satisfies every
/// law in the tower.
#[rstest]
fn test_sub_string_passes_the_monoid_laws() {
    let report = check_monoid::<SubString>();
    assert!(report.passed(), "{report}");
}

/// Folding from the identity swallows an empty batch and concatenates a
/// full one.
#[rstest]
fn test_combine_all_folds_from_identity() {
    assert_eq!(SubString::combine_all(Vec::new()).value(), "");

    let pieces = vec![SubString::new("hi"), SubString::new("World")];
    assert_eq!(SubString::combine_all(pieces).value(), "hiWorld");
}

// =============================================================================
// Suite shape
// =============================================================================

/// A first check of a fresh type reports the contract audit plus the three
/// laws of the tower, four scenarios in all.
#[rstest]
fn test_a_first_check_counts_four_scenarios() {
    #[derive(Clone, Debug, PartialEq)]
    struct Knot(i64);

    impl Testable for Knot {
        const NAME: &'static str = "Knot";

        fn make_random() -> Self {
            Self(i64::from(rand::random::<i16>()))
        }

        fn describes(value: &dyn Any) -> bool {
            value.downcast_ref::<Self>().is_some()
        }

        fn equals(&self, other: &Self) -> bool {
            self == other
        }
    }

    impl Magma for Knot {
        const OPERATION: &'static str = "tie";

        fn combine(self, other: Self) -> Self {
            Self(self.0 + other.0)
        }
    }

    impl Semigroup for Knot {}

    impl Monoid for Knot {
        fn identity() -> Self {
            Self(0)
        }
    }

    let report = check_monoid::<Knot>();
    assert!(report.passed(), "{report}");
    assert_eq!(report.sections().len(), 2);
    assert_eq!(report.scenario_count(), 4);

    let monoid = report.sections().last().expect("monoid suite");
    assert!(monoid.name().ends_with("as a monoid"));
    let semigroup = &monoid.nested()[0];
    assert!(semigroup.name().ends_with("as a semigroup"));
    assert!(semigroup.nested()[0].name().ends_with("as a magma"));
}

// =============================================================================
// Violations
// =============================================================================

/// One is not an additive identity; it cannot even absorb itself, so the
/// identity scenario fails while everything beneath it holds.
#[rstest]
fn test_a_wrong_identity_fails_only_the_identity_scenario() {
    #[derive(Clone, Debug, PartialEq)]
    struct Shifted(i64);

    impl Testable for Shifted {
        const NAME: &'static str = "Shifted";

        fn make_random() -> Self {
            Self(i64::from(rand::random::<i16>()))
        }

        fn describes(value: &dyn Any) -> bool {
            value.downcast_ref::<Self>().is_some()
        }

        fn equals(&self, other: &Self) -> bool {
            self == other
        }
    }

    impl Magma for Shifted {
        const OPERATION: &'static str = "shift";

        fn combine(self, other: Self) -> Self {
            Self(self.0 + other.0)
        }
    }

    impl Semigroup for Shifted {}

    impl Monoid for Shifted {
        fn identity() -> Self {
            Self(1)
        }
    }

    let report = check_monoid::<Shifted>();
    assert!(!report.passed());

    let monoid = report.sections().last().expect("monoid suite");
    let identity = &monoid.scenarios()[0];
    assert!(!identity.passed());
    let message = identity.failure_message().expect("identity failure");
    assert!(
        message.contains("does not absorb itself"),
        "unexpected message: {message}"
    );
    assert!(
        monoid.nested()[0].passed(),
        "associativity and closure are untouched by a bad identity"
    );
}

/// The evens are closed under addition, but the claimed identity is odd,
/// so the identity element is not a member of the set.
#[rstest]
fn test_an_identity_outside_the_set_is_caught() {
    #[derive(Clone, Debug, PartialEq)]
    struct Evens(i64);

    impl Testable for Evens {
        const NAME: &'static str = "Evens";

        fn make_random() -> Self {
            Self(2 * i64::from(rand::random::<i8>()))
        }

        fn describes(value: &dyn Any) -> bool {
            value
                .downcast_ref::<Self>()
                .is_some_and(|member| member.0 % 2 == 0)
        }

        fn equals(&self, other: &Self) -> bool {
            self == other
        }
    }

    impl Magma for Evens {
        const OPERATION: &'static str = "plus";

        fn combine(self, other: Self) -> Self {
            Self(self.0 + other.0)
        }
    }

    impl Semigroup for Evens {}

    impl Monoid for Evens {
        fn identity() -> Self {
            Self(1)
        }
    }

    let report = check_monoid::<Evens>();
    assert!(!report.passed());

    let monoid = report.sections().last().expect("monoid suite");
    let identity = &monoid.scenarios()[0];
    assert!(!identity.passed());
    let message = identity.failure_message().expect("identity failure");
    assert!(
        message.contains("is not a member"),
        "unexpected message: {message}"
    );
}
