//! One-time confirmation of the capability contract.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{LazyLock, Mutex, PoisonError};

use crate::algebra::Testable;
use crate::laws::{LawSuite, STOCHASTIC_LIMIT, Scenario, verify};
use crate::sampling::times;

/// Process-wide registry of types whose contract has been confirmed.
static CONFIRMED: LazyLock<Mutex<HashSet<TypeId>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Audits the [`Testable`] contract for `T`, at most once per process.
///
/// The first call for a given type returns the confirmation suite; every
/// later call returns `None` without re-running anything. Registration
/// happens up front, so a failed audit is not repeated either.
///
/// The suite holds one scenario that checks, in order:
///
/// 1. [`Testable::NAME`] is non-empty.
/// 2. `describes` rejects a battery of foreign values: a short string, an
///    integer, an absent value, an empty sequence, an empty mapping,
///    boolean `false`, and the unit value.
/// 3. Every one of [`STOCHASTIC_LIMIT`] drawn samples satisfies
///    `describes`.
/// 4. At least one adjacent pair of samples differs under `equals`
///    (a constant generator fails here).
/// 5. `equals` is reflexive on every sample.
///
/// # Examples
///
/// ```rust
/// use magmoid::entities::EvenFactor;
/// use magmoid::laws::confirm_testable;
///
/// let first = confirm_testable::<EvenFactor>();
/// let second = confirm_testable::<EvenFactor>();
/// assert!(first.is_some_and(|suite| suite.passed()));
/// assert!(second.is_none());
/// ```
#[must_use]
pub fn confirm_testable<T: Testable>() -> Option<LawSuite> {
    let mut confirmed = CONFIRMED.lock().unwrap_or_else(PoisonError::into_inner);
    if !confirmed.insert(TypeId::of::<T>()) {
        return None;
    }
    drop(confirmed);

    let mut suite = LawSuite::named(format!("{} as a Testable", T::NAME));
    suite.record(Scenario::run(
        "has the requisite shape and behavior",
        contract_body::<T>,
    ));
    Some(suite)
}

fn contract_body<T: Testable>() -> Result<(), String> {
    verify(!T::NAME.is_empty(), || {
        "the type name must not be empty".to_string()
    })?;

    let short_string = "hi";
    let integer = 1_i32;
    let absent: Option<i32> = None;
    let empty_sequence: Vec<i32> = Vec::new();
    let empty_mapping: HashMap<String, i32> = HashMap::new();
    let boolean = false;
    let unit = ();
    let foreign: [(&str, &dyn Any); 7] = [
        ("a short string", &short_string),
        ("an integer", &integer),
        ("an absent value", &absent),
        ("an empty sequence", &empty_sequence),
        ("an empty mapping", &empty_mapping),
        ("boolean false", &boolean),
        ("the unit value", &unit),
    ];
    for (label, value) in foreign {
        verify(!T::describes(value), || {
            format!("{} claims to describe {label}", T::NAME)
        })?;
    }

    let samples = times(STOCHASTIC_LIMIT, |_| T::make_random());
    for sample in &samples {
        verify(T::describes(sample), || {
            format!("{} fails to describe its own sample {sample:?}", T::NAME)
        })?;
    }

    verify(
        samples.windows(2).any(|pair| !pair[0].equals(&pair[1])),
        || {
            format!(
                "{}::make_random produced {STOCHASTIC_LIMIT} identical instances in a row",
                T::NAME
            )
        },
    )?;

    for sample in &samples {
        verify(sample.equals(sample), || {
            format!("{}::equals is not reflexive on {sample:?}", T::NAME)
        })?;
    }

    Ok(())
}
