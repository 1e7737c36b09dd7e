//! Construction error type definition.

use thiserror::Error;

/// Error returned when a carrier value fails its domain invariant.
///
/// Used commonly by all fallible entity constructors. Holds the entity type
/// name and a message describing the violated invariant.
///
/// # Examples
///
/// ```
/// use magmoid::entities::ConstructionError;
///
/// let error = ConstructionError::new("PosIntTerm", "value must be at least 1");
/// assert_eq!(error.type_name, "PosIntTerm");
/// assert_eq!(error.message, "value must be at least 1");
/// assert_eq!(error.to_string(), "PosIntTerm: value must be at least 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{type_name}: {message}")]
pub struct ConstructionError {
    /// Name of the entity type that rejected the value
    pub type_name: String,
    /// Description of the violated invariant
    pub message: String,
}

impl ConstructionError {
    /// Creates a new `ConstructionError`.
    #[must_use]
    pub fn new(type_name: &str, message: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            message: message.to_string(),
        }
    }
}
