//! Error types for the roster core.
//!
//! Every mutation path through the registry reports one of three
//! distinguishable kinds: a failed range/parse check, a duplicate student id,
//! or a lookup miss. All of them are recoverable; callers surface the message
//! and keep the session going.

use thiserror::Error;

/// A candidate field value failed the shared validation contract.
///
/// Out-of-range numbers and non-numeric text share this kind but carry
/// distinguishable messages, so front ends can re-prompt with the exact cause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric value fell outside the closed range [0, 100].
    #[error("{field} must be between 0 and 100, got {value}")]
    OutOfRange {
        /// Which field was being set (e.g., "attendance", "quiz").
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Text input could not be interpreted as a real number.
    #[error("{field} must be a number, got '{text}'")]
    NotNumeric {
        /// Which field was being set.
        field: &'static str,
        /// The rejected input text.
        text: String,
    },

    /// A required identity field was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Which field was empty ("id" or "name").
        field: &'static str,
    },
}

/// Errors reported by [`ClassRegistry`](crate::core::registry::ClassRegistry)
/// operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A field update failed validation; prior state is retained.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Registration attempted with an id that is already present.
    #[error("student id '{0}' is already registered")]
    DuplicateId(String),

    /// An operation referenced an id that is not in the registry.
    #[error("no student with id '{0}'")]
    NotFound(String),
}
