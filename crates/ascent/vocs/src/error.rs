//! Specification error types

use thiserror::Error;

/// Errors raised when a problem specification is malformed or incompatible
/// with a generator's declared capabilities.
///
/// Every variant carries the specific mismatched dimension so callers can
/// present an actionable message. None of these are recoverable internally;
/// they indicate a configuration mistake and construction must not proceed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VocsError {
    #[error("problem declares no variables")]
    NoVariables,

    #[error("invalid bounds for variable '{name}': [{lower}, {upper}] must be finite and ordered")]
    InvalidBounds {
        name: String,
        lower: f64,
        upper: f64,
    },

    #[error("constraint '{name}' has a non-finite threshold")]
    NonFiniteThreshold { name: String },

    #[error("observable '{name}' is declared more than once")]
    DuplicateObservable { name: String },

    #[error("generator supports at most one objective, problem declares {declared}")]
    TooManyObjectives { declared: usize },

    #[error("generator does not support single-objective problems")]
    SingleObjectiveUnsupported,

    #[error("generator requires at least one objective")]
    ObjectiveRequired,

    #[error("generator does not support constraints, problem declares {declared}")]
    ConstraintsUnsupported { declared: usize },

    #[error("reference point must name every objective (expected {expected:?}, found {found:?})")]
    ReferencePointMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}
