//! Generator error types

use ascent_data::DataError;
use ascent_vocs::VocsError;
use thiserror::Error;

/// Errors surfaced by generator construction, candidate generation, and
/// observation ingestion.
///
/// All of these are fail-fast: the call has no effect, nothing is retried
/// internally, and recovery (if any) is the caller's responsibility.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Problem specification malformed or incompatible with capabilities.
    #[error(transparent)]
    Vocs(#[from] VocsError),

    /// Observation batch malformed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Batch request to a variant that declares no batch support.
    #[error("generator does not support batch generation (requested {requested} candidates)")]
    BatchUnsupported { requested: usize },

    /// A request for zero candidates is a caller mistake, not a no-op.
    #[error("requested zero candidates")]
    EmptyRequest,

    /// Observation batch references a column the VOCS does not declare.
    #[error("observation batch references unknown column '{column}'")]
    UnknownColumn { column: String },

    /// Option mapping could not be decoded into the variant's configuration.
    #[error("invalid generator options: {message}")]
    Config { message: String },

    /// A data-driven variant was asked to generate before it had enough
    /// observations to work from.
    #[error("not enough observations (need {needed}, have {available})")]
    InsufficientData { needed: usize, available: usize },
}
