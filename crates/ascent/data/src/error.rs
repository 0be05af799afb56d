//! Data ingestion error types

use thiserror::Error;

/// Errors raised while assembling or appending observation batches.
///
/// Appends are all-or-nothing: when any of these is raised the table has not
/// been modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("row label '{label}' is not coercible to an integer identity")]
    NonNumericLabel { label: String },

    #[error("label count {labels} does not match row count {rows}")]
    LabelCountMismatch { labels: usize, rows: usize },

    #[error("row has {found} values, batch declares {expected} columns")]
    RaggedRow { expected: usize, found: usize },

    #[error("duplicate column '{name}' in batch")]
    DuplicateColumn { name: String },
}
