//! Registry error types

use ascent_generator::GeneratorError;
use thiserror::Error;

/// Errors raised by registry registration and lookup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown generator '{name}'")]
    UnknownGenerator { name: String },

    #[error("generator name '{name}' is already registered")]
    DuplicateName { name: &'static str },

    #[error("default configuration for '{name}' does not round-trip: {reason}")]
    UnserializableDefaults { name: &'static str, reason: String },

    /// Construction through the registry failed.
    #[error(transparent)]
    Construction(#[from] GeneratorError),
}
