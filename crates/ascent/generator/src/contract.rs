//! The generator trait and candidate type

use crate::capabilities::Capabilities;
use crate::error::GeneratorError;
use ascent_data::{Batch, ObservationTable};
use ascent_vocs::Vocs;
use std::collections::BTreeMap;

/// A proposed input point: every variable name mapped to a value inside its
/// declared bounds, awaiting external evaluation.
pub type Candidate = BTreeMap<String, f64>;

/// The contract every optimization algorithm variant satisfies.
///
/// A generator owns exactly one problem specification and one observation
/// table. Construction validates the specification against the variant's
/// declared [`Capabilities`] and either fails permanently or yields a ready
/// generator with an empty table; there is no partially-constructed state.
///
/// From ready, `generate` and `add_data` are available indefinitely, in any
/// order. The `&mut self` receivers make serialized access a compile-time
/// property - the core is single-threaded by contract and has no internal
/// locking.
pub trait Generator: std::fmt::Debug {
    /// The variant's registered name.
    fn name(&self) -> &'static str;

    /// The variant's static capability declaration.
    fn capabilities(&self) -> Capabilities;

    fn vocs(&self) -> &Vocs;

    fn data(&self) -> &ObservationTable;

    /// Produce up to `n_candidates` proposed inputs conforming to the
    /// variable domains.
    ///
    /// Must not touch the observation table. Randomness, if any, is seeded
    /// and documented by the variant. Fails with
    /// [`GeneratorError::BatchUnsupported`] when `n_candidates > 1` on a
    /// variant without batch support.
    fn generate(&mut self, n_candidates: usize) -> Result<Vec<Candidate>, GeneratorError>;

    /// Append evaluated rows to the observation table.
    ///
    /// The only way the table grows. Batch columns must be declared by the
    /// VOCS; the append is all-or-nothing.
    fn add_data(&mut self, batch: Batch) -> Result<(), GeneratorError>;
}

/// Guard a `generate` request against the variant's capability flags.
///
/// Call before doing any work so a rejected request has no effect.
pub fn ensure_batch_capability(
    capabilities: &Capabilities,
    n_candidates: usize,
) -> Result<(), GeneratorError> {
    if n_candidates == 0 {
        return Err(GeneratorError::EmptyRequest);
    }
    if n_candidates > 1 && !capabilities.batch_generation {
        return Err(GeneratorError::BatchUnsupported {
            requested: n_candidates,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_guard() {
        let batching = Capabilities::all();
        assert!(ensure_batch_capability(&batching, 1).is_ok());
        assert!(ensure_batch_capability(&batching, 64).is_ok());

        let sequential = Capabilities {
            batch_generation: false,
            ..Capabilities::all()
        };
        assert!(ensure_batch_capability(&sequential, 1).is_ok());
        assert!(matches!(
            ensure_batch_capability(&sequential, 2),
            Err(GeneratorError::BatchUnsupported { requested: 2 })
        ));
        assert!(matches!(
            ensure_batch_capability(&sequential, 0),
            Err(GeneratorError::EmptyRequest)
        ));
    }
}
