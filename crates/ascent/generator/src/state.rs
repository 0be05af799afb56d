//! Shared generator state: one VOCS, one observation table

use crate::capabilities::Capabilities;
use crate::compatibility::check_compatibility;
use crate::error::GeneratorError;
use ascent_data::{Batch, ObservationTable};
use ascent_vocs::{Vocs, VocsError};
use tracing::debug;

/// The composition core every concrete generator embeds.
///
/// Owns exactly one problem specification and one observation table, both
/// exclusively; neither is shared across generator instances. Construction
/// runs the structural and capability checks before the table exists, so a
/// rejected specification never produces a partially-initialized generator.
#[derive(Debug, Clone)]
pub struct GeneratorState {
    vocs: Vocs,
    table: ObservationTable,
}

impl GeneratorState {
    /// Validate `vocs` against `capabilities` and initialize an empty table.
    pub fn new(vocs: Vocs, capabilities: &Capabilities) -> Result<Self, VocsError> {
        vocs.validate()?;
        check_compatibility(&vocs, capabilities)?;
        debug!(
            variables = vocs.n_variables(),
            objectives = vocs.n_objectives(),
            constraints = vocs.n_constraints(),
            "problem specification accepted"
        );
        Ok(Self {
            vocs,
            table: ObservationTable::new(),
        })
    }

    pub fn vocs(&self) -> &Vocs {
        &self.vocs
    }

    pub fn data(&self) -> &ObservationTable {
        &self.table
    }

    /// Replace the problem specification, re-running the full validation.
    ///
    /// The hook for variants that accept structural mutation after
    /// construction. On failure the current specification is kept.
    pub fn replace_vocs(
        &mut self,
        vocs: Vocs,
        capabilities: &Capabilities,
    ) -> Result<(), VocsError> {
        vocs.validate()?;
        check_compatibility(&vocs, capabilities)?;
        self.vocs = vocs;
        Ok(())
    }

    /// The shared `add_data` path: check batch columns against the VOCS and
    /// append.
    ///
    /// All-or-nothing: an unknown column or a bad label leaves the table
    /// untouched.
    pub fn ingest(&mut self, batch: Batch) -> Result<(), GeneratorError> {
        for column in batch.columns() {
            if !self.vocs.is_known_column(column) {
                return Err(GeneratorError::UnknownColumn {
                    column: column.clone(),
                });
            }
        }

        let appended = batch.len();
        let total = self.table.append(batch)?;
        debug!(appended, total, "appended observation rows");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_data::Value;
    use ascent_vocs::{ConstraintOp, ObjectiveDirection};

    fn base_vocs() -> Vocs {
        let mut vocs = Vocs::new();
        vocs.add_variable("x1", 0.0, 1.0).unwrap();
        vocs.add_variable("x2", 0.0, 1.0).unwrap();
        vocs.add_objective("y1", ObjectiveDirection::Minimize);
        vocs.add_constraint("c1", ConstraintOp::GreaterThan, 0.5)
            .unwrap();
        vocs
    }

    fn row(values: &[(&str, f64)]) -> Vec<(String, Value)> {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), Value::from(*value)))
            .collect()
    }

    #[test]
    fn construction_validates_before_creating_table() {
        let capabilities = Capabilities {
            multi_objective: false,
            ..Capabilities::all()
        };

        let mut vocs = base_vocs();
        vocs.add_objective("y2", ObjectiveDirection::Minimize);

        let err = GeneratorState::new(vocs, &capabilities).unwrap_err();
        assert_eq!(err, VocsError::TooManyObjectives { declared: 2 });

        let state = GeneratorState::new(base_vocs(), &capabilities).unwrap();
        assert!(state.data().is_empty());
    }

    #[test]
    fn ingest_rejects_unknown_columns() {
        let mut state = GeneratorState::new(base_vocs(), &Capabilities::all()).unwrap();

        let batch = Batch::from_rows([row(&[("x1", 0.1), ("nope", 0.2)])]);
        let err = state.ingest(batch).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UnknownColumn { ref column } if column == "nope"
        ));
        assert!(state.data().is_empty());
    }

    #[test]
    fn ingest_accepts_declared_columns() {
        let mut state = GeneratorState::new(base_vocs(), &Capabilities::all()).unwrap();

        state
            .ingest(Batch::from_rows([row(&[
                ("x1", 0.1),
                ("x2", 0.2),
                ("y1", 3.0),
                ("c1", 0.9),
            ])]))
            .unwrap();
        assert_eq!(state.data().shape(), (1, 4));
    }

    #[test]
    fn replace_vocs_revalidates() {
        let capabilities = Capabilities {
            constraints: false,
            ..Capabilities::all()
        };

        let mut vocs = base_vocs();
        vocs.constraints.clear();
        let mut state = GeneratorState::new(vocs.clone(), &capabilities).unwrap();

        let err = state.replace_vocs(base_vocs(), &capabilities).unwrap_err();
        assert_eq!(err, VocsError::ConstraintsUnsupported { declared: 1 });

        // Rejected replacement keeps the old specification.
        assert_eq!(state.vocs(), &vocs);

        vocs.add_objective("y2", ObjectiveDirection::Maximize);
        state.replace_vocs(vocs.clone(), &capabilities).unwrap();
        assert_eq!(state.vocs().n_objectives(), 2);
    }
}
