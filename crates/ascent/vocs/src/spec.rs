//! The VOCS problem specification

use crate::error::VocsError;
use crate::types::{Bounds, Constraint, ConstraintOp, ObjectiveDirection};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Variables, Objectives, Constraints, Observables.
///
/// Declares the structural shape of an optimization problem. The four
/// collections are plain public maps so a specification can be edited in
/// place before it is bound to a generator; generators run [`Vocs::validate`]
/// plus their capability check at construction and on any structural change
/// they accept, so a malformed edit surfaces there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocs {
    /// Input variables and their bounded domains.
    pub variables: BTreeMap<String, Bounds>,

    /// Outputs to optimize, each with a direction.
    pub objectives: BTreeMap<String, ObjectiveDirection>,

    /// Inequality constraints on outputs.
    pub constraints: BTreeMap<String, Constraint>,

    /// Outputs recorded but not optimized.
    pub observables: Vec<String>,
}

impl Vocs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable with a bounded domain. Fails on malformed bounds.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Result<&mut Self, VocsError> {
        let name = name.into();
        let bounds = Bounds { lower, upper };
        if !bounds.is_well_formed() {
            return Err(VocsError::InvalidBounds { name, lower, upper });
        }
        self.variables.insert(name, bounds);
        Ok(self)
    }

    pub fn add_objective(
        &mut self,
        name: impl Into<String>,
        direction: ObjectiveDirection,
    ) -> &mut Self {
        self.objectives.insert(name.into(), direction);
        self
    }

    /// Add an inequality constraint. Fails on a non-finite threshold.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        op: ConstraintOp,
        threshold: f64,
    ) -> Result<&mut Self, VocsError> {
        let name = name.into();
        if !threshold.is_finite() {
            return Err(VocsError::NonFiniteThreshold { name });
        }
        self.constraints.insert(name, Constraint { op, threshold });
        Ok(self)
    }

    /// Add an observable output. Fails on a duplicate name.
    pub fn add_observable(&mut self, name: impl Into<String>) -> Result<&mut Self, VocsError> {
        let name = name.into();
        if self.observables.iter().any(|existing| existing == &name) {
            return Err(VocsError::DuplicateObservable { name });
        }
        self.observables.push(name);
        Ok(self)
    }

    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn n_objectives(&self) -> usize {
        self.objectives.len()
    }

    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn objective_names(&self) -> impl Iterator<Item = &str> {
        self.objectives.keys().map(String::as_str)
    }

    pub fn constraint_names(&self) -> impl Iterator<Item = &str> {
        self.constraints.keys().map(String::as_str)
    }

    pub fn observable_names(&self) -> impl Iterator<Item = &str> {
        self.observables.iter().map(String::as_str)
    }

    /// Names of every declared output: objectives, constraints, observables.
    pub fn output_names(&self) -> Vec<&str> {
        self.objective_names()
            .chain(self.constraint_names())
            .chain(self.observable_names())
            .collect()
    }

    /// Whether `name` refers to a declared variable or output.
    pub fn is_known_column(&self, name: &str) -> bool {
        self.variables.contains_key(name)
            || self.objectives.contains_key(name)
            || self.constraints.contains_key(name)
            || self.observables.iter().any(|observable| observable == name)
    }

    /// Structural self-check.
    ///
    /// Key uniqueness within each map is structural; this verifies the parts
    /// a direct field edit could have broken: at least one variable, finite
    /// ordered bounds, finite constraint thresholds, unique observables.
    pub fn validate(&self) -> Result<(), VocsError> {
        if self.variables.is_empty() {
            return Err(VocsError::NoVariables);
        }

        for (name, bounds) in &self.variables {
            if !bounds.is_well_formed() {
                return Err(VocsError::InvalidBounds {
                    name: name.clone(),
                    lower: bounds.lower,
                    upper: bounds.upper,
                });
            }
        }

        for (name, constraint) in &self.constraints {
            if !constraint.threshold.is_finite() {
                return Err(VocsError::NonFiniteThreshold { name: name.clone() });
            }
        }

        let mut seen = BTreeSet::new();
        for name in &self.observables {
            if !seen.insert(name) {
                return Err(VocsError::DuplicateObservable { name: name.clone() });
            }
        }

        Ok(())
    }
}
