//! Multi-objective scalarization around a reference point

use crate::registry::Registration;
use crate::sampling;
use ascent_data::{Batch, ObservationTable, Value};
use ascent_generator::{
    ensure_batch_capability, Candidate, Capabilities, Generator, GeneratorError, GeneratorState,
};
use ascent_vocs::{ObjectiveDirection, Vocs, VocsError};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for [`WeightedSumGenerator`].
///
/// `reference_point` is required and must name every objective exactly; it
/// scales each objective's contribution to the scalarized score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedSumConfig {
    pub reference_point: Option<BTreeMap<String, f64>>,

    /// Perturbation radius as a fraction of each variable's span.
    pub step: f64,

    /// RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for WeightedSumConfig {
    fn default() -> Self {
        Self {
            reference_point: None,
            step: 0.1,
            seed: None,
        }
    }
}

/// Scalarizes the observed objectives into a reference-point-normalized
/// weighted sum and proposes perturbations of the best scalarized point.
///
/// Each objective contributes `value / max(|reference|, eps)`, negated for
/// maximization, so the reference point sets the scale on which objectives
/// trade off against each other.
#[derive(Debug)]
pub struct WeightedSumGenerator {
    state: GeneratorState,
    config: WeightedSumConfig,
    weights: BTreeMap<String, f64>,
    rng: StdRng,
}

impl WeightedSumGenerator {
    pub const NAME: &'static str = "weighted_sum";

    pub const CAPABILITIES: Capabilities = Capabilities {
        batch_generation: true,
        single_objective: true,
        multi_objective: true,
        constraints: false,
        zero_objective: false,
    };

    pub fn new(vocs: Vocs, config: WeightedSumConfig) -> Result<Self, GeneratorError> {
        if !config.step.is_finite() || config.step <= 0.0 {
            return Err(GeneratorError::Config {
                message: format!("step must be a positive finite number, got {}", config.step),
            });
        }

        let state = GeneratorState::new(vocs, &Self::CAPABILITIES)?;

        // Algorithm-specific shape requirement: the reference point must
        // name every objective, checked with the same fail-fast discipline
        // as the capability flags.
        let expected: Vec<String> = state.vocs().objectives.keys().cloned().collect();
        let found: Vec<String> = config
            .reference_point
            .as_ref()
            .map(|reference| reference.keys().cloned().collect())
            .unwrap_or_default();
        if found != expected {
            return Err(VocsError::ReferencePointMismatch { expected, found }.into());
        }

        let reference = config
            .reference_point
            .as_ref()
            .expect("reference point present after shape check");
        for (name, value) in reference {
            if !value.is_finite() {
                return Err(GeneratorError::Config {
                    message: format!("reference point value for '{name}' is not finite"),
                });
            }
        }
        let weights = reference
            .iter()
            .map(|(name, value)| (name.clone(), 1.0 / value.abs().max(f64::EPSILON)))
            .collect();

        let rng = sampling::rng(config.seed);
        Ok(Self {
            state,
            config,
            weights,
            rng,
        })
    }

    pub fn config(&self) -> &WeightedSumConfig {
        &self.config
    }

    pub(crate) fn registration() -> Registration {
        Registration {
            name: Self::NAME,
            summary: "reference-point-normalized weighted-sum scalarization",
            defaults: serde_json::to_value(WeightedSumConfig::default())
                .expect("default configuration serializes"),
            build: |vocs, options| {
                let config: WeightedSumConfig = serde_json::from_value(options)
                    .map_err(|err| GeneratorError::Config {
                        message: err.to_string(),
                    })?;
                Ok(Box::new(Self::new(vocs, config)?))
            },
        }
    }

    /// Best complete observed point under the scalarized score.
    fn best_point(&self) -> Option<Vec<f64>> {
        let vocs = self.state.vocs();
        let table = self.state.data();

        let mut best: Option<(f64, Vec<f64>)> = None;
        for identity in table.identities() {
            let mut score = 0.0;
            let mut scored = true;
            for (objective, direction) in &vocs.objectives {
                let Some(value) = table.get(identity, objective).and_then(Value::as_f64) else {
                    scored = false;
                    break;
                };
                let oriented = match direction {
                    ObjectiveDirection::Minimize => value,
                    ObjectiveDirection::Maximize => -value,
                };
                score += oriented * self.weights[objective];
            }
            if !scored {
                continue;
            }

            let mut point = Vec::with_capacity(vocs.n_variables());
            let mut complete = true;
            for name in vocs.variables.keys() {
                match table.get(identity, name).and_then(Value::as_f64) {
                    Some(value) => point.push(value),
                    None => {
                        complete = false;
                        break;
                    }
                }
            }
            if !complete {
                continue;
            }

            if best.as_ref().map_or(true, |(current, _)| score < *current) {
                best = Some((score, point));
            }
        }
        best.map(|(_, point)| point)
    }
}

impl Generator for WeightedSumGenerator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn capabilities(&self) -> Capabilities {
        Self::CAPABILITIES
    }

    fn vocs(&self) -> &Vocs {
        self.state.vocs()
    }

    fn data(&self) -> &ObservationTable {
        self.state.data()
    }

    fn generate(&mut self, n_candidates: usize) -> Result<Vec<Candidate>, GeneratorError> {
        ensure_batch_capability(&Self::CAPABILITIES, n_candidates)?;

        let point = self.best_point().ok_or(GeneratorError::InsufficientData {
            needed: 1,
            available: 0,
        })?;

        let Self {
            state, config, rng, ..
        } = self;
        let vocs = state.vocs();

        Ok((0..n_candidates)
            .map(|_| sampling::perturb(rng, vocs, &point, config.step))
            .collect())
    }

    fn add_data(&mut self, batch: Batch) -> Result<(), GeneratorError> {
        self.state.ingest(batch)
    }
}
