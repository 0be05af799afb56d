//! Single-objective local search around the best observed point

use crate::registry::Registration;
use crate::sampling;
use ascent_data::{Batch, ObservationTable, Value};
use ascent_generator::{
    ensure_batch_capability, Candidate, Capabilities, Generator, GeneratorError, GeneratorState,
};
use ascent_vocs::{ObjectiveDirection, Vocs};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for [`HillClimbGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbConfig {
    /// Perturbation radius as a fraction of each variable's span.
    pub step: f64,

    /// RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            seed: None,
        }
    }
}

/// Proposes a uniform perturbation of the best observed point.
///
/// Sequential single-objective local search: one candidate per call, no
/// constraints, and at least one complete observation required before the
/// first proposal.
#[derive(Debug)]
pub struct HillClimbGenerator {
    state: GeneratorState,
    config: HillClimbConfig,
    rng: StdRng,
}

impl HillClimbGenerator {
    pub const NAME: &'static str = "hill_climb";

    pub const CAPABILITIES: Capabilities = Capabilities {
        batch_generation: false,
        single_objective: true,
        multi_objective: false,
        constraints: false,
        zero_objective: false,
    };

    pub fn new(vocs: Vocs, config: HillClimbConfig) -> Result<Self, GeneratorError> {
        if !config.step.is_finite() || config.step <= 0.0 {
            return Err(GeneratorError::Config {
                message: format!("step must be a positive finite number, got {}", config.step),
            });
        }
        let state = GeneratorState::new(vocs, &Self::CAPABILITIES)?;
        let rng = sampling::rng(config.seed);
        Ok(Self { state, config, rng })
    }

    pub fn config(&self) -> &HillClimbConfig {
        &self.config
    }

    pub(crate) fn registration() -> Registration {
        Registration {
            name: Self::NAME,
            summary: "single-objective local search around the best observed point",
            defaults: serde_json::to_value(HillClimbConfig::default())
                .expect("default configuration serializes"),
            build: |vocs, options| {
                let config: HillClimbConfig = serde_json::from_value(options)
                    .map_err(|err| GeneratorError::Config {
                        message: err.to_string(),
                    })?;
                Ok(Box::new(Self::new(vocs, config)?))
            },
        }
    }

    /// Best complete observed point, oriented by the objective direction.
    fn best_point(vocs: &Vocs, table: &ObservationTable) -> Option<Vec<f64>> {
        let (objective, direction) = vocs.objectives.iter().next()?;

        let mut best: Option<(f64, Vec<f64>)> = None;
        for identity in table.identities() {
            let Some(score) = table.get(identity, objective).and_then(Value::as_f64) else {
                continue;
            };

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

            let oriented = match direction {
                ObjectiveDirection::Minimize => score,
                ObjectiveDirection::Maximize => -score,
            };
            if best.as_ref().map_or(true, |(current, _)| oriented < *current) {
                best = Some((oriented, point));
            }
        }
        best.map(|(_, point)| point)
    }
}

impl Generator for HillClimbGenerator {
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

        let Self { state, config, rng } = self;
        let vocs = state.vocs();

        let point = Self::best_point(vocs, state.data()).ok_or(
            GeneratorError::InsufficientData {
                needed: 1,
                available: 0,
            },
        )?;

        Ok(vec![sampling::perturb(rng, vocs, &point, config.step)])
    }

    fn add_data(&mut self, batch: Batch) -> Result<(), GeneratorError> {
        self.state.ingest(batch)
    }
}
