//! Uniform random sampling

use crate::registry::Registration;
use crate::sampling;
use ascent_data::{Batch, ObservationTable};
use ascent_generator::{
    ensure_batch_capability, Candidate, Capabilities, Generator, GeneratorError, GeneratorState,
};
use ascent_vocs::Vocs;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for [`RandomGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

/// Samples every variable independently and uniformly inside its bounds.
///
/// The baseline variant: no shape restrictions at all, and `generate` never
/// consults the observation table.
#[derive(Debug)]
pub struct RandomGenerator {
    state: GeneratorState,
    config: RandomConfig,
    rng: StdRng,
}

impl RandomGenerator {
    pub const NAME: &'static str = "random";

    pub const CAPABILITIES: Capabilities = Capabilities::all();

    pub fn new(vocs: Vocs, config: RandomConfig) -> Result<Self, GeneratorError> {
        let state = GeneratorState::new(vocs, &Self::CAPABILITIES)?;
        let rng = sampling::rng(config.seed);
        Ok(Self { state, config, rng })
    }

    pub fn config(&self) -> &RandomConfig {
        &self.config
    }

    pub(crate) fn registration() -> Registration {
        Registration {
            name: Self::NAME,
            summary: "uniform random sampling inside the variable bounds",
            defaults: serde_json::to_value(RandomConfig::default())
                .expect("default configuration serializes"),
            build: |vocs, options| {
                let config: RandomConfig = serde_json::from_value(options)
                    .map_err(|err| GeneratorError::Config {
                        message: err.to_string(),
                    })?;
                Ok(Box::new(Self::new(vocs, config)?))
            },
        }
    }
}

impl Generator for RandomGenerator {
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

        let Self { state, rng, .. } = self;
        let vocs = state.vocs();

        let candidates = (0..n_candidates)
            .map(|_| {
                vocs.variables
                    .iter()
                    .map(|(name, bounds)| {
                        (name.clone(), rng.gen_range(bounds.lower..=bounds.upper))
                    })
                    .collect()
            })
            .collect();
        Ok(candidates)
    }

    fn add_data(&mut self, batch: Batch) -> Result<(), GeneratorError> {
        self.state.ingest(batch)
    }
}
