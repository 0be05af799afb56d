//! Latin hypercube sampling

use crate::registry::Registration;
use crate::sampling;
use ascent_data::{Batch, ObservationTable};
use ascent_generator::{
    ensure_batch_capability, Candidate, Capabilities, Generator, GeneratorError, GeneratorState,
};
use ascent_vocs::Vocs;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for [`LatinHypercubeGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatinHypercubeConfig {
    /// RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

/// Stratified space-filling sampling.
///
/// Each `generate(n)` call forms a fresh Latin hypercube: every variable's
/// domain is split into `n` equal strata, one sample is drawn per stratum,
/// and the strata are shuffled independently per variable. Successive calls
/// are independent hypercubes, not one combined design.
#[derive(Debug)]
pub struct LatinHypercubeGenerator {
    state: GeneratorState,
    config: LatinHypercubeConfig,
    rng: StdRng,
}

impl LatinHypercubeGenerator {
    pub const NAME: &'static str = "latin_hypercube";

    pub const CAPABILITIES: Capabilities = Capabilities::all();

    pub fn new(vocs: Vocs, config: LatinHypercubeConfig) -> Result<Self, GeneratorError> {
        let state = GeneratorState::new(vocs, &Self::CAPABILITIES)?;
        let rng = sampling::rng(config.seed);
        Ok(Self { state, config, rng })
    }

    pub fn config(&self) -> &LatinHypercubeConfig {
        &self.config
    }

    pub(crate) fn registration() -> Registration {
        Registration {
            name: Self::NAME,
            summary: "Latin hypercube stratified sampling over the variable domains",
            defaults: serde_json::to_value(LatinHypercubeConfig::default())
                .expect("default configuration serializes"),
            build: |vocs, options| {
                let config: LatinHypercubeConfig = serde_json::from_value(options)
                    .map_err(|err| GeneratorError::Config {
                        message: err.to_string(),
                    })?;
                Ok(Box::new(Self::new(vocs, config)?))
            },
        }
    }
}

impl Generator for LatinHypercubeGenerator {
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

        // One shuffled stratum sequence per variable.
        let mut columns: Vec<(String, Vec<f64>)> = Vec::with_capacity(vocs.n_variables());
        for (name, bounds) in &vocs.variables {
            let mut strata: Vec<usize> = (0..n_candidates).collect();
            strata.shuffle(rng);

            let samples = strata
                .into_iter()
                .map(|stratum| {
                    let offset: f64 = rng.gen();
                    bounds.lower
                        + (stratum as f64 + offset) / n_candidates as f64 * bounds.span()
                })
                .collect();
            columns.push((name.clone(), samples));
        }

        let candidates = (0..n_candidates)
            .map(|row| {
                columns
                    .iter()
                    .map(|(name, samples)| (name.clone(), samples[row]))
                    .collect()
            })
            .collect();
        Ok(candidates)
    }

    fn add_data(&mut self, batch: Batch) -> Result<(), GeneratorError> {
        self.state.ingest(batch)
    }
}
