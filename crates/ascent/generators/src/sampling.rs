//! Shared sampling support for the builtin variants

use ascent_generator::Candidate;
use ascent_vocs::Vocs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG when a seed is configured, entropy-seeded otherwise.
///
/// Every builtin routes its randomness through this so a configured seed
/// makes the variant fully deterministic.
pub(crate) fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform perturbation of `point` by up to `step` of each variable's span,
/// clamped back into bounds.
///
/// `point` is aligned with the VOCS variable order.
pub(crate) fn perturb(rng: &mut StdRng, vocs: &Vocs, point: &[f64], step: f64) -> Candidate {
    vocs.variables
        .iter()
        .zip(point)
        .map(|((name, bounds), base)| {
            let radius = step * bounds.span();
            let value = bounds.clamp(base + rng.gen_range(-radius..=radius));
            (name.clone(), value)
        })
        .collect()
}
