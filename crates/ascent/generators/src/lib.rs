//! Ascent builtin generators and the generator registry
//!
//! Concrete generator variants, each with a serializable configuration and a
//! static capability declaration, plus the process-wide registry that maps
//! stable public names to default configurations and constructors.
//!
//! The registry is populated once with the builtins and frozen; after
//! initialization only read operations are exposed. Registered names are
//! public identifiers referenced by external tooling - renaming one is a
//! breaking change.

#![deny(unsafe_code)]

pub mod error;
pub mod hill_climb;
pub mod latin_hypercube;
pub mod random;
pub mod registry;
mod sampling;
pub mod weighted_sum;

pub use error::RegistryError;
pub use hill_climb::{HillClimbConfig, HillClimbGenerator};
pub use latin_hypercube::{LatinHypercubeConfig, LatinHypercubeGenerator};
pub use random::{RandomConfig, RandomGenerator};
pub use registry::{
    build, builder, get_defaults, list_available, registry, BuildFn, Registration, Registry,
};
pub use weighted_sum::{WeightedSumConfig, WeightedSumGenerator};
