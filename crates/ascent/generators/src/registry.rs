//! Name-keyed catalog of constructible generator variants
//!
//! Registered names are the stable public identifiers other tooling uses to
//! reference a variant; defaults are checked for lossless JSON round-trip at
//! registration time so a configuration can always be transported across
//! process and storage boundaries.

use crate::error::RegistryError;
use crate::hill_climb::HillClimbGenerator;
use crate::latin_hypercube::LatinHypercubeGenerator;
use crate::random::RandomGenerator;
use crate::weighted_sum::WeightedSumGenerator;
use ascent_generator::{Generator, GeneratorError};
use ascent_vocs::Vocs;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// Constructor resolved from a registered name: builds a generator from a
/// problem specification and a JSON option mapping.
pub type BuildFn = fn(Vocs, serde_json::Value) -> Result<Box<dyn Generator>, GeneratorError>;

/// One registry entry: a stable name, a one-line summary, the default
/// configuration, and the constructor.
#[derive(Clone)]
pub struct Registration {
    pub name: &'static str,
    pub summary: &'static str,
    pub defaults: serde_json::Value,
    pub build: BuildFn,
}

/// The generator catalog.
///
/// Populated once, then read-only: registration happens at process start and
/// the frozen instance behind [`registry`] exposes only lookups. Listing
/// order is registration order and is stable.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Registration>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variant.
    ///
    /// Rejects duplicate names and default configurations that do not
    /// survive a JSON encode/decode round trip - at registration time, not
    /// at use time, so a bad default can never reach external tooling.
    pub fn register(&mut self, registration: Registration) -> Result<(), RegistryError> {
        if self.index.contains_key(registration.name) {
            return Err(RegistryError::DuplicateName {
                name: registration.name,
            });
        }
        verify_round_trip(registration.name, &registration.defaults)?;

        debug!(name = registration.name, "registered generator");
        self.index.insert(registration.name, self.entries.len());
        self.entries.push(registration);
        Ok(())
    }

    fn entry(&self, name: &str) -> Result<&Registration, RegistryError> {
        self.index
            .get(name)
            .map(|position| &self.entries[*position])
            .ok_or_else(|| RegistryError::UnknownGenerator {
                name: name.to_string(),
            })
    }

    /// Every registered name, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Default configuration for `name`.
    pub fn defaults(&self, name: &str) -> Result<serde_json::Value, RegistryError> {
        Ok(self.entry(name)?.defaults.clone())
    }

    pub fn summary(&self, name: &str) -> Result<&'static str, RegistryError> {
        Ok(self.entry(name)?.summary)
    }

    /// The constructible variant behind `name`.
    pub fn builder(&self, name: &str) -> Result<BuildFn, RegistryError> {
        Ok(self.entry(name)?.build)
    }

    /// Resolve `name` and construct a generator in one step.
    ///
    /// A `null` option mapping means "use the defaults"; a partial mapping
    /// is completed from the variant's field defaults.
    pub fn build(
        &self,
        name: &str,
        vocs: Vocs,
        options: serde_json::Value,
    ) -> Result<Box<dyn Generator>, RegistryError> {
        let entry = self.entry(name)?;
        let options = if options.is_null() {
            entry.defaults.clone()
        } else {
            options
        };
        Ok((entry.build)(vocs, options)?)
    }
}

fn verify_round_trip(
    name: &'static str,
    defaults: &serde_json::Value,
) -> Result<(), RegistryError> {
    let encoded =
        serde_json::to_string(defaults).map_err(|err| RegistryError::UnserializableDefaults {
            name,
            reason: err.to_string(),
        })?;
    let decoded: serde_json::Value =
        serde_json::from_str(&encoded).map_err(|err| RegistryError::UnserializableDefaults {
            name,
            reason: err.to_string(),
        })?;
    if &decoded != defaults {
        return Err(RegistryError::UnserializableDefaults {
            name,
            reason: "decoded form differs from registered defaults".to_string(),
        });
    }
    Ok(())
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    for registration in [
        RandomGenerator::registration(),
        LatinHypercubeGenerator::registration(),
        HillClimbGenerator::registration(),
        WeightedSumGenerator::registration(),
    ] {
        registry
            .register(registration)
            .expect("builtin registration is statically valid");
    }
    registry
});

/// The process-wide frozen registry of builtin variants.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Every registered generator name, in stable order.
pub fn list_available() -> Vec<&'static str> {
    registry().names()
}

/// Default configuration for a registered name.
pub fn get_defaults(name: &str) -> Result<serde_json::Value, RegistryError> {
    registry().defaults(name)
}

/// The constructible variant behind a registered name.
pub fn builder(name: &str) -> Result<BuildFn, RegistryError> {
    registry().builder(name)
}

/// Construct a generator by registered name.
pub fn build(
    name: &str,
    vocs: Vocs,
    options: serde_json::Value,
) -> Result<Box<dyn Generator>, RegistryError> {
    registry().build(name, vocs, options)
}
