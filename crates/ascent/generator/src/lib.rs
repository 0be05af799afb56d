//! Ascent generator contract
//!
//! The contract every optimization algorithm variant must satisfy:
//!
//! - **Capabilities**: static flags describing which VOCS shapes a variant
//!   can handle, declared per variant rather than per instance.
//! - **Compatibility checking**: a single pure cross-check of a problem
//!   specification against a capability declaration, run at construction so
//!   validation logic is not scattered across variants.
//! - **The [`Generator`] trait**: candidate generation plus observation
//!   ingestion over one exclusively-owned VOCS and observation table.
//! - **[`GeneratorState`]**: the composition core concrete variants embed to
//!   get validated construction and the shared `add_data` path.

#![deny(unsafe_code)]

pub mod capabilities;
pub mod compatibility;
pub mod contract;
pub mod error;
pub mod state;

pub use capabilities::Capabilities;
pub use compatibility::check_compatibility;
pub use contract::{ensure_batch_capability, Candidate, Generator};
pub use error::GeneratorError;
pub use state::GeneratorState;
