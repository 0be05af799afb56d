//! Ascent VOCS - problem specification for black-box optimization
//!
//! A VOCS (Variables, Objectives, Constraints, Observables) declares the
//! shape of an optimization problem: bounded input variables, objectives
//! with an optimization direction, inequality constraints, and observables
//! that are recorded but not optimized.
//!
//! The specification is pure data plus validation. Generators own a `Vocs`
//! and re-validate it against their declared capabilities at construction
//! and on any structural change they accept.

#![deny(unsafe_code)]

pub mod error;
pub mod spec;
pub mod types;

pub use error::VocsError;
pub use spec::Vocs;
pub use types::{Bounds, Constraint, ConstraintOp, ObjectiveDirection};
