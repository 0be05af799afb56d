//! Static capability declarations

use serde::{Deserialize, Serialize};

/// What VOCS shapes a generator variant can handle.
///
/// Declared statically per variant (typically as an associated const), not
/// per instance. Flags are truthful in both directions: construction rejects
/// any problem specification the flags disallow, and a flag is only set when
/// the variant genuinely supports that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Can produce more than one candidate per `generate` call.
    pub batch_generation: bool,

    /// Handles problems with exactly one objective.
    pub single_objective: bool,

    /// Handles problems with two or more objectives.
    pub multi_objective: bool,

    /// Handles problems that declare constraints.
    pub constraints: bool,

    /// Handles observables-only problems with no objective at all
    /// (exploration mode).
    pub zero_objective: bool,
}

impl Capabilities {
    /// Every flag set; useful for variants with no shape restrictions.
    pub const fn all() -> Self {
        Self {
            batch_generation: true,
            single_objective: true,
            multi_objective: true,
            constraints: true,
            zero_objective: true,
        }
    }
}
