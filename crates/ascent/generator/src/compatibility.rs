//! Cross-validation of a problem specification against capabilities

use crate::capabilities::Capabilities;
use ascent_vocs::{Vocs, VocsError};

/// Check that `vocs` has a shape `capabilities` allows.
///
/// Pure validation with no side effects. All rules must hold; the first
/// violation is returned with the mismatched dimension. A failure here is a
/// configuration mistake, not a transient condition - callers must not
/// retry, and generator construction must not proceed.
pub fn check_compatibility(vocs: &Vocs, capabilities: &Capabilities) -> Result<(), VocsError> {
    let objectives = vocs.n_objectives();

    if objectives > 1 && !capabilities.multi_objective {
        return Err(VocsError::TooManyObjectives {
            declared: objectives,
        });
    }
    if objectives == 1 && !capabilities.single_objective {
        return Err(VocsError::SingleObjectiveUnsupported);
    }
    if objectives == 0 && !capabilities.zero_objective {
        return Err(VocsError::ObjectiveRequired);
    }

    let constraints = vocs.n_constraints();
    if constraints > 0 && !capabilities.constraints {
        return Err(VocsError::ConstraintsUnsupported {
            declared: constraints,
        });
    }

    Ok(())
}
