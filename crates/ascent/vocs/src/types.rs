//! Leaf types of the problem specification

use serde::{Deserialize, Serialize};

/// Optimization direction for an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectiveDirection {
    Minimize,
    Maximize,
}

/// Comparison operator for an inequality constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintOp {
    GreaterThan,
    LessThan,
}

/// Inequality constraint on an output.
///
/// Serializes as the two-element array form `["GREATER_THAN", 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(ConstraintOp, f64)", into = "(ConstraintOp, f64)")]
pub struct Constraint {
    pub op: ConstraintOp,
    pub threshold: f64,
}

impl Constraint {
    pub fn greater_than(threshold: f64) -> Self {
        Self {
            op: ConstraintOp::GreaterThan,
            threshold,
        }
    }

    pub fn less_than(threshold: f64) -> Self {
        Self {
            op: ConstraintOp::LessThan,
            threshold,
        }
    }

    /// Whether an observed output value satisfies this constraint.
    pub fn is_satisfied(&self, value: f64) -> bool {
        match self.op {
            ConstraintOp::GreaterThan => value > self.threshold,
            ConstraintOp::LessThan => value < self.threshold,
        }
    }
}

impl TryFrom<(ConstraintOp, f64)> for Constraint {
    type Error = String;

    fn try_from((op, threshold): (ConstraintOp, f64)) -> Result<Self, Self::Error> {
        if !threshold.is_finite() {
            return Err(format!("constraint threshold {threshold} is not finite"));
        }
        Ok(Self { op, threshold })
    }
}

impl From<Constraint> for (ConstraintOp, f64) {
    fn from(constraint: Constraint) -> Self {
        (constraint.op, constraint.threshold)
    }
}

/// Closed interval domain of a variable.
///
/// Serializes as the two-element array form `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// Whether the interval is finite and strictly ordered.
    pub fn is_well_formed(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    pub fn midpoint(&self) -> f64 {
        self.lower + self.span() / 2.0
    }
}

impl TryFrom<[f64; 2]> for Bounds {
    type Error = String;

    fn try_from([lower, upper]: [f64; 2]) -> Result<Self, Self::Error> {
        let bounds = Self { lower, upper };
        if !bounds.is_well_formed() {
            return Err(format!("bounds [{lower}, {upper}] must be finite and ordered"));
        }
        Ok(bounds)
    }
}

impl From<Bounds> for [f64; 2] {
    fn from(bounds: Bounds) -> Self {
        [bounds.lower, bounds.upper]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_uses_wire_names() {
        let json = serde_json::to_string(&ObjectiveDirection::Minimize).unwrap();
        assert_eq!(json, "\"MINIMIZE\"");

        let parsed: ObjectiveDirection = serde_json::from_str("\"MAXIMIZE\"").unwrap();
        assert_eq!(parsed, ObjectiveDirection::Maximize);
    }

    #[test]
    fn constraint_round_trips_as_array() {
        let constraint = Constraint::greater_than(0.5);
        let json = serde_json::to_string(&constraint).unwrap();
        assert_eq!(json, "[\"GREATER_THAN\",0.5]");

        let parsed: Constraint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, constraint);
    }

    #[test]
    fn constraint_rejects_non_finite_threshold() {
        let result: Result<Constraint, _> = serde_json::from_str("[\"LESS_THAN\",null]");
        assert!(result.is_err());
    }

    #[test]
    fn constraint_satisfaction() {
        let constraint = Constraint::greater_than(0.5);
        assert!(constraint.is_satisfied(0.6));
        assert!(!constraint.is_satisfied(0.5));

        let constraint = Constraint::less_than(0.0);
        assert!(constraint.is_satisfied(-1.0));
        assert!(!constraint.is_satisfied(0.1));
    }

    #[test]
    fn bounds_round_trip_and_reject_inverted() {
        let bounds: Bounds = serde_json::from_str("[0.0,1.0]").unwrap();
        assert_eq!(bounds.lower, 0.0);
        assert_eq!(bounds.upper, 1.0);

        let inverted: Result<Bounds, _> = serde_json::from_str("[1.0,0.0]");
        assert!(inverted.is_err());
    }

    #[test]
    fn bounds_geometry() {
        let bounds = Bounds::try_from([-1.0, 3.0]).unwrap();
        assert_eq!(bounds.span(), 4.0);
        assert_eq!(bounds.midpoint(), 1.0);
        assert!(bounds.contains(3.0));
        assert!(!bounds.contains(3.1));
        assert_eq!(bounds.clamp(10.0), 3.0);
    }
}
