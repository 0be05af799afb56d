//! Conformance suite over the frozen registry: every registered name must
//! round-trip its defaults and construct against a compatible problem.

use ascent_data::{Batch, Value};
use ascent_generators::{build, builder, get_defaults, list_available, registry};
use ascent_vocs::{ConstraintOp, ObjectiveDirection, Vocs};
use serde_json::json;

fn base_vocs() -> Vocs {
    let mut vocs = Vocs::new();
    vocs.add_variable("x1", 0.0, 1.0).unwrap();
    vocs.add_variable("x2", 0.0, 1.0).unwrap();
    vocs.add_objective("y1", ObjectiveDirection::Minimize);
    vocs.add_constraint("c1", ConstraintOp::GreaterThan, 0.5)
        .unwrap();
    vocs
}

/// A problem shape and option mapping the named variant accepts, in the
/// spirit of each variant's intended use.
fn compatible_setup(name: &str) -> (Vocs, serde_json::Value) {
    let defaults = get_defaults(name).unwrap();
    match name {
        "weighted_sum" => {
            let mut vocs = base_vocs();
            vocs.constraints.clear();
            vocs.add_objective("y2", ObjectiveDirection::Minimize);

            let mut options = defaults;
            options["reference_point"] = json!({"y1": 10.0, "y2": 1.5});
            (vocs, options)
        }
        _ => {
            let mut vocs = base_vocs();
            vocs.constraints.clear();
            (vocs, defaults)
        }
    }
}

#[test]
fn defaults_round_trip_through_json() {
    for name in list_available() {
        let defaults = get_defaults(name).unwrap();
        let encoded = serde_json::to_string(&defaults).unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, defaults, "defaults for '{name}' must round-trip");
    }
}

#[test]
fn every_listed_name_constructs_with_its_defaults() {
    for name in list_available() {
        builder(name).unwrap_or_else(|_| panic!("builder for '{name}' must resolve"));

        let (vocs, options) = compatible_setup(name);
        let generator = build(name, vocs, options)
            .unwrap_or_else(|err| panic!("'{name}' must construct from defaults: {err}"));
        assert_eq!(generator.name(), name);
        assert!(generator.data().is_empty());
    }
}

#[test]
fn null_options_mean_defaults() {
    let mut vocs = base_vocs();
    vocs.constraints.clear();

    let generator = build("random", vocs, serde_json::Value::Null).unwrap();
    assert_eq!(generator.name(), "random");
}

#[test]
fn unknown_name_is_a_lookup_error() {
    let err = build("does_not_exist", base_vocs(), serde_json::Value::Null).unwrap_err();
    assert!(err.to_string().contains("does_not_exist"));
    assert!(get_defaults("does_not_exist").is_err());
    assert!(builder("does_not_exist").is_err());
}

#[test]
fn registry_is_frozen_with_builtins() {
    let names = list_available();
    assert_eq!(names.len(), registry().len());
    assert!(names.contains(&"random"));
    assert!(names.contains(&"latin_hypercube"));
    assert!(names.contains(&"hill_climb"));
    assert!(names.contains(&"weighted_sum"));
}

/// End-to-end: construct through the registry, propose, ingest evaluated
/// rows, and propose again from data.
#[test]
fn generate_evaluate_ingest_cycle() {
    let mut vocs = base_vocs();
    vocs.constraints.clear();

    let mut explorer = build("random", vocs.clone(), json!({"seed": 13})).unwrap();
    let candidates = explorer.generate(8).unwrap();
    assert_eq!(candidates.len(), 8);

    // Evaluate a simple quadratic and feed the results back.
    let rows: Vec<Vec<(String, Value)>> = candidates
        .iter()
        .map(|candidate| {
            let x1 = candidate["x1"];
            let x2 = candidate["x2"];
            let y1 = (x1 - 0.5).powi(2) + (x2 - 0.5).powi(2);
            vec![
                ("x1".to_string(), Value::from(x1)),
                ("x2".to_string(), Value::from(x2)),
                ("y1".to_string(), Value::from(y1)),
            ]
        })
        .collect();
    explorer.add_data(Batch::from_rows(rows.clone())).unwrap();
    assert_eq!(explorer.data().shape(), (8, 3));
    assert_eq!(explorer.data().identities(), 0..8);

    // A data-driven variant picks up from the same observations.
    let mut climber = build("hill_climb", vocs, json!({"seed": 13, "step": 0.05})).unwrap();
    climber.add_data(Batch::from_rows(rows)).unwrap();
    let proposal = &climber.generate(1).unwrap()[0];
    for (name, value) in proposal {
        assert!(climber.vocs().variables[name].contains(*value));
    }
}
