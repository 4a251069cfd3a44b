//! JSON shapes exchanged with the dashboard.
#![cfg(feature = "serde")]

use habitat_assign::models::{ConservationStatus, Habitat, Species, ZoneType};
use habitat_assign::{run_greedy, AssignmentConfig};
use serde_json::json;

#[test]
fn config_fields_default_when_absent() {
    let config: AssignmentConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config, AssignmentConfig::default());

    let config: AssignmentConfig =
        serde_json::from_value(json!({ "maxSpeciesPerHabitat": 2 })).unwrap();
    assert_eq!(config.max_species_per_habitat, 2);
    assert!((config.min_compatibility_score - 0.3).abs() < 1e-10);
    assert!(config.respect_priority_levels);
}

#[test]
fn species_without_requirements() {
    let s: Species = serde_json::from_value(json!({
        "id": "newt",
        "conservationStatus": "EN"
    }))
    .unwrap();
    assert_eq!(s.conservation_status, ConservationStatus::Endangered);
    assert!(s.requirements.preferred_zones.is_empty());
    assert_eq!(s.requirements.min_area(), 0.0);

    let s: Species = serde_json::from_value(json!({
        "id": "newt",
        "conservationStatus": "NT",
        "requirements": { "preferredZones": ["wetland"], "minArea": 2.5 }
    }))
    .unwrap();
    assert!(s.requirements.prefers(ZoneType::Wetland));
    assert_eq!(s.requirements.min_area_km2, Some(2.5));
}

#[test]
fn habitat_accepts_area_alias() {
    let h: Habitat = serde_json::from_value(json!({
        "id": "h1",
        "zoneType": "coastal",
        "area": 4.0
    }))
    .unwrap();
    assert_eq!(h.zone_type, ZoneType::Coastal);
    assert!((h.area_km2 - 4.0).abs() < 1e-10);
}

#[test]
fn unknown_status_is_rejected() {
    let parsed = serde_json::from_value::<Species>(json!({
        "id": "x",
        "conservationStatus": "ZZ"
    }));
    assert!(parsed.is_err());
}

#[test]
fn result_serializes_camel_case() {
    let habitats = vec![Habitat::new("h1", ZoneType::Forest, 50.0)];
    let species = vec![Species::new("deer", ConservationStatus::LeastConcern)
        .with_preferred_zones([ZoneType::Forest])];

    let result = run_greedy(&habitats, &species, &AssignmentConfig::default());
    let v = serde_json::to_value(&result).unwrap();

    assert_eq!(v["strategy"], "greedy");
    assert_eq!(v["success"], true);
    let a = &v["assignments"][0];
    assert_eq!(a["habitatId"], "h1");
    assert_eq!(a["speciesId"], "deer");
    assert_eq!(a["priorityLevel"], 5);
    assert_eq!(a["status"], "proposed");
    assert_eq!(a["metadata"]["strategy"], "greedy");
    assert_eq!(a["metadata"]["backtrackCount"], 0);
    assert_eq!(v["diagnostics"]["solutionsExplored"], 1);
}
