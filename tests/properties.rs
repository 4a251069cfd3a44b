//! Property tests over small random instances.

use std::collections::{HashMap, HashSet};

use habitat_assign::compat::score;
use habitat_assign::models::{ConservationStatus, Habitat, Species, ZoneType};
use habitat_assign::{run_exhaustive, run_greedy, AssignmentConfig, AssignmentResult};
use proptest::prelude::*;

fn zone() -> impl Strategy<Value = ZoneType> {
    (0..ZoneType::ALL.len()).prop_map(|i| ZoneType::ALL[i])
}

fn status() -> impl Strategy<Value = ConservationStatus> {
    (0..ConservationStatus::ALL.len()).prop_map(|i| ConservationStatus::ALL[i])
}

fn habitats(max: usize) -> impl Strategy<Value = Vec<Habitat>> {
    prop::collection::vec((zone(), 0.0f64..100.0), 0..=max).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (z, area))| Habitat::new(format!("h{i}"), z, area))
            .collect()
    })
}

fn species(max: usize) -> impl Strategy<Value = Vec<Species>> {
    let one = (
        status(),
        prop::collection::vec(zone(), 0..3),
        prop::option::of(0.0f64..150.0),
    );
    prop::collection::vec(one, 0..=max).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (st, zones, min_area))| {
                let mut s = Species::new(format!("s{i}"), st).with_preferred_zones(zones);
                s.requirements.min_area_km2 = min_area;
                s
            })
            .collect()
    })
}

fn config() -> impl Strategy<Value = AssignmentConfig> {
    (1usize..=3, 0.0f64..0.9).prop_map(|(cap, min)| {
        AssignmentConfig::default()
            .with_max_species_per_habitat(cap)
            .with_min_compatibility_score(min)
    })
}

fn assert_capacity_and_threshold(result: &AssignmentResult, config: &AssignmentConfig) {
    let mut per_habitat: HashMap<&str, usize> = HashMap::new();
    let mut pairs = HashSet::new();
    for a in &result.assignments {
        *per_habitat.entry(a.habitat_id.as_str()).or_default() += 1;
        assert!(
            pairs.insert((a.habitat_id.as_str(), a.species_id.as_str())),
            "pair ({}, {}) emitted twice",
            a.habitat_id,
            a.species_id
        );
        assert!(a.compatibility_score >= config.min_compatibility_score);
        assert!((0.0..=1.0).contains(&a.compatibility_score));
    }
    for (h, n) in per_habitat {
        assert!(n <= config.max_species_per_habitat, "{h} holds {n}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_is_bounded_and_pure(hs in habitats(4), ss in species(4)) {
        for h in &hs {
            for s in &ss {
                let v = score(h, s);
                prop_assert!((0.0..=1.0).contains(&v));
                prop_assert_eq!(v, score(h, s));
            }
        }
    }

    #[test]
    fn exhaustive_respects_invariants(hs in habitats(3), ss in species(5), cfg in config()) {
        let result = run_exhaustive(&hs, &ss, &cfg);
        assert_capacity_and_threshold(&result, &cfg);

        let mut seen = HashSet::new();
        for a in &result.assignments {
            prop_assert!(seen.insert(a.species_id.clone()), "{} placed twice", a.species_id);
        }
        prop_assert_eq!(result.success, !result.assignments.is_empty());
    }

    #[test]
    fn greedy_respects_invariants(hs in habitats(4), ss in species(6), cfg in config()) {
        let result = run_greedy(&hs, &ss, &cfg);
        assert_capacity_and_threshold(&result, &cfg);
        prop_assert_eq!(result.diagnostics.solutions_explored, (hs.len() * ss.len()) as u64);

        let sum: f64 = result.assignments.iter().map(|a| a.compatibility_score).sum();
        prop_assert!((sum - result.total_compatibility).abs() < 1e-9);
    }

    #[test]
    fn exhaustive_dominates_greedy_without_repeats(
        hs in habitats(3),
        ss in species(5),
        cfg in config(),
    ) {
        let greedy = run_greedy(&hs, &ss, &cfg);
        let distinct: HashSet<&str> =
            greedy.assignments.iter().map(|a| a.species_id.as_str()).collect();
        prop_assume!(distinct.len() == greedy.assignments.len());
        prop_assume!(!ss.is_empty());

        let exhaustive = run_exhaustive(&hs, &ss, &cfg);
        prop_assert!(
            exhaustive.total_compatibility >= greedy.total_compatibility - 1e-9,
            "exhaustive {} < greedy {}",
            exhaustive.total_compatibility,
            greedy.total_compatibility
        );
    }

    #[test]
    fn runs_are_idempotent(hs in habitats(3), ss in species(4), cfg in config()) {
        let a = run_exhaustive(&hs, &ss, &cfg);
        let b = run_exhaustive(&hs, &ss, &cfg);
        prop_assert_eq!(&a.assignments, &b.assignments);
        prop_assert_eq!(a.total_compatibility, b.total_compatibility);

        let a = run_greedy(&hs, &ss, &cfg);
        let b = run_greedy(&hs, &ss, &cfg);
        prop_assert_eq!(&a.assignments, &b.assignments);
        prop_assert_eq!(a.total_compatibility, b.total_compatibility);
    }
}
