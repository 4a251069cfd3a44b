//! Greedy single-pass assignment.
//!
//! # Algorithm
//!
//! 1. Score the full cross product, species-major and habitat-minor
//! 2. Stable-sort pairs by descending score
//! 3. Walk the pairs once, admitting each one that clears the threshold,
//!    fits the habitat's remaining capacity, and is not already admitted
//!
//! A skipped pair is never revisited. Only exact duplicate pairs are
//! blocked, so one species may be admitted at several habitats; the
//! exhaustive strategy places each species at most once.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use super::config::AssignmentConfig;
use super::types::AssignmentResult;
use crate::compat;
use crate::models::{Assignment, AssignmentMetadata, Habitat, Species, Strategy};

/// A scored (habitat, species) pair, by input index.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    habitat: usize,
    species: usize,
    score: f64,
}

/// Scores every pair in cross-product order and sorts descending.
fn ranked_pairs(habitats: &[Habitat], species: &[Species]) -> Vec<Candidate> {
    let mut pairs = Vec::with_capacity(habitats.len() * species.len());
    for (s, sp) in species.iter().enumerate() {
        for (h, habitat) in habitats.iter().enumerate() {
            pairs.push(Candidate {
                habitat: h,
                species: s,
                score: compat::score(habitat, sp),
            });
        }
    }
    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pairs
}

/// Greedy assignment runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the greedy pass.
    ///
    /// Assignments are emitted in admission order. Each gets priority level
    /// `5 - n`, where `n` is the number of species already admitted to its
    /// habitat. The total is the sum of admitted scores, and the explored
    /// count is the number of pairs generated.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitat_assign::models::{ConservationStatus, Habitat, Species, ZoneType};
    /// use habitat_assign::optimizer::{AssignmentConfig, GreedyRunner};
    ///
    /// let habitats = vec![Habitat::new("h1", ZoneType::Forest, 50.0)];
    /// let species = vec![Species::new("deer", ConservationStatus::LeastConcern)
    ///     .with_preferred_zones([ZoneType::Forest])];
    ///
    /// let result = GreedyRunner::run(&habitats, &species, &AssignmentConfig::default());
    /// assert_eq!(result.diagnostics.backtrack_count, 0);
    /// assert_eq!(result.assignments.len(), 1);
    /// ```
    pub fn run(
        habitats: &[Habitat],
        species: &[Species],
        config: &AssignmentConfig,
    ) -> AssignmentResult {
        let start = Instant::now();

        debug!(
            habitats = habitats.len(),
            species = species.len(),
            max_per_habitat = config.max_species_per_habitat,
            min_score = config.min_compatibility_score,
            "starting greedy assignment"
        );

        let pairs = ranked_pairs(habitats, species);
        let metadata = AssignmentMetadata {
            strategy: Strategy::Greedy,
            solutions_explored: pairs.len() as u64,
            backtrack_count: 0,
        };

        let mut counts = vec![0usize; habitats.len()];
        let mut admitted: HashSet<(&str, &str)> = HashSet::new();
        let mut assignments = Vec::new();
        let mut total = 0.0;

        for c in &pairs {
            if c.score < config.min_compatibility_score
                || counts[c.habitat] >= config.max_species_per_habitat
            {
                continue;
            }
            let habitat = &habitats[c.habitat];
            let sp = &species[c.species];
            if !admitted.insert((habitat.id.as_str(), sp.id.as_str())) {
                continue;
            }

            assignments.push(Assignment::proposed(
                &habitat.id,
                &sp.id,
                c.score,
                counts[c.habitat],
                metadata,
            ));
            counts[c.habitat] += 1;
            total += c.score;
        }

        let result = AssignmentResult::new(
            Strategy::Greedy,
            assignments,
            total,
            0,
            metadata.solutions_explored,
            start.elapsed(),
        );

        debug!(
            assignments = result.assignments.len(),
            total = result.total_compatibility,
            pairs = metadata.solutions_explored,
            elapsed_ms = result.diagnostics.elapsed_ms,
            "greedy assignment finished"
        );

        result
    }
}
