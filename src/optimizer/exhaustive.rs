//! Exhaustive backtracking search.
//!
//! # Algorithm
//!
//! 1. Rank habitats for every species by descending compatibility
//!    (stable on ties, so input order breaks them)
//! 2. Decide species one at a time, in input order. For each species:
//!    a. Try every admissible habitat in ranked order: place, descend, undo
//!    b. Then descend with the species left unplaced
//! 3. At a leaf, keep the partial assignment if its total strictly beats
//!    the best so far (the first of equal totals wins)
//!
//! The search visits up to `(habitats + 1)^species` leaves. There is no
//! cutoff: exponential cost is the price of exhaustiveness, and the mode is
//! meant for small instances.

use std::time::Instant;

use tracing::{debug, trace, warn};

use super::config::AssignmentConfig;
use super::types::AssignmentResult;
use crate::compat;
use crate::models::{Assignment, AssignmentMetadata, Habitat, Species, Strategy};

/// Totals closer than this are treated as equal, so float noise in the
/// summation order cannot displace the first-found optimum.
const TIE_EPSILON: f64 = 1e-9;

/// Leaf bound above which a run logs a warning before starting.
const LARGE_SEARCH_LEAVES: u128 = 10_000_000;

/// Partial assignment: species placed per habitat, in placement order.
///
/// Indices refer to the input slices. The search owns exactly one of these
/// and mutates it only through [`place`](Self::place) and
/// [`undo`](Self::undo); the best leaf is kept as an independent clone.
#[derive(Debug, Clone)]
struct PartialAssignment {
    slots: Vec<Vec<usize>>,
}

impl PartialAssignment {
    fn new(habitat_count: usize) -> Self {
        Self {
            slots: vec![Vec::new(); habitat_count],
        }
    }

    fn count(&self, habitat: usize) -> usize {
        self.slots[habitat].len()
    }

    /// Whether a species with this id is already placed at `habitat`.
    fn holds(&self, habitat: usize, species_id: &str, species: &[Species]) -> bool {
        self.slots[habitat]
            .iter()
            .any(|&s| species[s].id == species_id)
    }

    fn place(&mut self, habitat: usize, species: usize) {
        self.slots[habitat].push(species);
    }

    fn undo(&mut self, habitat: usize) {
        self.slots[habitat].pop();
    }
}

/// Counters accumulated over the whole search.
#[derive(Debug, Default, Clone, Copy)]
struct SearchStats {
    solutions_explored: u64,
    backtrack_count: u64,
}

#[derive(Debug)]
struct Best {
    total: f64,
    partial: PartialAssignment,
}

/// One open decision point: the species at `depth` and how far through its
/// ranked habitats the search has got.
#[derive(Debug)]
struct Frame {
    depth: usize,
    total: f64,
    cursor: usize,
    /// Habitat holding this frame's species while its child is explored.
    placed: Option<usize>,
    unplaced_tried: bool,
}

struct Search<'a> {
    species: &'a [Species],
    config: &'a AssignmentConfig,
    /// Per species: `(habitat index, score)` sorted by descending score.
    ranked: Vec<Vec<(usize, f64)>>,
}

impl<'a> Search<'a> {
    /// Scores and ranks every habitat for every species once, up front.
    /// Habitats are not kept; the search only needs their indices.
    fn new(habitats: &'a [Habitat], species: &'a [Species], config: &'a AssignmentConfig) -> Self {
        let ranked = species
            .iter()
            .map(|sp| {
                let mut scored: Vec<(usize, f64)> = habitats
                    .iter()
                    .enumerate()
                    .map(|(h, habitat)| (h, compat::score(habitat, sp)))
                    .collect();
                scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
                scored
            })
            .collect();

        Self {
            species,
            config,
            ranked,
        }
    }

    fn admissible(
        &self,
        partial: &PartialAssignment,
        depth: usize,
        habitat: usize,
        score: f64,
    ) -> bool {
        score >= self.config.min_compatibility_score
            && partial.count(habitat) < self.config.max_species_per_habitat
            && !partial.holds(habitat, &self.species[depth].id, self.species)
    }

    /// Counts a visit to `depth`. Leaves are scored against the best so far
    /// and yield no frame.
    fn enter(
        &self,
        depth: usize,
        total: f64,
        partial: &PartialAssignment,
        stats: &mut SearchStats,
        best: &mut Option<Best>,
    ) -> Option<Frame> {
        stats.solutions_explored += 1;

        if depth < self.species.len() {
            return Some(Frame {
                depth,
                total,
                cursor: 0,
                placed: None,
                unplaced_tried: false,
            });
        }

        let improves = match best {
            Some(b) => total > b.total + TIE_EPSILON,
            None => true,
        };
        if improves {
            trace!(total, explored = stats.solutions_explored, "new best assignment");
            *best = Some(Best {
                total,
                partial: partial.clone(),
            });
        }
        None
    }

    /// Depth-first search over every admissible placement.
    ///
    /// Each species tries its ranked habitats in order (place, descend,
    /// undo) and then a sibling branch with the species left unplaced, even
    /// when a habitat was available. Frames live on the heap, so depth is
    /// bounded by the species count and not by the thread stack.
    fn run(&self, partial: &mut PartialAssignment, stats: &mut SearchStats) -> Option<Best> {
        let mut best = None;
        let mut stack: Vec<Frame> = Vec::with_capacity(self.species.len());
        stack.extend(self.enter(0, 0.0, partial, stats, &mut best));

        while let Some(frame) = stack.last_mut() {
            if let Some(habitat) = frame.placed.take() {
                partial.undo(habitat);
                stats.backtrack_count += 1;
            }

            let depth = frame.depth;
            let ranked = &self.ranked[depth];
            let mut next = None;
            while let Some(&(habitat, score)) = ranked.get(frame.cursor) {
                frame.cursor += 1;
                if self.admissible(partial, depth, habitat, score) {
                    next = Some((habitat, score));
                    break;
                }
            }

            let child_total = match next {
                Some((habitat, score)) => {
                    partial.place(habitat, depth);
                    frame.placed = Some(habitat);
                    frame.total + score
                }
                None if !frame.unplaced_tried => {
                    frame.unplaced_tried = true;
                    frame.total
                }
                None => {
                    stack.pop();
                    continue;
                }
            };

            if let Some(child) = self.enter(depth + 1, child_total, partial, stats, &mut best) {
                stack.push(child);
            }
        }

        best
    }
}

/// Upper bound on leaves visited: `(habitats + 1)^species`, saturating.
fn leaf_bound(habitats: usize, species: usize) -> u128 {
    let base = habitats as u128 + 1;
    let exp = u32::try_from(species).unwrap_or(u32::MAX);
    base.checked_pow(exp).unwrap_or(u128::MAX)
}

/// Exhaustive assignment runner.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Runs the backtracking search and emits the best assignment found.
    ///
    /// Emission walks habitats in input order and, within a habitat, the
    /// species in placement order; the `i`-th gets priority level `5 - i`.
    /// Scores are recomputed at emission.
    ///
    /// With no species there is nothing to decide: the result is empty with
    /// a total of -1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitat_assign::models::{ConservationStatus, Habitat, Species, ZoneType};
    /// use habitat_assign::optimizer::{AssignmentConfig, ExhaustiveRunner};
    ///
    /// let habitats = vec![Habitat::new("h1", ZoneType::Forest, 50.0)];
    /// let species = vec![Species::new("deer", ConservationStatus::LeastConcern)
    ///     .with_preferred_zones([ZoneType::Forest])
    ///     .with_min_area(20.0)];
    ///
    /// let result = ExhaustiveRunner::run(&habitats, &species, &AssignmentConfig::default());
    /// assert!(result.success);
    /// assert_eq!(result.assignments[0].priority_level, 5);
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
            "starting exhaustive assignment search"
        );

        if species.is_empty() {
            debug!("no species to assign");
            return AssignmentResult::new(
                Strategy::Exhaustive,
                Vec::new(),
                -1.0,
                0,
                0,
                start.elapsed(),
            );
        }

        let bound = leaf_bound(habitats.len(), species.len());
        if bound > LARGE_SEARCH_LEAVES {
            warn!(
                habitats = habitats.len(),
                species = species.len(),
                leaf_bound = %bound,
                "exhaustive search space is very large; consider the greedy strategy"
            );
        }

        let search = Search::new(habitats, species, config);
        let mut partial = PartialAssignment::new(habitats.len());
        let mut stats = SearchStats::default();
        let best = search.run(&mut partial, &mut stats);

        let metadata = AssignmentMetadata {
            strategy: Strategy::Exhaustive,
            solutions_explored: stats.solutions_explored,
            backtrack_count: stats.backtrack_count,
        };

        // The unplaced-only path always reaches a leaf, so `best` is set.
        let (total, assignments) = match best {
            Some(best) => {
                let assignments: Vec<Assignment> = best
                    .partial
                    .slots
                    .iter()
                    .enumerate()
                    .flat_map(move |(h, placed)| {
                        let habitat = &habitats[h];
                        placed.iter().enumerate().map(move |(position, &s)| {
                            let sp = &species[s];
                            Assignment::proposed(
                                &habitat.id,
                                &sp.id,
                                compat::score(habitat, sp),
                                position,
                                metadata,
                            )
                        })
                    })
                    .collect();
                (best.total, assignments)
            }
            None => (-1.0, Vec::new()),
        };

        let result = AssignmentResult::new(
            Strategy::Exhaustive,
            assignments,
            total,
            stats.backtrack_count,
            stats.solutions_explored,
            start.elapsed(),
        );

        debug!(
            assignments = result.assignments.len(),
            total = result.total_compatibility,
            explored = stats.solutions_explored,
            backtracks = stats.backtrack_count,
            elapsed_ms = result.diagnostics.elapsed_ms,
            "exhaustive assignment search finished"
        );

        result
    }
}
