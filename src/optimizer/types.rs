//! Result types returned by both strategies.

use std::time::Duration;

use crate::models::{Assignment, Strategy};

/// Search telemetry. Diagnostic only; never used to bound a search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchDiagnostics {
    /// Undo steps taken (exhaustive only).
    pub backtrack_count: u64,
    /// Search nodes visited (exhaustive) or pairs generated (greedy).
    pub solutions_explored: u64,
    /// Wall-clock time of the run in milliseconds.
    pub elapsed_ms: f64,
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssignmentResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,
    /// Proposed assignments in emission order.
    pub assignments: Vec<Assignment>,
    /// Sum of admitted scores.
    ///
    /// The exhaustive strategy reports -1.0 when there were no species to
    /// decide.
    pub total_compatibility: f64,
    /// Search steps taken.
    pub iterations: u64,
    /// Whether at least one assignment was emitted.
    pub success: bool,
    /// Counters and timing for the run.
    pub diagnostics: SearchDiagnostics,
}

impl AssignmentResult {
    pub(crate) fn new(
        strategy: Strategy,
        assignments: Vec<Assignment>,
        total_compatibility: f64,
        backtrack_count: u64,
        solutions_explored: u64,
        elapsed: Duration,
    ) -> Self {
        let success = !assignments.is_empty();
        Self {
            strategy,
            assignments,
            total_compatibility,
            iterations: solutions_explored,
            success,
            diagnostics: SearchDiagnostics {
                backtrack_count,
                solutions_explored,
                elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            },
        }
    }

    /// Assignments proposed for one habitat, highest priority first.
    pub fn for_habitat<'a>(&'a self, habitat_id: &'a str) -> impl Iterator<Item = &'a Assignment> {
        self.assignments
            .iter()
            .filter(move |a| a.habitat_id == habitat_id)
    }

    /// Assignments proposed for one species.
    pub fn for_species<'a>(&'a self, species_id: &'a str) -> impl Iterator<Item = &'a Assignment> {
        self.assignments
            .iter()
            .filter(move |a| a.species_id == species_id)
    }

    /// Mean compatibility of the emitted assignments, or 0.0 when empty.
    pub fn mean_compatibility(&self) -> f64 {
        if self.assignments.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .assignments
            .iter()
            .map(|a| a.compatibility_score)
            .sum();
        sum / self.assignments.len() as f64
    }
}
