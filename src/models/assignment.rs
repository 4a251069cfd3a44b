//! Proposed habitat/species pairings produced by the optimizer.

use std::fmt;

/// Search strategy that produced an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Backtracking over every admissible placement.
    #[default]
    Exhaustive,
    /// Single descending-score pass.
    Greedy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exhaustive => f.write_str("exhaustive"),
            Strategy::Greedy => f.write_str("greedy"),
        }
    }
}

/// Lifecycle tag of an assignment.
///
/// The optimizer only ever creates `Proposed` assignments. Review and
/// archival belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AssignmentStatus {
    #[default]
    Proposed,
}

/// Provenance of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssignmentMetadata {
    /// Strategy that produced the assignment.
    pub strategy: Strategy,
    /// Search steps taken by the run.
    pub solutions_explored: u64,
    /// Undo steps taken by the run (always 0 for greedy).
    pub backtrack_count: u64,
}

/// A proposed (habitat, species) pairing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Assignment {
    /// Habitat receiving the species.
    pub habitat_id: String,
    /// Species being placed.
    pub species_id: String,
    /// Compatibility in `[0, 1]`.
    pub compatibility_score: f64,
    /// `5 - position` within the habitat. May be zero or negative past the
    /// fifth species.
    pub priority_level: i32,
    /// Lifecycle status; always proposed when emitted.
    pub status: AssignmentStatus,
    /// Strategy and search counters of the run that produced it.
    pub metadata: AssignmentMetadata,
}

impl Assignment {
    /// Creates a proposed assignment at the given position within its
    /// habitat (0 = first assigned).
    pub(crate) fn proposed(
        habitat_id: &str,
        species_id: &str,
        compatibility_score: f64,
        position: usize,
        metadata: AssignmentMetadata,
    ) -> Self {
        Self {
            habitat_id: habitat_id.to_string(),
            species_id: species_id.to_string(),
            compatibility_score,
            priority_level: priority_for_position(position),
            status: AssignmentStatus::Proposed,
            metadata,
        }
    }
}

/// Highest priority level, given to the first species placed in a habitat.
pub const TOP_PRIORITY_LEVEL: i32 = 5;

/// Priority level for the `position`-th species placed in a habitat.
///
/// Not clamped: the sixth species gets 0, the seventh -1, and so on.
pub fn priority_for_position(position: usize) -> i32 {
    let position = i32::try_from(position).unwrap_or(i32::MAX);
    TOP_PRIORITY_LEVEL.saturating_sub(position)
}
