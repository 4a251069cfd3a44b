//! Optimizer configuration.

use crate::error::{Error, Result};

/// Configuration shared by both assignment strategies.
///
/// With the `serde` feature, every field is optional when deserializing and
/// falls back to its default.
///
/// # Examples
///
/// ```
/// use habitat_assign::optimizer::AssignmentConfig;
///
/// let config = AssignmentConfig::default()
///     .with_max_species_per_habitat(3)
///     .with_min_compatibility_score(0.5);
/// assert_eq!(config.max_species_per_habitat, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AssignmentConfig {
    /// Hard cap on species assigned to one habitat.
    pub max_species_per_habitat: usize,

    /// Pairings scoring below this are never admitted.
    pub min_compatibility_score: f64,

    /// Reserved for priority-level semantics on output.
    ///
    /// Carried on the configuration surface; neither strategy branches on
    /// it and priority levels are always emitted.
    pub respect_priority_levels: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            max_species_per_habitat: 5,
            min_compatibility_score: 0.3,
            respect_priority_levels: true,
        }
    }
}

impl AssignmentConfig {
    /// Sets the per-habitat capacity.
    pub fn with_max_species_per_habitat(mut self, n: usize) -> Self {
        self.max_species_per_habitat = n;
        self
    }

    /// Sets the admission threshold, clamped to `[0, 1]`.
    pub fn with_min_compatibility_score(mut self, score: f64) -> Self {
        self.min_compatibility_score = score.clamp(0.0, 1.0);
        self
    }

    /// Sets the reserved priority-level flag.
    pub fn with_respect_priority_levels(mut self, respect: bool) -> Self {
        self.respect_priority_levels = respect;
        self
    }

    /// Validates the configuration.
    ///
    /// The optimizers accept any configuration; this is for callers that
    /// want to reject settings that can never produce an assignment.
    pub fn validate(&self) -> Result<()> {
        if self.max_species_per_habitat == 0 {
            return Err(Error::InvalidConfig {
                field: "max_species_per_habitat",
                reason: "must be at least 1".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.min_compatibility_score) {
            return Err(Error::InvalidConfig {
                field: "min_compatibility_score",
                reason: format!("must be within [0, 1], got {}", self.min_compatibility_score),
            });
        }
        Ok(())
    }
}
