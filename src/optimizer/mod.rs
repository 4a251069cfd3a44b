//! Habitat/species assignment optimizer.
//!
//! Two strategies share one configuration and one result type:
//!
//! - **Exhaustive** ([`ExhaustiveRunner`]): backtracking over every
//!   admissible placement, keeping the best total score. Each species is
//!   placed at most once. Exponential in the number of species.
//! - **Greedy** ([`GreedyRunner`]): one pass over all pairs in descending
//!   score order. Linearithmic, but may place a species in several
//!   habitats and never revisits a skipped pair.
//!
//! Both are total over their inputs: degenerate inputs produce an empty,
//! unsuccessful result rather than an error.
//!
//! # Examples
//!
//! ```
//! use habitat_assign::models::{ConservationStatus, Habitat, Species, ZoneType};
//! use habitat_assign::optimizer::{AssignmentConfig, AssignmentOptimizer, Strategy};
//!
//! let habitats = vec![
//!     Habitat::new("marsh", ZoneType::Wetland, 12.0),
//!     Habitat::new("oakwood", ZoneType::Forest, 40.0),
//! ];
//! let species = vec![
//!     Species::new("bittern", ConservationStatus::Vulnerable)
//!         .with_preferred_zones([ZoneType::Wetland])
//!         .with_min_area(10.0),
//!     Species::new("dormouse", ConservationStatus::NearThreatened)
//!         .with_preferred_zones([ZoneType::Forest]),
//! ];
//!
//! let optimizer = AssignmentOptimizer::new(AssignmentConfig::default());
//! let result = optimizer.run(Strategy::Exhaustive, &habitats, &species);
//! assert_eq!(result.assignments.len(), 2);
//! ```

mod config;
mod exhaustive;
mod greedy;
mod types;

pub use crate::models::Strategy;
pub use config::AssignmentConfig;
pub use exhaustive::ExhaustiveRunner;
pub use greedy::GreedyRunner;
pub use types::{AssignmentResult, SearchDiagnostics};

use crate::models::{Habitat, Species};

/// Runs the exhaustive backtracking strategy.
pub fn run_exhaustive(
    habitats: &[Habitat],
    species: &[Species],
    config: &AssignmentConfig,
) -> AssignmentResult {
    ExhaustiveRunner::run(habitats, species, config)
}

/// Runs the greedy single-pass strategy.
pub fn run_greedy(
    habitats: &[Habitat],
    species: &[Species],
    config: &AssignmentConfig,
) -> AssignmentResult {
    GreedyRunner::run(habitats, species, config)
}

/// Optimizer bound to one configuration.
///
/// Holds no state between runs; repeated calls are independent.
#[derive(Debug, Clone, Default)]
pub struct AssignmentOptimizer {
    config: AssignmentConfig,
}

impl AssignmentOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// The configuration used for every run.
    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Runs the selected strategy.
    pub fn run(
        &self,
        strategy: Strategy,
        habitats: &[Habitat],
        species: &[Species],
    ) -> AssignmentResult {
        match strategy {
            Strategy::Exhaustive => self.run_exhaustive(habitats, species),
            Strategy::Greedy => self.run_greedy(habitats, species),
        }
    }

    /// Runs the exhaustive backtracking strategy.
    pub fn run_exhaustive(&self, habitats: &[Habitat], species: &[Species]) -> AssignmentResult {
        ExhaustiveRunner::run(habitats, species, &self.config)
    }

    /// Runs the greedy single-pass strategy.
    pub fn run_greedy(&self, habitats: &[Habitat], species: &[Species]) -> AssignmentResult {
        GreedyRunner::run(habitats, species, &self.config)
    }
}
