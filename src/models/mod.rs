//! Domain types shared by the scorer and the optimizers.
//!
//! - **Inputs**: [`Habitat`], [`Species`] (read-only, supplied per call)
//! - **Outputs**: [`Assignment`] with its [`AssignmentMetadata`]

mod assignment;
mod habitat;
mod species;

pub use assignment::{
    priority_for_position, Assignment, AssignmentMetadata, AssignmentStatus, Strategy,
    TOP_PRIORITY_LEVEL,
};
pub use habitat::{Habitat, ZoneType};
pub use species::{ConservationStatus, HabitatRequirements, Species};
