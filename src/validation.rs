//! Input integrity checks.
//!
//! The optimizers accept any input, but some inputs defeat their
//! invariants: duplicate ids make two records indistinguishable in the
//! output, and a negative or NaN area silently zeroes the area bonus.
//! These checks let a caller reject such data before running.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{Habitat, Species};

/// Returns every problem found in the inputs, in input order
/// (habitats first).
///
/// # Examples
///
/// ```
/// use habitat_assign::models::{ConservationStatus, Habitat, Species, ZoneType};
/// use habitat_assign::validation::validate_inputs;
///
/// let habitats = vec![
///     Habitat::new("h1", ZoneType::Forest, 10.0),
///     Habitat::new("h1", ZoneType::Wetland, 5.0),
/// ];
/// let species = vec![Species::new("s1", ConservationStatus::LeastConcern)];
/// assert_eq!(validate_inputs(&habitats, &species).len(), 1);
/// ```
pub fn validate_inputs(habitats: &[Habitat], species: &[Species]) -> Vec<Error> {
    let mut errors = Vec::new();

    let mut habitat_ids = HashSet::new();
    for h in habitats {
        if !habitat_ids.insert(h.id.as_str()) {
            errors.push(Error::DuplicateHabitatId(h.id.clone()));
        }
        if !is_valid_area(h.area_km2) {
            errors.push(Error::InvalidArea {
                id: h.id.clone(),
                area: h.area_km2,
            });
        }
    }

    let mut species_ids = HashSet::new();
    for s in species {
        if !species_ids.insert(s.id.as_str()) {
            errors.push(Error::DuplicateSpeciesId(s.id.clone()));
        }
        if let Some(min_area) = s.requirements.min_area_km2 {
            if !is_valid_area(min_area) {
                errors.push(Error::InvalidMinArea {
                    id: s.id.clone(),
                    min_area,
                });
            }
        }
    }

    errors
}

/// Returns the first problem found, if any.
pub fn check_inputs(habitats: &[Habitat], species: &[Species]) -> Result<()> {
    match validate_inputs(habitats, species).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn is_valid_area(area: f64) -> bool {
    area.is_finite() && area >= 0.0
}
