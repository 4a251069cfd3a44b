//! Habitat/species compatibility scoring.
//!
//! The score is an additive heuristic in `[0, 1]`:
//!
//! | Component | Contribution |
//! |-----------|--------------|
//! | Zone type in preferred zones | +0.50 |
//! | Area ≥ minimum | +0.30 |
//! | Area ≥ 70% of minimum | +0.15 |
//! | Status CR / EN / VU / NT | +0.20 / +0.15 / +0.10 / +0.05 |
//!
//! The sum is clamped to at most 1.0. Every component is non-negative, so
//! no lower clamp is needed.

use crate::models::{ConservationStatus, Habitat, Species};

/// Bonus when the habitat's zone type is preferred by the species.
pub const ZONE_MATCH_BONUS: f64 = 0.5;

/// Bonus when the habitat meets the species' minimum area.
pub const AREA_FULL_BONUS: f64 = 0.3;

/// Bonus when the habitat meets [`AREA_PARTIAL_RATIO`] of the minimum area.
pub const AREA_PARTIAL_BONUS: f64 = 0.15;

/// Fraction of the minimum area that still earns the partial bonus.
pub const AREA_PARTIAL_RATIO: f64 = 0.7;

/// Upper bound of any score.
pub const MAX_SCORE: f64 = 1.0;

/// Additive bonus for a conservation status.
///
/// Extinct statuses earn nothing: there is no population left to place.
pub fn status_bonus(status: ConservationStatus) -> f64 {
    match status {
        ConservationStatus::CriticallyEndangered => 0.20,
        ConservationStatus::Endangered => 0.15,
        ConservationStatus::Vulnerable => 0.10,
        ConservationStatus::NearThreatened => 0.05,
        ConservationStatus::LeastConcern
        | ConservationStatus::ExtinctInTheWild
        | ConservationStatus::Extinct => 0.0,
    }
}

/// Area adequacy of `area` against a species minimum `min_area`.
pub fn area_adequacy(area: f64, min_area: f64) -> f64 {
    if area >= min_area {
        AREA_FULL_BONUS
    } else if area >= AREA_PARTIAL_RATIO * min_area {
        AREA_PARTIAL_BONUS
    } else {
        0.0
    }
}

/// Compatibility of `species` with `habitat`, in `[0, 1]`.
///
/// Pure and deterministic; called for every pair, possibly many times
/// during a search.
///
/// # Examples
///
/// ```
/// use habitat_assign::compat::score;
/// use habitat_assign::models::{ConservationStatus, Habitat, Species, ZoneType};
///
/// let forest = Habitat::new("h1", ZoneType::Forest, 50.0);
/// let deer = Species::new("deer", ConservationStatus::LeastConcern)
///     .with_preferred_zones([ZoneType::Forest])
///     .with_min_area(20.0);
/// assert!((score(&forest, &deer) - 0.8).abs() < 1e-10);
/// ```
pub fn score(habitat: &Habitat, species: &Species) -> f64 {
    let req = &species.requirements;

    let mut total = 0.0;
    if req.prefers(habitat.zone_type) {
        total += ZONE_MATCH_BONUS;
    }
    total += area_adequacy(habitat.area_km2, req.min_area());
    total += status_bonus(species.conservation_status);

    total.min(MAX_SCORE)
}
