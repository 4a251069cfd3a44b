//! Error types for tag parsing, configuration, and input validation.
//!
//! The optimizers themselves are total and never return these; they are
//! produced by the surfaces around them ([`FromStr`](std::str::FromStr)
//! impls, [`AssignmentConfig::validate`](crate::optimizer::AssignmentConfig::validate),
//! and [`validation`](crate::validation)).

use thiserror::Error;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown zone type: {0:?}")]
    UnknownZoneType(String),

    #[error("unknown conservation status: {0:?}")]
    UnknownConservationStatus(String),

    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("duplicate habitat id: {0}")]
    DuplicateHabitatId(String),

    #[error("duplicate species id: {0}")]
    DuplicateSpeciesId(String),

    #[error("habitat {id}: area must be a non-negative finite number, got {area}")]
    InvalidArea { id: String, area: f64 },

    #[error("species {id}: minimum area must be a non-negative finite number, got {min_area}")]
    InvalidMinArea { id: String, min_area: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::UnknownZoneType("swamp".into()).to_string(),
            "unknown zone type: \"swamp\""
        );
        assert_eq!(
            Error::DuplicateSpeciesId("sp-1".into()).to_string(),
            "duplicate species id: sp-1"
        );
        let e = Error::InvalidConfig {
            field: "max_species_per_habitat",
            reason: "must be at least 1".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: max_species_per_habitat must be at least 1"
        );
    }
}
