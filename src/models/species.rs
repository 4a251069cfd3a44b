//! Catalogued species and their habitat requirements.

use std::fmt;
use std::str::FromStr;

use super::habitat::ZoneType;
use crate::error::Error;

/// IUCN-style conservation status.
///
/// Variants are ordered least to most at risk, so `Ord` compares risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConservationStatus {
    #[cfg_attr(feature = "serde", serde(rename = "LC"))]
    LeastConcern,
    #[cfg_attr(feature = "serde", serde(rename = "NT"))]
    NearThreatened,
    #[cfg_attr(feature = "serde", serde(rename = "VU"))]
    Vulnerable,
    #[cfg_attr(feature = "serde", serde(rename = "EN"))]
    Endangered,
    #[cfg_attr(feature = "serde", serde(rename = "CR"))]
    CriticallyEndangered,
    #[cfg_attr(feature = "serde", serde(rename = "EW"))]
    ExtinctInTheWild,
    #[cfg_attr(feature = "serde", serde(rename = "EX"))]
    Extinct,
}

impl ConservationStatus {
    /// All statuses, least to most at risk.
    pub const ALL: [ConservationStatus; 7] = [
        ConservationStatus::LeastConcern,
        ConservationStatus::NearThreatened,
        ConservationStatus::Vulnerable,
        ConservationStatus::Endangered,
        ConservationStatus::CriticallyEndangered,
        ConservationStatus::ExtinctInTheWild,
        ConservationStatus::Extinct,
    ];

    /// Two-letter status code.
    pub fn code(self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "LC",
            ConservationStatus::NearThreatened => "NT",
            ConservationStatus::Vulnerable => "VU",
            ConservationStatus::Endangered => "EN",
            ConservationStatus::CriticallyEndangered => "CR",
            ConservationStatus::ExtinctInTheWild => "EW",
            ConservationStatus::Extinct => "EX",
        }
    }
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ConservationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        ConservationStatus::ALL
            .into_iter()
            .find(|st| st.code() == code)
            .ok_or_else(|| Error::UnknownConservationStatus(s.to_string()))
    }
}

/// Habitat preferences of a species.
///
/// Both fields are optional in stored records: no preferred zones means no
/// zone preference, and a missing minimum area means zero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct HabitatRequirements {
    /// Zone types the species prefers.
    pub preferred_zones: Vec<ZoneType>,
    /// Minimum habitat area in square kilometres.
    #[cfg_attr(feature = "serde", serde(alias = "minArea"))]
    pub min_area_km2: Option<f64>,
}

impl HabitatRequirements {
    /// Whether `zone` is among the preferred zones.
    pub fn prefers(&self, zone: ZoneType) -> bool {
        self.preferred_zones.contains(&zone)
    }

    /// Minimum area, with a missing value read as zero.
    pub fn min_area(&self) -> f64 {
        self.min_area_km2.unwrap_or(0.0)
    }
}

/// A catalogued species.
///
/// # Examples
///
/// ```
/// use habitat_assign::models::{ConservationStatus, Species, ZoneType};
///
/// let otter = Species::new("otter", ConservationStatus::NearThreatened)
///     .with_preferred_zones([ZoneType::Wetland, ZoneType::Coastal])
///     .with_min_area(5.0);
/// assert!(otter.requirements.prefers(ZoneType::Coastal));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Species {
    /// Unique identifier.
    pub id: String,
    /// Conservation status.
    pub conservation_status: ConservationStatus,
    /// Habitat preferences.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: HabitatRequirements,
}

impl Species {
    /// Creates a species with no habitat preferences.
    pub fn new(id: impl Into<String>, conservation_status: ConservationStatus) -> Self {
        Self {
            id: id.into(),
            conservation_status,
            requirements: HabitatRequirements::default(),
        }
    }

    /// Sets the preferred zone types.
    pub fn with_preferred_zones(mut self, zones: impl IntoIterator<Item = ZoneType>) -> Self {
        self.requirements.preferred_zones = zones.into_iter().collect();
        self
    }

    /// Sets the minimum habitat area in square kilometres.
    pub fn with_min_area(mut self, km2: f64) -> Self {
        self.requirements.min_area_km2 = Some(km2);
        self
    }
}
