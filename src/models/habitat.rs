//! Monitored habitat zones.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Zone-type tag of a habitat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZoneType {
    Forest,
    Wetland,
    Grassland,
    Coastal,
    Mountain,
    Desert,
    Marine,
    Urban,
}

impl ZoneType {
    /// All zone types, in declaration order.
    pub const ALL: [ZoneType; 8] = [
        ZoneType::Forest,
        ZoneType::Wetland,
        ZoneType::Grassland,
        ZoneType::Coastal,
        ZoneType::Mountain,
        ZoneType::Desert,
        ZoneType::Marine,
        ZoneType::Urban,
    ];

    /// Lowercase tag as stored by the dashboard.
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneType::Forest => "forest",
            ZoneType::Wetland => "wetland",
            ZoneType::Grassland => "grassland",
            ZoneType::Coastal => "coastal",
            ZoneType::Mountain => "mountain",
            ZoneType::Desert => "desert",
            ZoneType::Marine => "marine",
            ZoneType::Urban => "urban",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        ZoneType::ALL
            .into_iter()
            .find(|z| z.as_str() == tag)
            .ok_or_else(|| Error::UnknownZoneType(s.to_string()))
    }
}

/// A monitored geographic zone.
///
/// Read-only input to the optimizer.
///
/// # Examples
///
/// ```
/// use habitat_assign::models::{Habitat, ZoneType};
///
/// let h = Habitat::new("h-1", ZoneType::Wetland, 12.5);
/// assert_eq!(h.zone_type, ZoneType::Wetland);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Habitat {
    /// Unique identifier.
    pub id: String,
    /// Zone-type tag.
    pub zone_type: ZoneType,
    /// Area in square kilometres.
    #[cfg_attr(feature = "serde", serde(alias = "area"))]
    pub area_km2: f64,
}

impl Habitat {
    /// Creates a habitat.
    pub fn new(id: impl Into<String>, zone_type: ZoneType, area_km2: f64) -> Self {
        Self {
            id: id.into(),
            zone_type,
            area_km2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_type_parse() {
        assert_eq!("forest".parse::<ZoneType>().unwrap(), ZoneType::Forest);
        assert_eq!(" Wetland ".parse::<ZoneType>().unwrap(), ZoneType::Wetland);
        assert_eq!("COASTAL".parse::<ZoneType>().unwrap(), ZoneType::Coastal);
    }

    #[test]
    fn test_zone_type_parse_unknown() {
        let err = "swamp".parse::<ZoneType>().unwrap_err();
        assert_eq!(err, Error::UnknownZoneType("swamp".into()));
    }

    #[test]
    fn test_zone_type_display_roundtrips() {
        for z in ZoneType::ALL {
            assert_eq!(z.to_string().parse::<ZoneType>().unwrap(), z);
        }
    }

    #[test]
    fn test_habitat_new() {
        let h = Habitat::new("h-1", ZoneType::Mountain, 42.0);
        assert_eq!(h.id, "h-1");
        assert_eq!(h.zone_type, ZoneType::Mountain);
        assert!((h.area_km2 - 42.0).abs() < 1e-10);
    }
}
