//! Distance units used by the measure functions

use std::fmt;
use std::str::FromStr;

use crate::geometry::errors::GeometryError;

/// Unit for distances, lengths and (squared) areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    /// Kilometers ("km")
    #[default]
    Kilometers,
    /// Statute miles ("mi")
    Miles,
    /// Nautical miles ("nmi")
    NauticalMiles,
    /// Meters ("m")
    Meters,
    /// International feet ("ft")
    Feet,
}

impl DistanceUnit {
    /// Mean Earth radius expressed in this unit
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 6371.0,
            DistanceUnit::Miles => 3958.8,
            DistanceUnit::NauticalMiles => 3440.1,
            DistanceUnit::Meters => 6_371_000.0,
            DistanceUnit::Feet => 6_371_000.0 / 0.3048,
        }
    }

    /// Convert a length in meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => meters / 1000.0,
            DistanceUnit::Miles => meters / 1609.344,
            DistanceUnit::NauticalMiles => meters / 1852.0,
            DistanceUnit::Meters => meters,
            DistanceUnit::Feet => meters / 0.3048,
        }
    }

    /// Short symbol of the unit
    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
            DistanceUnit::Meters => "m",
            DistanceUnit::Feet => "ft",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" => Ok(DistanceUnit::Kilometers),
            "mi" => Ok(DistanceUnit::Miles),
            "nmi" => Ok(DistanceUnit::NauticalMiles),
            "m" => Ok(DistanceUnit::Meters),
            "ft" => Ok(DistanceUnit::Feet),
            _ => Err(GeometryError::UnsupportedUnit(s.to_string())),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
