//! Coordinate Reference System registry
//!
//! The registry is parsed once from the embedded `crs_definitions.toml`
//! and is read-only afterwards.

use std::collections::HashMap;
use lazy_static::lazy_static;
use log::{debug, warn};

use super::bbox::BoundingBox;
use crate::geometry::errors::{GeometryError, GeometryResult};

/// EPSG code of WGS 84 geographic coordinates
pub const WGS84_EPSG: u32 = 4326;
/// EPSG code of WGS 84 / Pseudo-Mercator
pub const PSEUDO_MERCATOR_EPSG: u32 = 3857;
/// First EPSG code of the northern UTM zones (zone n is base + n)
pub const UTM_NORTH_BASE: u32 = 32600;
/// First EPSG code of the southern UTM zones (zone n is base + n)
pub const UTM_SOUTH_BASE: u32 = 32700;

lazy_static! {
    // Parse the definitions at first use
    static ref CRS_REGISTRY: CrsRegistry = {
        let content = include_str!("../../crs_definitions.toml");
        CrsRegistry::from_str(content).unwrap_or_else(|e| {
                warn!("Failed to parse CRS definitions: {}", e);
                CrsRegistry::default()
            })
    };

    static ref DEFAULT_GEOGRAPHIC: Crs = Crs {
        name: "WGS 84".to_string(),
        area_of_use: "World".to_string(),
        zone: None,
        epsg: WGS84_EPSG,
        projected: false,
        bound_box: BoundingBox::new(-180.0, -90.0, 180.0, 90.0),
    };
}

/// A coordinate reference system
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    /// Human readable name
    pub name: String,
    /// Description of the region the system is valid for
    pub area_of_use: String,
    /// UTM zone label such as "31N", if this is a UTM system
    pub zone: Option<String>,
    /// EPSG code
    pub epsg: u32,
    /// Whether coordinates are projected (meters) rather than degrees
    pub projected: bool,
    /// Valid extent of the system
    pub bound_box: BoundingBox,
}

impl Crs {
    /// Whether this system is one of the UTM zones
    pub fn is_utm(&self) -> bool {
        self.zone.is_some()
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        format!("{} (EPSG:{})", self.name, self.epsg)
    }

    /// Resolve a coordinate system from a string (e.g. "EPSG:4326" or "4326")
    pub fn parse(crs_str: &str) -> GeometryResult<&'static Crs> {
        crs_by_epsg(parse_epsg_code(crs_str)?)
    }
}

/// Table of coordinate systems keyed by EPSG code
#[derive(Debug, Default)]
pub struct CrsRegistry {
    systems: HashMap<u32, Crs>,
}

impl CrsRegistry {
    /// Parse CRS definitions from a TOML string
    pub fn from_str(content: &str) -> GeometryResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeometryError::ParseError(format!("Failed to parse TOML: {}", e))),
        };

        let mut registry = CrsRegistry::default();

        // Explicit systems
        if let Some(table) = toml_value.get("systems").and_then(|v| v.as_table()) {
            for (key, value) in table {
                let epsg = key.parse::<u32>()
                    .map_err(|_| GeometryError::ParseError(format!("Invalid EPSG key: {}", key)))?;
                registry.insert(Self::parse_system(epsg, value)?);
            }
        }

        // UTM zones from the template
        if let Some(template) = toml_value.get("utm") {
            registry.expand_utm(template)?;
        }

        debug!("Loaded {} coordinate reference systems", registry.len());
        Ok(registry)
    }

    fn parse_system(epsg: u32, value: &toml::Value) -> GeometryResult<Crs> {
        let bounds = float_list(value, "bound_box")?;
        if bounds.len() != 4 {
            return Err(GeometryError::ParseError(format!("EPSG:{} bound_box needs 4 values", epsg)));
        }

        Ok(Crs {
            name: string_field(value, "name")?.to_string(),
            area_of_use: string_field(value, "area_of_use")?.to_string(),
            zone: value.get("zone").and_then(|v| v.as_str()).map(str::to_string),
            epsg,
            projected: value.get("projected").and_then(|v| v.as_bool()).unwrap_or(false),
            bound_box: BoundingBox::new(bounds[0], bounds[1], bounds[2], bounds[3]),
        })
    }

    fn expand_utm(&mut self, template: &toml::Value) -> GeometryResult<()> {
        let zones = template.get("zones").and_then(|v| v.as_integer())
            .ok_or_else(|| GeometryError::ParseError("utm.zones missing".to_string()))? as u32;
        let width = float_field(template, "zone_width")?;
        let name = string_field(template, "name")?;

        let hemispheres = [
            ('N', "north_base", "north_latitudes", "north_area_of_use"),
            ('S', "south_base", "south_latitudes", "south_area_of_use"),
        ];

        for (suffix, base_key, lat_key, area_key) in hemispheres {
            let base = template.get(base_key).and_then(|v| v.as_integer())
                .ok_or_else(|| GeometryError::ParseError(format!("utm.{} missing", base_key)))? as u32;
            let latitudes = float_list(template, lat_key)?;
            if latitudes.len() != 2 {
                return Err(GeometryError::ParseError(format!("utm.{} needs 2 values", lat_key)));
            }
            let area = string_field(template, area_key)?;

            for zone in 1..=zones {
                let west = -180.0 + width * (zone - 1) as f64;
                let east = west + width;
                let label = format!("{}{}", zone, suffix);

                self.insert(Crs {
                    name: name.replace("{zone}", &label),
                    area_of_use: area
                        .replace("{west}", &format_longitude(west))
                        .replace("{east}", &format_longitude(east)),
                    zone: Some(label),
                    epsg: base + zone,
                    projected: true,
                    bound_box: BoundingBox::new(west, latitudes[0], east, latitudes[1]),
                });
            }
        }

        Ok(())
    }

    fn insert(&mut self, crs: Crs) {
        self.systems.insert(crs.epsg, crs);
    }

    /// Look up a coordinate system by EPSG code
    pub fn get(&self, epsg: u32) -> Option<&Crs> {
        self.systems.get(&epsg)
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether the registry holds no systems
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// All registered EPSG codes in ascending order
    pub fn codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self.systems.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

fn string_field<'v>(value: &'v toml::Value, key: &str) -> GeometryResult<&'v str> {
    value.get(key).and_then(|v| v.as_str())
        .ok_or_else(|| GeometryError::ParseError(format!("Missing string field: {}", key)))
}

fn as_number(value: &toml::Value) -> Option<f64> {
    value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
}

fn float_field(value: &toml::Value, key: &str) -> GeometryResult<f64> {
    value.get(key).and_then(as_number)
        .ok_or_else(|| GeometryError::ParseError(format!("Missing numeric field: {}", key)))
}

fn float_list(value: &toml::Value, key: &str) -> GeometryResult<Vec<f64>> {
    let array = value.get(key).and_then(|v| v.as_array())
        .ok_or_else(|| GeometryError::ParseError(format!("Missing array field: {}", key)))?;

    array.iter()
        .map(|v| as_number(v)
            .ok_or_else(|| GeometryError::ParseError(format!("Non-numeric value in {}", key))))
        .collect()
}

fn format_longitude(degrees: f64) -> String {
    if degrees < 0.0 {
        format!("{}°W", -degrees)
    } else {
        format!("{}°E", degrees)
    }
}

/// Parse an EPSG code such as `"4326"` or `"EPSG:4326"` (case-insensitive)
///
/// Only the syntax is checked; the code may still be missing from the registry.
pub fn parse_epsg_code(text: &str) -> GeometryResult<u32> {
    let upper = text.trim().to_uppercase();
    let code = upper.strip_prefix("EPSG:").unwrap_or(&upper);

    code.trim().parse::<u32>()
        .map_err(|_| GeometryError::ParseError(format!("Unsupported CRS format: {}", text.trim())))
}

/// Look up a coordinate system in the process-wide registry
pub fn lookup(epsg: u32) -> Option<&'static Crs> {
    CRS_REGISTRY.get(epsg)
}

/// Look up a coordinate system, failing with `CrsNotFound` for unknown codes
pub fn crs_by_epsg(epsg: u32) -> GeometryResult<&'static Crs> {
    lookup(epsg).ok_or(GeometryError::CrsNotFound(epsg))
}

/// The process-wide registry
pub fn registry() -> &'static CrsRegistry {
    &CRS_REGISTRY
}

/// WGS 84, the default for values that carry no coordinate system
pub fn wgs84() -> &'static Crs {
    lookup(WGS84_EPSG).unwrap_or(&DEFAULT_GEOGRAPHIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let registry = registry();
        assert_eq!(registry.len(), 122);

        let codes = registry.codes();
        assert_eq!(codes[0], PSEUDO_MERCATOR_EPSG);
        assert_eq!(codes[1], WGS84_EPSG);
        assert_eq!(*codes.last().unwrap(), 32760);

        for zone in 1..=60 {
            assert!(lookup(UTM_NORTH_BASE + zone).is_some());
            assert!(lookup(UTM_SOUTH_BASE + zone).is_some());
        }
        assert!(lookup(32600).is_none());
        assert!(lookup(32661).is_none());
    }

    #[test]
    fn test_utm_zone_entries() {
        let zone31n = lookup(32631).unwrap();
        assert_eq!(zone31n.name, "WGS 84 / UTM ZONE 31N");
        assert_eq!(zone31n.zone.as_deref(), Some("31N"));
        assert!(zone31n.projected);
        assert_eq!(zone31n.bound_box.to_array(), [0.0, 0.0, 6.0, 84.0]);
        assert_eq!(zone31n.area_of_use,
                   "Between 0°E and 6°E, northern hemisphere between equator and 84°N");

        let zone1s = lookup(32701).unwrap();
        assert_eq!(zone1s.bound_box.to_array(), [-180.0, -80.0, -174.0, 0.0]);
        assert!(zone1s.area_of_use.starts_with("Between 180°W and 174°W"));
    }

    #[test]
    fn test_explicit_systems() {
        let wgs = wgs84();
        assert_eq!(wgs.epsg, 4326);
        assert!(!wgs.projected);
        assert!(!wgs.is_utm());

        let mercator = crs_by_epsg(3857).unwrap();
        assert!(mercator.projected);
        assert!(!mercator.is_utm());
        assert_eq!(mercator.description(), "WGS 84 / PSEUDO-MERCATOR (EPSG:3857)");
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        match crs_by_epsg(27700) {
            Err(GeometryError::CrsNotFound(27700)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_crs_strings() {
        assert_eq!(Crs::parse("EPSG:4326").unwrap().epsg, 4326);
        assert_eq!(Crs::parse("epsg:32631").unwrap().epsg, 32631);
        assert_eq!(Crs::parse(" 3857 ").unwrap().epsg, 3857);
        assert!(Crs::parse("WGS84").is_err());
        assert!(Crs::parse("EPSG:1").is_err());
    }

    #[test]
    fn test_parse_epsg_code() {
        assert_eq!(parse_epsg_code("3857").unwrap(), 3857);
        assert_eq!(parse_epsg_code(" epsg: 27700 ").unwrap(), 27700);
        assert!(parse_epsg_code("EPSG:").is_err());
        assert!(parse_epsg_code("-4326").is_err());

        match parse_epsg_code("wgs84") {
            Err(GeometryError::ParseError(msg)) => assert!(msg.contains("wgs84")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_custom_definitions() {
        let content = r#"
            [systems.4326]
            name = "WGS 84"
            area_of_use = "World"
            bound_box = [-180, -90, 180, 90]
            projected = false
        "#;
        let registry = CrsRegistry::from_str(content).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(4326).unwrap().bound_box.min_x, -180.0);

        assert!(CrsRegistry::from_str("[systems.abc]\nname = \"x\"").is_err());
        assert!(CrsRegistry::from_str("not = [valid").is_err());
    }
}
