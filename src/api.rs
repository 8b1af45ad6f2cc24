//! Library entry points
//!
//! Text and binary parsing helpers for callers that only need a geometry
//! out of a string, plus the `VectorKit` facade the CLI commands use.

use std::str::FromStr;
use log::{debug, info};

use crate::coordinate::crs;
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::geometry::{DistanceUnit, Geometry};
use crate::utils::coordinate_utils;
use crate::{wkb, wkt};

pub use crate::utils::coordinate_utils::parse_bare_coords;
pub use crate::wkb::{decode_wkb, decode_wkb_hex, decode_wkb_with_crs, encode_wkb, encode_wkb_hex};
pub use crate::wkt::{format_wkt, parse_wkt};

/// Parse a geometry from text
///
/// WKT is tried first, then the bare coordinate forms accepted by
/// [`parse_bare_coords`].
///
/// # Arguments
/// * `text` - WKT or a coordinate pair such as `"13.4, 52.5"`
///
/// # Returns
/// The geometry, or a `ParseError` naming the text when neither form matches
pub fn parse_string_geometry(text: &str) -> GeometryResult<Geometry> {
    match wkt::parse_wkt(text) {
        Ok(geometry) => Ok(geometry),
        Err(wkt_error) => {
            debug!("Not WKT ({}), trying bare coordinates", wkt_error);
            coordinate_utils::parse_bare_coords(text)
                .map(Geometry::Point)
                .map_err(|_| GeometryError::ParseError(
                    format!("Unable to parse string coordinates: '{}'", text)
                ))
        }
    }
}

/// Whether the text is valid WKT
///
/// Bare coordinate pairs are not geometries here, so numeric text columns
/// are not mistaken for geometry columns.
pub fn probe_is_geometry(text: &str) -> bool {
    wkt::parse_wkt(text).is_ok()
}

/// Text encodings a geometry can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Wkt,
    WkbHex,
}

impl OutputFormat {
    pub fn render(&self, geometry: &Geometry) -> String {
        match self {
            OutputFormat::Wkt => wkt::format_wkt(geometry),
            OutputFormat::WkbHex => wkb::encode_wkb_hex(geometry),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wkt" => Ok(OutputFormat::Wkt),
            "wkb" | "wkb-hex" | "hex" => Ok(OutputFormat::WkbHex),
            other => Err(GeometryError::ParseError(format!("Unsupported output format: {}", other))),
        }
    }
}

/// Main interface to the VectorKit library
pub struct VectorKit {
    unit: DistanceUnit,
}

impl Default for VectorKit {
    fn default() -> Self {
        VectorKit::new(DistanceUnit::default())
    }
}

impl VectorKit {
    /// Create a new VectorKit instance reporting measures in `unit`
    pub fn new(unit: DistanceUnit) -> Self {
        VectorKit { unit }
    }

    /// Unit used for lengths and areas
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Read a geometry from WKT, a bare coordinate pair or hex WKB
    pub fn read(&self, input: &str) -> GeometryResult<Geometry> {
        let input = input.trim();
        match parse_string_geometry(input) {
            Ok(geometry) => Ok(geometry),
            Err(text_error) => match wkb::decode_wkb_hex(input) {
                Ok(geometry) => {
                    debug!("Read {} from hex WKB", geometry.kind());
                    Ok(geometry)
                }
                Err(_) => Err(text_error),
            },
        }
    }

    /// Read a geometry and place it in the given CRS
    ///
    /// Text formats carry no CRS, so the coordinates are taken as they are.
    pub fn read_in_crs(&self, input: &str, epsg: u32) -> GeometryResult<Geometry> {
        let geometry = self.read(input)?;
        if epsg == geometry.crs().epsg {
            return Ok(geometry);
        }
        Ok(geometry.assign_crs(crs::crs_by_epsg(epsg)?))
    }

    /// Analyze a geometry and return report lines describing it
    ///
    /// # Arguments
    /// * `geometry` - The geometry to describe
    ///
    /// # Returns
    /// One line per measure; measures that need points are omitted for
    /// empty geometries
    pub fn analyze(&self, geometry: &Geometry) -> Vec<String> {
        let crs = geometry.crs();
        let symbol = self.unit.symbol();
        let mut lines = vec![
            format!("Type: {}", geometry.kind()),
            format!("CRS: {}", crs.description()),
            format!("Elements: {}", geometry.len()),
        ];

        if let Ok(bounds) = geometry.bounds() {
            lines.push(format!("Bounds: {},{},{},{}", bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y));
            let inside = crs.bound_box.contains(&bounds.center());
            lines.push(format!("Within area of use ({}): {}", crs.area_of_use, if inside { "yes" } else { "no" }));
        }

        lines.push(format!("Length: {:.3} {}", geometry.length(self.unit), symbol));

        if matches!(geometry, Geometry::Polygon(_) | Geometry::GeometryCollection(_)) {
            lines.push(format!("Area: {:.3} {}²", geometry.area(self.unit), symbol));
        }

        if let Ok(centroid) = geometry.centroid() {
            lines.push(format!("Centroid: {}", centroid));
        }

        match geometry.estimate_utm_crs() {
            Ok(utm) => lines.push(format!("UTM zone: {}", utm.description())),
            Err(e) => debug!("No UTM estimate: {}", e),
        }

        info!("Analyzed {} in EPSG:{}", geometry.kind(), crs.epsg);
        lines
    }

    /// Reproject a geometry when a target is given and render it
    pub fn convert(&self, geometry: &Geometry, target_epsg: Option<u32>, format: OutputFormat) -> GeometryResult<String> {
        let converted = match target_epsg {
            Some(epsg) => geometry.to_crs(epsg)?,
            None => geometry.clone(),
        };
        Ok(format.render(&converted))
    }
}
