//! Point structures for representing coordinates

use std::fmt;

use super::crs::{self, Crs};
use crate::geometry::errors::GeometryResult;

/// A bare x, y pair (longitude/easting, latitude/northing)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
}

impl Coord {
    /// Create a new coordinate pair
    pub fn new(x: f64, y: f64) -> Self {
        Coord { x, y }
    }

    /// Convert to a WGS84 point
    pub fn to_point(self) -> Point {
        Point::wgs84(self.x, self.y)
    }

    /// The pair as `[x, y]`
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Coord {
    fn from(values: [f64; 2]) -> Self {
        Coord::new(values[0], values[1])
    }
}

/// A point in a registered coordinate reference system
///
/// The CRS is always a registry entry, so projection operations can rely
/// on it being resolvable.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
    crs: &'static Crs,
}

impl Point {
    /// Create a new point in the given coordinate system
    pub fn new(x: f64, y: f64, crs: &'static Crs) -> Self {
        Point { x, y, crs }
    }

    /// Create a new WGS84 point
    pub fn wgs84(x: f64, y: f64) -> Self {
        Point::new(x, y, crs::wgs84())
    }

    /// Create a new point, resolving the CRS by EPSG code
    pub fn with_epsg(x: f64, y: f64, epsg: u32) -> GeometryResult<Self> {
        Ok(Point::new(x, y, crs::crs_by_epsg(epsg)?))
    }

    /// Coordinate reference system of this point
    pub fn crs(&self) -> &'static Crs {
        self.crs
    }

    /// The bare coordinate pair
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Same coordinates with a different coordinate system attached
    pub(crate) fn with_crs(&self, crs: &'static Crs) -> Self {
        Point::new(self.x, self.y, crs)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.crs.epsg == other.crs.epsg
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality_includes_crs() {
        let a = Point::wgs84(1.0, 2.0);
        let b = Point::with_epsg(1.0, 2.0, 3857).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, Coord::new(1.0, 2.0).to_point());
    }

    #[test]
    fn test_unknown_epsg() {
        assert!(Point::with_epsg(0.0, 0.0, 9999).is_err());
    }
}
