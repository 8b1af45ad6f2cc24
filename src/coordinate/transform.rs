//! Coordinate transformation functionality
//!
//! Geographic degrees and projected meters are related by the spherical
//! Web-Mercator formulas. Projected-to-projected conversions copy the
//! coordinates unchanged.

use std::f64::consts::PI;
use log::debug;

use super::crs::{self, Crs, UTM_NORTH_BASE, UTM_SOUTH_BASE};
use super::point::{Coord, Point};
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::geometry::{Geometry, GeometryCollection, LineString, MultiPoint, Polygon};

/// Transformer for converting geometries between coordinate systems
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Half the equatorial circumference used by Pseudo-Mercator, in meters
    pub const MERCATOR_EXTENT: f64 = 20037508.34;

    /// Convert longitude/latitude degrees to Pseudo-Mercator meters
    pub fn geographic_to_mercator(&self, lon: f64, lat: f64) -> Coord {
        let x = lon * Self::MERCATOR_EXTENT / 180.0;
        let y = f64::ln(f64::tan((90.0 + lat) * PI / 360.0)) / (PI / 180.0);

        Coord::new(x, y * Self::MERCATOR_EXTENT / 180.0)
    }

    /// Convert Pseudo-Mercator meters to longitude/latitude degrees
    pub fn mercator_to_geographic(&self, x: f64, y: f64) -> Coord {
        let lon = x / Self::MERCATOR_EXTENT * 180.0;
        let lat = y / Self::MERCATOR_EXTENT * 180.0;
        let lat = 180.0 / PI * (2.0 * f64::atan(f64::exp(lat * PI / 180.0)) - PI / 2.0);

        Coord::new(lon, lat)
    }

    /// Transform a single point into the target coordinate system
    pub fn transform_point(&self, point: &Point, target: &'static Crs) -> Point {
        let coord = match (point.crs().projected, target.projected) {
            (true, false) => self.mercator_to_geographic(point.x, point.y),
            (false, true) => self.geographic_to_mercator(point.x, point.y),
            _ => point.coord(),
        };

        Point::new(coord.x, coord.y, target)
    }

    /// Transform every point of a geometry into the target coordinate system
    pub fn transform_geometry(&self, geometry: &Geometry, target: &'static Crs) -> Geometry {
        let convert = |points: &[Point]| -> Vec<Point> {
            points.iter().map(|p| self.transform_point(p, target)).collect()
        };

        match geometry {
            Geometry::Point(p) => Geometry::Point(self.transform_point(p, target)),
            Geometry::LineString(l) =>
                Geometry::LineString(LineString::from_points_unchecked(convert(l.points()))),
            Geometry::Polygon(p) =>
                Geometry::Polygon(Polygon::from_points_unchecked(convert(p.points()))),
            Geometry::MultiPoint(m) =>
                Geometry::MultiPoint(MultiPoint::from_points_unchecked(convert(m.points()))),
            Geometry::GeometryCollection(gc) => Geometry::GeometryCollection(GeometryCollection::new(
                gc.geometries().iter()
                    .map(|g| self.transform_geometry(g, target))
                    .collect(),
            )),
        }
    }

    /// Reproject a geometry into the system with the given EPSG code
    ///
    /// # Arguments
    /// * `geometry` - The geometry to reproject
    /// * `target_epsg` - EPSG code of the target system
    ///
    /// # Returns
    /// A new geometry, or `CrsNotFound` if the code is not registered
    pub fn to_crs(&self, geometry: &Geometry, target_epsg: u32) -> GeometryResult<Geometry> {
        let target = crs::crs_by_epsg(target_epsg)?;

        debug!("Transforming {} from EPSG:{} to EPSG:{}",
               geometry.kind(), geometry.crs().epsg, target.epsg);

        Ok(self.transform_geometry(geometry, target))
    }

    /// Estimate the UTM zone EPSG code best suited to a geometry
    ///
    /// Geometries already in a UTM zone keep their code. Otherwise the
    /// zone is derived from a representative point in geographic degrees.
    pub fn estimate_utm_epsg(&self, geometry: &Geometry) -> GeometryResult<u32> {
        let source = geometry.crs();
        if source.is_utm() {
            return Ok(source.epsg);
        }

        let representative = Self::representative_point(geometry)?;
        let coord = if source.projected {
            self.mercator_to_geographic(representative.x, representative.y)
        } else {
            representative.coord()
        };

        let epsg = utm_epsg_for(coord.x, coord.y);
        debug!("Estimated UTM zone EPSG:{} for {} at ({}, {})",
               epsg, geometry.kind(), coord.x, coord.y);

        Ok(epsg)
    }

    fn representative_point(geometry: &Geometry) -> GeometryResult<Point> {
        match geometry {
            Geometry::Point(p) => Ok(*p),
            Geometry::LineString(l) => l.centroid(),
            Geometry::Polygon(p) => p.centroid(),
            Geometry::MultiPoint(m) => m.centroid(),
            Geometry::GeometryCollection(gc) => match gc.geometries().first() {
                Some(first) => Self::representative_point(first),
                None => Err(GeometryError::EmptyGeometry("UTM estimation".to_string())),
            },
        }
    }
}

/// UTM zone EPSG code for a longitude/latitude in degrees
pub fn utm_epsg_for(lon: f64, lat: f64) -> u32 {
    let zone = (((lon + 180.0) / 6.0).floor() as i64 + 1).clamp(1, 60) as u32;

    if lat >= 0.0 {
        UTM_NORTH_BASE + zone
    } else {
        UTM_SOUTH_BASE + zone
    }
}
