//! The closed set of geometry variants and their shared capabilities

use std::fmt;

use super::algorithms;
use super::types::{GeometryCollection, LineString, MultiPoint, Polygon};
use super::units::DistanceUnit;
use crate::coordinate::crs::{self, Crs};
use crate::coordinate::{BoundingBox, CoordinateTransformer, Coord, Point};
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::{wkb, wkt};

/// Any supported geometry
///
/// Equality is variant-aware: two geometries are equal only when they are
/// the same variant with pointwise-equal coordinates in the same CRS.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Number of points, or members for a collection
    pub fn len(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(l) => l.len(),
            Geometry::Polygon(p) => p.len(),
            Geometry::MultiPoint(m) => m.len(),
            Geometry::GeometryCollection(gc) => gc.len(),
        }
    }

    /// Whether the geometry holds no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate reference system of the geometry
    pub fn crs(&self) -> &'static Crs {
        match self {
            Geometry::Point(p) => p.crs(),
            Geometry::LineString(l) => l.crs(),
            Geometry::Polygon(p) => p.crs(),
            Geometry::MultiPoint(m) => m.crs(),
            Geometry::GeometryCollection(gc) => gc.crs(),
        }
    }

    /// Every point, collections flattened in member order
    pub fn points(&self) -> Vec<Point> {
        match self {
            Geometry::Point(p) => vec![*p],
            Geometry::LineString(l) => l.points().to_vec(),
            Geometry::Polygon(p) => p.points().to_vec(),
            Geometry::MultiPoint(m) => m.points().to_vec(),
            Geometry::GeometryCollection(gc) => gc.geometries().iter()
                .flat_map(Geometry::points)
                .collect(),
        }
    }

    /// Every coordinate pair, collections flattened in member order
    pub fn coords(&self) -> Vec<Coord> {
        self.points().iter().map(Point::coord).collect()
    }

    /// Extent of the geometry
    pub fn bounds(&self) -> GeometryResult<BoundingBox> {
        BoundingBox::from_coords(self.coords())
            .ok_or_else(|| GeometryError::EmptyGeometry("bounds".to_string()))
    }

    /// Length in the given unit
    ///
    /// Points measure zero, polygons their closed perimeter and collections
    /// the sum of their members.
    pub fn length(&self, unit: DistanceUnit) -> f64 {
        match self {
            Geometry::Point(_) => 0.0,
            Geometry::LineString(l) => l.length(unit),
            Geometry::Polygon(p) => p.perimeter(unit),
            Geometry::MultiPoint(m) => m.length(unit),
            Geometry::GeometryCollection(gc) => gc.geometries().iter()
                .map(|g| g.length(unit))
                .sum(),
        }
    }

    /// Spherical area in `unit` squared; zero for non-polygonal geometries
    pub fn area(&self, unit: DistanceUnit) -> f64 {
        match self {
            Geometry::Polygon(p) => p.area(unit),
            Geometry::GeometryCollection(gc) => gc.geometries().iter()
                .map(|g| g.area(unit))
                .sum(),
            _ => 0.0,
        }
    }

    /// Centroid in the geometry's own CRS
    pub fn centroid(&self) -> GeometryResult<Point> {
        match self {
            Geometry::Point(p) => Ok(*p),
            Geometry::LineString(l) => l.centroid(),
            Geometry::Polygon(p) => p.centroid(),
            Geometry::MultiPoint(m) => m.centroid(),
            Geometry::GeometryCollection(_) => algorithms::mean_point(&self.points(), "centroid"),
        }
    }

    /// Convex hull of all points of the geometry
    pub fn convex_hull(&self) -> GeometryResult<Polygon> {
        let hull = algorithms::convex_hull(&self.points())?;
        Ok(Polygon::from_points_unchecked(hull))
    }

    /// Whether this geometry intersects another
    ///
    /// Supported pairs are polygon/point (containment) and polygon/polygon.
    /// Every other combination returns `false`.
    pub fn intersects(&self, other: &Geometry) -> bool {
        match (self, other) {
            (Geometry::Polygon(poly), Geometry::Point(p)) |
            (Geometry::Point(p), Geometry::Polygon(poly)) => poly.contains(p),
            (Geometry::Polygon(a), Geometry::Polygon(b)) => a.intersects_polygon(b),
            _ => false,
        }
    }

    /// Reproject into the coordinate system with the given EPSG code
    pub fn to_crs(&self, target_epsg: u32) -> GeometryResult<Geometry> {
        CoordinateTransformer.to_crs(self, target_epsg)
    }

    /// Same coordinates interpreted in another coordinate system
    pub fn assign_crs(&self, crs: &'static Crs) -> Geometry {
        let relabel = |points: &[Point]| -> Vec<Point> {
            points.iter().map(|p| p.with_crs(crs)).collect()
        };

        match self {
            Geometry::Point(p) => Geometry::Point(p.with_crs(crs)),
            Geometry::LineString(l) => Geometry::LineString(LineString::from_points_unchecked(relabel(l.points()))),
            Geometry::Polygon(p) => Geometry::Polygon(Polygon::from_points_unchecked(relabel(p.points()))),
            Geometry::MultiPoint(m) => Geometry::MultiPoint(MultiPoint::from_points_unchecked(relabel(m.points()))),
            Geometry::GeometryCollection(gc) => Geometry::GeometryCollection(GeometryCollection::new(
                gc.geometries().iter().map(|g| g.assign_crs(crs)).collect(),
            )),
        }
    }

    /// EPSG code of the UTM zone best suited to this geometry
    pub fn estimate_utm_epsg(&self) -> GeometryResult<u32> {
        CoordinateTransformer.estimate_utm_epsg(self)
    }

    /// The UTM zone best suited to this geometry
    pub fn estimate_utm_crs(&self) -> GeometryResult<&'static Crs> {
        crs::crs_by_epsg(self.estimate_utm_epsg()?)
    }

    /// Well-Known Text representation
    pub fn to_wkt(&self) -> String {
        wkt::format_wkt(self)
    }

    /// Well-Known Binary representation (little-endian)
    pub fn to_wkb(&self) -> Vec<u8> {
        wkb::encode_wkb(self)
    }

    /// Well-Known Binary representation as lowercase hex
    pub fn to_wkb_hex(&self) -> String {
        wkb::encode_wkb_hex(self)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Geometry::LineString(line)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(points: MultiPoint) -> Self {
        Geometry::MultiPoint(points)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(collection: GeometryCollection) -> Self {
        Geometry::GeometryCollection(collection)
    }
}
