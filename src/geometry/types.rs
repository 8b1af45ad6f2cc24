//! Concrete geometry variants
//!
//! Every point-sequence variant keeps all of its points in one coordinate
//! system; the constructors reject mixed input.

use std::borrow::Cow;

use super::algorithms;
use super::measure;
use super::shape::Geometry;
use super::units::DistanceUnit;
use crate::coordinate::crs::{self, Crs};
use crate::coordinate::{CoordinateTransformer, Coord, Point};
use crate::geometry::errors::{GeometryError, GeometryResult};

fn check_shared_crs(points: &[Point]) -> GeometryResult<()> {
    if let Some(first) = points.first() {
        let expected = first.crs().epsg;
        if let Some(other) = points.iter().find(|p| p.crs().epsg != expected) {
            return Err(GeometryError::CrsMismatch { expected, found: other.crs().epsg });
        }
    }
    Ok(())
}

fn sequence_crs(points: &[Point]) -> &'static Crs {
    points.first().map(Point::crs).unwrap_or_else(crs::wgs84)
}

fn points_from_coords(coords: &[Coord], crs: &'static Crs) -> Vec<Point> {
    coords.iter().map(|c| Point::new(c.x, c.y, crs)).collect()
}

/// An ordered sequence of points
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Create a line string; all points must share one CRS
    pub fn new(points: Vec<Point>) -> GeometryResult<Self> {
        check_shared_crs(&points)?;
        Ok(LineString { points })
    }

    /// Create a line string from bare coordinates in the given CRS
    pub fn from_coords(coords: &[Coord], crs: &'static Crs) -> Self {
        LineString { points: points_from_coords(coords, crs) }
    }

    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        LineString { points }
    }

    /// Member points in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the line string has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// CRS of the first point, WGS84 when empty
    pub fn crs(&self) -> &'static Crs {
        sequence_crs(&self.points)
    }

    /// Length along the points in the given unit
    pub fn length(&self, unit: DistanceUnit) -> f64 {
        measure::path_length(&self.points, unit)
    }

    /// Mean of the points
    pub fn centroid(&self) -> GeometryResult<Point> {
        algorithms::mean_point(&self.points, "centroid")
    }
}

/// A set of points kept in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    /// Create a multi point; all points must share one CRS
    pub fn new(points: Vec<Point>) -> GeometryResult<Self> {
        check_shared_crs(&points)?;
        Ok(MultiPoint { points })
    }

    /// Create a multi point from bare coordinates in the given CRS
    pub fn from_coords(coords: &[Coord], crs: &'static Crs) -> Self {
        MultiPoint { points: points_from_coords(coords, crs) }
    }

    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        MultiPoint { points }
    }

    /// Member points in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// CRS of the first point, WGS84 when empty
    pub fn crs(&self) -> &'static Crs {
        sequence_crs(&self.points)
    }

    /// Distance visiting the points in order
    pub fn length(&self, unit: DistanceUnit) -> f64 {
        measure::path_length(&self.points, unit)
    }

    /// Mean of the points
    pub fn centroid(&self) -> GeometryResult<Point> {
        algorithms::mean_point(&self.points, "centroid")
    }
}

/// A polygon with a single ring
///
/// The ring is stored as given. Operations that need a closed ring work on
/// a closed copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its ring; all points must share one CRS
    pub fn new(ring: Vec<Point>) -> GeometryResult<Self> {
        check_shared_crs(&ring)?;
        Ok(Polygon { ring })
    }

    /// Create a polygon from bare coordinates in the given CRS
    pub fn from_coords(coords: &[Coord], crs: &'static Crs) -> Self {
        Polygon { ring: points_from_coords(coords, crs) }
    }

    pub(crate) fn from_points_unchecked(ring: Vec<Point>) -> Self {
        Polygon { ring }
    }

    /// Ring points as stored
    pub fn points(&self) -> &[Point] {
        &self.ring
    }

    /// Number of stored ring points
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the ring has no points
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// CRS of the first point, WGS84 when empty
    pub fn crs(&self) -> &'static Crs {
        sequence_crs(&self.ring)
    }

    /// Whether the first and last ring points coincide
    pub fn is_closed(&self) -> bool {
        match (self.ring.first(), self.ring.last()) {
            (Some(first), Some(last)) => first.x == last.x && first.y == last.y,
            _ => true,
        }
    }

    /// The ring with the first point appended if it is open
    pub fn closed_ring(&self) -> Cow<'_, [Point]> {
        if self.is_closed() {
            Cow::Borrowed(self.ring.as_slice())
        } else {
            let mut ring = self.ring.clone();
            ring.push(self.ring[0]);
            Cow::Owned(ring)
        }
    }

    /// Length of the closed ring in the given unit
    pub fn perimeter(&self, unit: DistanceUnit) -> f64 {
        measure::path_length(&self.closed_ring(), unit)
    }

    /// Spherical area of the closed ring in `unit` squared
    ///
    /// Projected rings are taken back to geographic degrees first.
    pub fn area(&self, unit: DistanceUnit) -> f64 {
        let ring = self.closed_ring();
        if self.crs().projected {
            let transformer = CoordinateTransformer;
            let geographic: Vec<Point> = ring.iter()
                .map(|p| transformer.transform_point(p, crs::wgs84()))
                .collect();
            measure::spherical_area(&geographic, unit)
        } else {
            measure::spherical_area(&ring, unit)
        }
    }

    /// Area-weighted centroid of the ring
    pub fn centroid(&self) -> GeometryResult<Point> {
        algorithms::polygon_centroid(&self.ring)
    }

    /// Convex hull of the ring points as a new counter-clockwise polygon
    pub fn convex_hull(&self) -> GeometryResult<Polygon> {
        Ok(Polygon::from_points_unchecked(algorithms::convex_hull(&self.ring)?))
    }

    /// Ray-casting containment test
    pub fn contains(&self, point: &Point) -> bool {
        algorithms::point_in_polygon(point, &self.ring)
    }

    /// Whether the two polygons have crossing edges or one contains the other
    pub fn intersects_polygon(&self, other: &Polygon) -> bool {
        algorithms::polygons_intersect(&self.closed_ring(), &other.closed_ring())
    }
}

/// A heterogeneous collection of geometries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Create a collection from its members
    pub fn new(geometries: Vec<Geometry>) -> Self {
        GeometryCollection { geometries }
    }

    /// Members in order
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Whether the collection has no members
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// CRS of the first member, WGS84 when empty
    pub fn crs(&self) -> &'static Crs {
        self.geometries.first().map(Geometry::crs).unwrap_or_else(crs::wgs84)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_crs_is_rejected() {
        let a = Point::wgs84(0.0, 0.0);
        let b = Point::with_epsg(0.0, 0.0, 3857).unwrap();

        match LineString::new(vec![a, b]) {
            Err(GeometryError::CrsMismatch { expected: 4326, found: 3857 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(Polygon::new(vec![b, a]).is_err());
        assert!(MultiPoint::new(vec![a, a]).is_ok());
    }

    #[test]
    fn test_closed_ring_does_not_touch_stored_ring() {
        let open = Polygon::from_coords(
            &[Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), Coord::new(1.0, 1.0)],
            crs::wgs84(),
        );
        assert!(!open.is_closed());
        assert_eq!(open.closed_ring().len(), 4);
        assert_eq!(open.len(), 3);

        let closed = Polygon::new(open.closed_ring().into_owned()).unwrap();
        assert!(closed.is_closed());
        assert!(matches!(closed.closed_ring(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_perimeter_closes_the_ring() {
        let crs = crs::crs_by_epsg(3857).unwrap();
        let open = Polygon::from_coords(
            &[Coord::new(0.0, 0.0), Coord::new(3000.0, 0.0), Coord::new(3000.0, 4000.0)],
            crs,
        );
        assert!((open.perimeter(DistanceUnit::Kilometers) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_values_default_to_wgs84() {
        assert_eq!(LineString::new(Vec::new()).unwrap().crs().epsg, 4326);
        assert_eq!(GeometryCollection::default().crs().epsg, 4326);
        assert!(Polygon::new(Vec::new()).unwrap().is_closed());
    }
}
