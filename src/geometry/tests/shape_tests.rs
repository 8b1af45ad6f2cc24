//! Tests for the geometry variants

extern crate std;

use crate::coordinate::crs;
use crate::coordinate::{Coord, Point};
use crate::geometry::{
    DistanceUnit, Geometry, GeometryCollection, GeometryError, LineString, MultiPoint, Polygon,
};

fn coords(values: &[(f64, f64)]) -> Vec<Coord> {
    values.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

fn reference_polygon() -> Polygon {
    Polygon::from_coords(
        &coords(&[(30.0, 10.0), (40.0, 40.0), (20.0, 40.0), (10.0, 20.0), (30.0, 10.0)]),
        crs::wgs84(),
    )
}

fn square(min: f64, max: f64) -> Polygon {
    Polygon::from_coords(
        &coords(&[(min, min), (max, min), (max, max), (min, max), (min, min)]),
        crs::wgs84(),
    )
}

#[test]
fn test_equality_is_variant_aware() {
    let points = coords(&[(1.0, 2.0), (3.0, 4.0)]);
    let line = Geometry::from(LineString::from_coords(&points, crs::wgs84()));
    let multi = Geometry::from(MultiPoint::from_coords(&points, crs::wgs84()));

    std::assert_ne!(line, multi);
    std::assert_eq!(line, line.clone());
    std::assert_eq!(
        Geometry::from(Point::wgs84(1.0, 2.0)),
        Geometry::from(Point::wgs84(1.0, 2.0))
    );
}

#[test]
fn test_point_equality_includes_crs() {
    let geographic = Point::wgs84(10.0, 10.0);
    let mercator = Point::with_epsg(10.0, 10.0, 3857).unwrap();
    std::assert_ne!(geographic, mercator);
}

#[test]
fn test_bounds() {
    let bounds = Geometry::from(reference_polygon()).bounds().unwrap();
    std::assert_eq!(bounds.to_array(), [10.0, 10.0, 40.0, 40.0]);

    let empty = Geometry::from(LineString::from_coords(&[], crs::wgs84()));
    std::assert!(matches!(empty.bounds(), Err(GeometryError::EmptyGeometry(_))));
}

#[test]
fn test_reference_polygon_area() {
    let area = Geometry::from(reference_polygon()).area(DistanceUnit::Kilometers);
    let expected = 6050589.36689182;
    std::assert!(((area - expected) / expected).abs() < 1e-9, "area was {}", area);

    // Same ring in the opposite direction
    let mut reversed = reference_polygon().points().to_vec();
    reversed.reverse();
    let reversed = Polygon::new(reversed).unwrap();
    std::assert!(((reversed.area(DistanceUnit::Kilometers) - expected) / expected).abs() < 1e-9);
}

#[test]
fn test_area_of_open_ring_matches_closed_ring() {
    let closed = reference_polygon();
    let open_points = &closed.points()[..closed.len() - 1];
    let open = Polygon::new(open_points.to_vec()).unwrap();

    std::assert!((open.area(DistanceUnit::Meters) - closed.area(DistanceUnit::Meters)).abs() < 1e-3);
}

#[test]
fn test_area_of_non_polygons_is_zero() {
    std::assert_eq!(Geometry::from(Point::wgs84(1.0, 1.0)).area(DistanceUnit::Kilometers), 0.0);
    let line = LineString::from_coords(&coords(&[(0.0, 0.0), (1.0, 1.0)]), crs::wgs84());
    std::assert_eq!(Geometry::from(line).area(DistanceUnit::Kilometers), 0.0);
}

#[test]
fn test_polygon_centroid() {
    let centroid = Geometry::from(reference_polygon()).centroid().unwrap();
    std::assert!((centroid.x - 25.454545454545453).abs() < 1e-9);
    std::assert!((centroid.y - 26.96969696969697).abs() < 1e-9);
    std::assert_eq!(centroid.crs().epsg, 4326);
}

#[test]
fn test_line_and_collection_centroid_are_point_means() {
    let line = LineString::from_coords(&coords(&[(0.0, 0.0), (4.0, 0.0), (2.0, 6.0)]), crs::wgs84());
    let centroid = line.centroid().unwrap();
    std::assert_eq!((centroid.x, centroid.y), (2.0, 2.0));

    let collection = Geometry::from(GeometryCollection::new(vec![
        Geometry::from(Point::wgs84(0.0, 0.0)),
        Geometry::from(Point::wgs84(2.0, 4.0)),
    ]));
    let centroid = collection.centroid().unwrap();
    std::assert_eq!((centroid.x, centroid.y), (1.0, 2.0));

    let empty = Geometry::from(GeometryCollection::default());
    std::assert!(empty.centroid().is_err());
}

#[test]
fn test_intersects() {
    let outer = Geometry::from(square(0.0, 10.0));
    let overlapping = Geometry::from(square(5.0, 15.0));
    let distant = Geometry::from(square(20.0, 30.0));
    let inside = Geometry::from(Point::wgs84(5.0, 5.0));
    let outside = Geometry::from(Point::wgs84(50.0, 50.0));

    std::assert!(outer.intersects(&overlapping));
    std::assert!(!outer.intersects(&distant));
    std::assert!(outer.intersects(&inside));
    std::assert!(inside.intersects(&outer));
    std::assert!(!outer.intersects(&outside));

    // Unsupported pairs
    std::assert!(!inside.intersects(&inside));
    let line = Geometry::from(LineString::from_coords(&coords(&[(0.0, 0.0), (9.0, 9.0)]), crs::wgs84()));
    std::assert!(!outer.intersects(&line));
}

#[test]
fn test_convex_hull_of_geometry() {
    let multi = Geometry::from(MultiPoint::from_coords(
        &coords(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
        crs::wgs84(),
    ));
    let hull = multi.convex_hull().unwrap();
    std::assert_eq!(hull.len(), 4);
    std::assert!(!hull.points().iter().any(|p| p.x == 2.0 && p.y == 2.0));

    let pair = Geometry::from(MultiPoint::from_coords(&coords(&[(0.0, 0.0), (1.0, 1.0)]), crs::wgs84()));
    std::assert!(matches!(pair.convex_hull(), Err(GeometryError::EmptyGeometry(_))));
}

#[test]
fn test_length_of_collection_sums_members() {
    let line = LineString::from_coords(&coords(&[(0.0, 0.0), (0.0, 1.0)]), crs::wgs84());
    let single = line.length(DistanceUnit::Kilometers);

    let collection = Geometry::from(GeometryCollection::new(vec![
        Geometry::from(line.clone()),
        Geometry::from(Point::wgs84(3.0, 3.0)),
        Geometry::from(line),
    ]));

    std::assert!((collection.length(DistanceUnit::Kilometers) - 2.0 * single).abs() < 1e-9);
    std::assert_eq!(collection.len(), 3);
    std::assert_eq!(collection.kind(), "GeometryCollection");
}

#[test]
fn test_length_in_other_units() {
    let line = LineString::from_coords(&coords(&[(0.0, 0.0), (1.0, 0.0)]), crs::wgs84());
    let km = line.length(DistanceUnit::Kilometers);
    let miles = line.length(DistanceUnit::Miles);
    let meters = line.length(DistanceUnit::Meters);

    std::assert!((meters - km * 1000.0).abs() < 1e-6);
    std::assert!(miles < km);
}

#[test]
fn test_points_flatten_collections() {
    let collection = Geometry::from(GeometryCollection::new(vec![
        Geometry::from(Point::wgs84(1.0, 1.0)),
        Geometry::from(square(0.0, 1.0)),
    ]));
    std::assert_eq!(collection.points().len(), 6);
    std::assert_eq!(collection.coords()[0], Coord::new(1.0, 1.0));
}
