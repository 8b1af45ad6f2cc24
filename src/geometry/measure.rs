//! Distance, length and area measures
//!
//! Geographic coordinates (degrees) are measured on a sphere, projected
//! coordinates (meters) in the plane.

use super::units::DistanceUnit;
use crate::coordinate::Point;

/// Great-circle distance between two longitude/latitude points
///
/// # Arguments
/// * `p1` - First point, degrees
/// * `p2` - Second point, degrees
/// * `unit` - Unit of the result; selects the Earth radius
///
/// # Returns
/// The distance along the sphere in `unit`
pub fn haversine(p1: &Point, p2: &Point, unit: DistanceUnit) -> f64 {
    let lat1 = p1.y.to_radians();
    let lon1 = p1.x.to_radians();
    let lat2 = p2.y.to_radians();
    let lon2 = p2.x.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) +
        lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * f64::atan2(a.sqrt(), (1.0 - a).sqrt());

    unit.earth_radius() * c
}

/// Euclidean distance between two projected points, converted from meters
pub fn projected_distance(p1: &Point, p2: &Point, unit: DistanceUnit) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    unit.from_meters((dx * dx + dy * dy).sqrt())
}

/// Distance between two points using the formula matching their CRS
pub fn distance(p1: &Point, p2: &Point, unit: DistanceUnit) -> f64 {
    if p1.crs().projected {
        projected_distance(p1, p2, unit)
    } else {
        haversine(p1, p2, unit)
    }
}

/// Sum of the distances between consecutive points
pub fn path_length(points: &[Point], unit: DistanceUnit) -> f64 {
    points.windows(2)
        .map(|pair| distance(&pair[0], &pair[1], unit))
        .sum()
}

/// Spherical excess of a closed ring given in degrees, in steradians
pub fn spherical_excess(ring: &[Point]) -> f64 {
    let total: f64 = ring.windows(2)
        .map(|pair| {
            let lon1 = pair[0].x.to_radians();
            let lat1 = pair[0].y.to_radians();
            let lon2 = pair[1].x.to_radians();
            let lat2 = pair[1].y.to_radians();

            (lon2 - lon1) * (lat1.sin() + lat2.sin())
        })
        .sum();

    total / 2.0
}

/// Area enclosed by a closed ring given in degrees, in `unit` squared
pub fn spherical_area(ring: &[Point], unit: DistanceUnit) -> f64 {
    let radius = unit.earth_radius();
    spherical_excess(ring).abs() * radius * radius
}
