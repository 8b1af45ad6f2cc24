//! Planar computational geometry over point sequences

use std::cmp::Ordering;

use crate::coordinate::Point;
use crate::geometry::errors::{GeometryError, GeometryResult};

/// Cross product of vectors AB and AC
///
/// Positive when A, B, C turn counter-clockwise.
pub fn cross_product(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Squared planar distance between two points
pub fn distance_squared(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Arithmetic mean of the points, in their coordinate system
pub fn mean_point(points: &[Point], operation: &str) -> GeometryResult<Point> {
    let first = points.first()
        .ok_or_else(|| GeometryError::EmptyGeometry(operation.to_string()))?;

    let n = points.len() as f64;
    let (sx, sy) = points.iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));

    Ok(Point::new(sx / n, sy / n, first.crs()))
}

/// Area-weighted (shoelace) centroid of a ring
///
/// Falls back to the mean of the vertices when the signed area is zero.
pub fn polygon_centroid(ring: &[Point]) -> GeometryResult<Point> {
    let first = ring.first()
        .ok_or_else(|| GeometryError::EmptyGeometry("centroid".to_string()))?;

    let n = ring.len();
    let mut area_sum = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for i in 0..n {
        let p0 = &ring[i];
        let p1 = &ring[(i + 1) % n];

        let area_term = p0.x * p1.y - p1.x * p0.y;
        area_sum += area_term;
        cx += (p0.x + p1.x) * area_term;
        cy += (p0.y + p1.y) * area_term;
    }

    let area = area_sum / 2.0;
    if area == 0.0 {
        return mean_point(ring, "centroid");
    }

    Ok(Point::new(cx / (6.0 * area), cy / (6.0 * area), first.crs()))
}

/// Convex hull of a point set (Graham scan)
///
/// # Arguments
/// * `points` - Input points; at least three are required
///
/// # Returns
/// Hull vertices in counter-clockwise order starting at the lowest point,
/// without a closing duplicate
pub fn convex_hull(points: &[Point]) -> GeometryResult<Vec<Point>> {
    if points.len() < 3 {
        return Err(GeometryError::EmptyGeometry("convex hull".to_string()));
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeometryError::GenericError(
            "Convex hull requires finite coordinates".to_string()));
    }

    // Lowest y, ties broken by lowest x
    let mut pivot = points[0];
    for point in points {
        if point.y < pivot.y || (point.y == pivot.y && point.x < pivot.x) {
            pivot = *point;
        }
    }

    let mut sorted: Vec<Point> = points.iter()
        .filter(|p| p.x != pivot.x || p.y != pivot.y)
        .copied()
        .collect();
    if sorted.is_empty() {
        return Err(GeometryError::EmptyGeometry("convex hull".to_string()));
    }

    sorted.sort_by(|a, b| {
        let cp = cross_product(&pivot, a, b);
        if cp > 0.0 {
            Ordering::Less
        } else if cp < 0.0 {
            Ordering::Greater
        } else {
            distance_squared(&pivot, a)
                .partial_cmp(&distance_squared(&pivot, b))
                .unwrap_or(Ordering::Equal)
        }
    });

    let mut hull = vec![pivot, sorted[0]];
    for point in &sorted[1..] {
        while hull.len() >= 2 &&
            cross_product(&hull[hull.len() - 2], &hull[hull.len() - 1], point) <= 0.0 {
            hull.pop();
        }
        hull.push(*point);
    }

    Ok(hull)
}

/// Even-odd ray casting test
///
/// Points exactly on the boundary land on whichever side the arithmetic
/// puts them; that result is implementation-defined.
pub fn point_in_polygon(point: &Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &ring[i];
        let pj = &ring[j];
        if (pi.y > point.y) != (pj.y > point.y) &&
            point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether segments (p1, p2) and (q1, q2) properly cross
pub fn segments_intersect(p1: &Point, p2: &Point, q1: &Point, q2: &Point) -> bool {
    let o1 = cross_product(p1, p2, q1);
    let o2 = cross_product(p1, p2, q2);
    let o3 = cross_product(q1, q2, p1);
    let o4 = cross_product(q1, q2, p2);

    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

/// Whether two rings intersect
///
/// Only consecutive vertices form edges, so both rings must already be
/// closed. One ring lying entirely inside the other counts as intersecting.
pub fn polygons_intersect(a: &[Point], b: &[Point]) -> bool {
    let (Some(a_first), Some(b_first)) = (a.first(), b.first()) else {
        return false;
    };

    for edge_a in a.windows(2) {
        for edge_b in b.windows(2) {
            if segments_intersect(&edge_a[0], &edge_a[1], &edge_b[0], &edge_b[1]) {
                return true;
            }
        }
    }

    point_in_polygon(b_first, a) || point_in_polygon(a_first, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::wgs84(x, y)).collect()
    }

    fn square() -> Vec<Point> {
        points(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)])
    }

    #[test]
    fn test_point_in_square() {
        let ring = square();
        assert!(point_in_polygon(&Point::wgs84(5.0, 5.0), &ring));
        assert!(!point_in_polygon(&Point::wgs84(15.0, 15.0), &ring));
        assert!(!point_in_polygon(&Point::wgs84(-1.0, 5.0), &ring));
        assert!(!point_in_polygon(&Point::wgs84(5.0, 5.0), &[]));
    }

    #[test]
    fn test_convex_hull_drops_interior_points() {
        let input = points(&[
            (0.0, 0.0), (4.0, 0.0), (2.0, 1.0), (4.0, 4.0),
            (1.0, 2.0), (0.0, 4.0), (2.0, 3.0), (0.0, 0.0),
        ]);
        let hull = convex_hull(&input).unwrap();

        let expected = points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_eq!(hull, expected);

        let n = hull.len();
        for i in 0..n {
            let cp = cross_product(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]);
            assert!(cp > 0.0, "hull not convex at vertex {}", i);
        }
    }

    #[test]
    fn test_convex_hull_collinear_points_keep_farthest() {
        let input = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
        let hull = convex_hull(&input).unwrap();
        assert_eq!(hull, points(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]));
    }

    #[test]
    fn test_convex_hull_needs_three_points() {
        assert!(convex_hull(&points(&[(0.0, 0.0), (1.0, 1.0)])).is_err());
        assert!(convex_hull(&points(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)])).is_err());
    }

    #[test]
    fn test_polygon_centroid() {
        let centroid = polygon_centroid(&square()).unwrap();
        assert!((centroid.x - 5.0).abs() < 1e-12);
        assert!((centroid.y - 5.0).abs() < 1e-12);

        // Zero signed area falls back to the vertex mean
        let flat = points(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);
        let centroid = polygon_centroid(&flat).unwrap();
        assert_eq!((centroid.x, centroid.y), (2.0, 0.0));

        assert!(polygon_centroid(&[]).is_err());
    }

    #[test]
    fn test_polygons_intersect() {
        let a = square();
        let crossing = points(&[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0), (5.0, 5.0)]);
        let inner = points(&[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0), (2.0, 2.0)]);
        let apart = points(&[(20.0, 20.0), (30.0, 20.0), (30.0, 30.0), (20.0, 20.0)]);

        assert!(polygons_intersect(&a, &crossing));
        assert!(polygons_intersect(&a, &inner));
        assert!(polygons_intersect(&inner, &a));
        assert!(!polygons_intersect(&a, &apart));
        assert!(!polygons_intersect(&a, &[]));
    }

    #[test]
    fn test_segments_touching_at_endpoint_do_not_cross() {
        let p = points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (2.0, 0.0)]);
        assert!(!segments_intersect(&p[0], &p[1], &p[2], &p[3]));

        let q = points(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)]);
        assert!(segments_intersect(&q[0], &q[1], &q[2], &q[3]));
    }
}
