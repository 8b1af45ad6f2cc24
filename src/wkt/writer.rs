//! WKT formatting
//!
//! Coordinates use the shortest representation that parses back to the
//! same `f64`.

use crate::coordinate::Point;
use crate::geometry::Geometry;

fn coord_text(point: &Point) -> String {
    format!("{} {}", point.x, point.y)
}

fn coord_list(points: &[Point]) -> String {
    points.iter().map(coord_text).collect::<Vec<_>>().join(", ")
}

/// Format a geometry as WKT
pub fn format_wkt(geometry: &Geometry) -> String {
    if geometry.is_empty() {
        return format!("{} EMPTY", keyword(geometry));
    }

    match geometry {
        Geometry::Point(p) => format!("POINT ({})", coord_text(p)),
        Geometry::LineString(l) => format!("LINESTRING ({})", coord_list(l.points())),
        Geometry::Polygon(p) => format!("POLYGON (({}))", coord_list(p.points())),
        Geometry::MultiPoint(m) => {
            let members: Vec<String> = m.points().iter()
                .map(|p| format!("({})", coord_text(p)))
                .collect();
            format!("MULTIPOINT ({})", members.join(", "))
        }
        Geometry::GeometryCollection(gc) => {
            let members: Vec<String> = gc.geometries().iter().map(format_wkt).collect();
            format!("GEOMETRYCOLLECTION ({})", members.join(", "))
        }
    }
}

fn keyword(geometry: &Geometry) -> &'static str {
    match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
    }
}
