//! WKT parsing
//!
//! Keywords are case-sensitive. Every parsed point is placed in WGS84.
//! Collections may nest at most `MAX_NESTING_DEPTH` levels deep.

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::coordinate::crs;
use crate::coordinate::Coord;
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::geometry::{Geometry, GeometryCollection, LineString, MultiPoint, Polygon};

lazy_static! {
    static ref RING_SEPARATOR: Regex = Regex::new(r"\)\s*,\s*\(").unwrap();
}

/// Deepest GEOMETRYCOLLECTION nesting accepted
pub const MAX_NESTING_DEPTH: usize = 64;

fn parse_error(message: String) -> GeometryError {
    GeometryError::ParseError(message)
}

/// Parse a WKT geometry
///
/// # Arguments
/// * `text` - WKT such as `POINT (30 10)` or `POLYGON ((0 0, 1 0, 1 1, 0 0))`
///
/// # Returns
/// The geometry in WGS84, or a `ParseError` naming the offending input
pub fn parse_wkt(text: &str) -> GeometryResult<Geometry> {
    parse_wkt_at(text, 0)
}

/// Parse a geometry nested inside `depth` collections
fn parse_wkt_at(text: &str, depth: usize) -> GeometryResult<Geometry> {
    let text = text.trim();
    let keyword_len = text.find(|c: char| !c.is_ascii_uppercase()).unwrap_or(text.len());
    let (keyword, rest) = text.split_at(keyword_len);

    let geometry = match keyword {
        "POINT" => match body(rest, text)? {
            Some(inner) => Geometry::Point(parse_coord(inner)?.to_point()),
            None => return Err(parse_error(format!("Empty point is not supported: '{}'", text))),
        },
        "LINESTRING" => {
            let coords = match body(rest, text)? {
                Some(inner) => parse_coord_list(inner)?,
                None => Vec::new(),
            };
            Geometry::LineString(LineString::from_coords(&coords, crs::wgs84()))
        }
        "POLYGON" => {
            let coords = match body(rest, text)? {
                Some(inner) => parse_rings(inner, text)?,
                None => Vec::new(),
            };
            Geometry::Polygon(Polygon::from_coords(&coords, crs::wgs84()))
        }
        "MULTIPOINT" => {
            let coords = match body(rest, text)? {
                Some(inner) => parse_multi_point(inner)?,
                None => Vec::new(),
            };
            Geometry::MultiPoint(MultiPoint::from_coords(&coords, crs::wgs84()))
        }
        "GEOMETRYCOLLECTION" => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(parse_error(format!(
                    "Geometry collections nested deeper than {} levels", MAX_NESTING_DEPTH)));
            }
            let members = match body(rest, text)? {
                Some(inner) => split_top_level(inner, text)?
                    .into_iter()
                    .map(|member| parse_wkt_at(member, depth + 1))
                    .collect::<GeometryResult<Vec<_>>>()?,
                None => Vec::new(),
            };
            Geometry::GeometryCollection(GeometryCollection::new(members))
        }
        _ => return Err(parse_error(format!("Invalid geometry type in '{}'", text))),
    };

    debug!("Parsed WKT {} with {} elements", geometry.kind(), geometry.len());
    Ok(geometry)
}

/// Text between the outer parentheses, or `None` for `EMPTY`
fn body<'a>(rest: &'a str, text: &str) -> GeometryResult<Option<&'a str>> {
    let rest = rest.trim();
    if rest == "EMPTY" {
        return Ok(None);
    }

    rest.strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .map(Some)
        .ok_or_else(|| parse_error(format!("Expected parenthesised coordinates in '{}'", text)))
}

/// Parse a whitespace separated `x y` pair
fn parse_coord(text: &str) -> GeometryResult<Coord> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(parse_error(format!("Expected 'x y' coordinate, got '{}'", text.trim())));
    }

    let x = parts[0].parse::<f64>()
        .map_err(|_| parse_error(format!("Invalid x coordinate '{}'", parts[0])))?;
    let y = parts[1].parse::<f64>()
        .map_err(|_| parse_error(format!("Invalid y coordinate '{}'", parts[1])))?;

    Ok(Coord::new(x, y))
}

fn parse_coord_list(text: &str) -> GeometryResult<Vec<Coord>> {
    text.split(',').map(parse_coord).collect()
}

/// Parse a ring list, concatenating the points of every ring
fn parse_rings(inner: &str, text: &str) -> GeometryResult<Vec<Coord>> {
    let rings = inner.trim()
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(|| parse_error(format!("Expected parenthesised ring in '{}'", text)))?;

    let parts: Vec<&str> = RING_SEPARATOR.split(rings).collect();
    if parts.len() > 1 {
        warn!("Polygon has {} rings; flattening them into a single ring", parts.len());
    }

    let mut coords = Vec::new();
    for ring in parts {
        coords.extend(parse_coord_list(ring)?);
    }
    Ok(coords)
}

/// Accepts both `(1 2), (3 4)` and `1 2, 3 4`
fn parse_multi_point(inner: &str) -> GeometryResult<Vec<Coord>> {
    inner.split(',')
        .map(|item| {
            let item = item.trim();
            let item = item.strip_prefix('(')
                .and_then(|i| i.strip_suffix(')'))
                .unwrap_or(item);
            parse_coord(item)
        })
        .collect()
}

/// Split on commas that are not nested inside parentheses
fn split_top_level<'a>(inner: &'a str, text: &str) -> GeometryResult<Vec<&'a str>> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(parse_error(format!("Unbalanced parentheses in '{}'", text)));
                }
            }
            ',' if depth == 0 => {
                parts.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(parse_error(format!("Unbalanced parentheses in '{}'", text)));
    }
    parts.push(inner[start..].trim());
    Ok(parts)
}
