//! Coordinate utility functions
//!
//! Utilities for reading loosely formatted coordinate pairs, the fallback
//! used when text is not WKT.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::Point;
use crate::geometry::errors::{GeometryError, GeometryResult};

const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

lazy_static! {
    static ref BARE_PAIR: Regex = Regex::new(&format!(
        r"^\s*(\()?\s*({n})\s*(?:,\s*|\s+)({n})\s*(\))?\s*$", n = NUMBER
    )).unwrap();
}

/// Parse a bare coordinate pair into a WGS84 point
///
/// Accepted forms are `x,y`, `x, y`, `(x,y)`, `(x, y)` and `x y`.
///
/// # Arguments
/// * `text` - The coordinate text, longitude first
///
/// # Returns
/// A WGS84 point or a `ParseError` naming the text
pub fn parse_bare_coords(text: &str) -> GeometryResult<Point> {
    let unable = || GeometryError::ParseError(format!("Unable to parse coordinates: '{}'", text));

    let captures = BARE_PAIR.captures(text).ok_or_else(unable)?;
    if captures.get(1).is_some() != captures.get(4).is_some() {
        return Err(unable());
    }

    let x = captures[2].parse::<f64>().map_err(|_| unable())?;
    let y = captures[3].parse::<f64>().map_err(|_| unable())?;

    debug!("Parsed bare coordinates: x/lon={}, y/lat={}", x, y);
    Ok(Point::wgs84(x, y))
}
