//! Bounding box structure for describing geometry extents

use super::point::Coord;
use crate::geometry::errors::{GeometryError, GeometryResult};

/// An axis-aligned bounding box (minx, miny, maxx, maxy)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a bounding box from a `[minx, miny, maxx, maxy]` array
    pub fn from_array(values: [f64; 4]) -> Self {
        BoundingBox::new(values[0], values[1], values[2], values[3])
    }

    /// Smallest box covering every coordinate, or `None` for an empty iterator
    pub fn from_coords<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);
        for coord in iter {
            bbox.min_x = bbox.min_x.min(coord.x);
            bbox.min_y = bbox.min_y.min(coord.y);
            bbox.max_x = bbox.max_x.max(coord.x);
            bbox.max_y = bbox.max_y.max(coord.y);
        }
        Some(bbox)
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> GeometryResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeometryError::ParseError(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let mut values = [0.0; 4];
        for (value, part) in values.iter_mut().zip(parts.iter()) {
            *value = part.trim().parse::<f64>()
                .map_err(|_| GeometryError::ParseError(format!("Invalid bounding box value: {}", part)))?;
        }

        Ok(BoundingBox::from_array(values))
    }

    /// The box as `[minx, miny, maxx, maxy]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> Coord {
        Coord::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a coordinate (edges included)
    pub fn contains(&self, coord: &Coord) -> bool {
        coord.x >= self.min_x && coord.x <= self.max_x &&
            coord.y >= self.min_y && coord.y <= self.max_y
    }

    /// Smallest box covering both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}
