//! Coordinate handling for geospatial data
//!
//! This module provides the coordinate primitives, the registry of
//! coordinate reference systems and the transformations between them.

mod bbox;
mod point;
mod transform;
pub mod crs;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::{Coord, Point};
pub use self::transform::{utm_epsg_for, CoordinateTransformer};
pub use self::crs::{Crs, CrsRegistry};
