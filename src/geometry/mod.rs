//! Geometry model and computational geometry
//!
//! This module provides the geometry variants, the error types shared by
//! the whole crate, and the measure and planar algorithms operating on
//! point sequences.

pub mod errors;
pub mod algorithms;
pub mod measure;
mod shape;
mod types;
mod units;
#[cfg(test)]
mod tests;

pub use errors::{GeometryError, GeometryResult, WkbDecodeError};
pub use measure::{distance, haversine, projected_distance};
pub use shape::Geometry;
pub use types::{GeometryCollection, LineString, MultiPoint, Polygon};
pub use units::DistanceUnit;
