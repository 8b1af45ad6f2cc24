pub mod io;
pub mod utils;
pub mod coordinate;
pub mod geometry;
pub mod wkt;
pub mod wkb;
pub mod commands;
pub mod api;

pub use crate::api::{parse_string_geometry, probe_is_geometry, VectorKit};

pub use coordinate::{BoundingBox, Coord, Point, CoordinateTransformer, Crs};
pub use geometry::{DistanceUnit, Geometry, GeometryCollection, GeometryError, GeometryResult, LineString, MultiPoint, Polygon};
pub use wkb::{decode_wkb, encode_wkb};
pub use wkt::{format_wkt, parse_wkt};
