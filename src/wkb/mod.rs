//! Well-Known Binary codec
//!
//! Records start with a byte order flag (0 big-endian, 1 little-endian)
//! followed by a `u32` type code and the geometry body. Encoding always
//! produces little-endian records; decoding accepts both.

pub mod constants;
mod reader;
mod writer;
#[cfg(test)]
mod tests;

pub use reader::WkbReader;
pub use writer::WkbWriter;

use crate::coordinate::crs::Crs;
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::geometry::Geometry;

/// Encode a geometry as little-endian WKB
pub fn encode_wkb(geometry: &Geometry) -> Vec<u8> {
    WkbWriter::default().write(geometry)
}

/// Encode a geometry as lowercase hex WKB
pub fn encode_wkb_hex(geometry: &Geometry) -> String {
    hex::encode(encode_wkb(geometry))
}

/// Decode a WKB record, assigning WGS84 to every point
pub fn decode_wkb(bytes: &[u8]) -> GeometryResult<Geometry> {
    decode_wkb_with_crs(bytes, None)
}

/// Decode a WKB record, assigning `crs` (or WGS84) to every point
pub fn decode_wkb_with_crs(bytes: &[u8], crs: Option<&'static Crs>) -> GeometryResult<Geometry> {
    match crs {
        Some(crs) => WkbReader::new(crs).read(bytes),
        None => WkbReader::default().read(bytes),
    }
}

/// Decode a hex encoded WKB record
pub fn decode_wkb_hex(text: &str) -> GeometryResult<Geometry> {
    let bytes = hex::decode(text.trim())
        .map_err(|e| GeometryError::ParseError(format!("Invalid WKB hex: {}", e)))?;
    decode_wkb(&bytes)
}
