//! WKB geometry type codes

/// Point record
pub const WKB_POINT: u32 = 1;
/// LineString record
pub const WKB_LINE_STRING: u32 = 2;
/// Polygon record
pub const WKB_POLYGON: u32 = 3;
/// MultiPoint record
pub const WKB_MULTI_POINT: u32 = 4;
/// GeometryCollection record
pub const WKB_GEOMETRY_COLLECTION: u32 = 7;

/// Byte order flag plus type code
pub const HEADER_SIZE: usize = 5;
/// One x, y pair of f64 values
pub const COORD_SIZE: usize = 16;

/// Deepest GeometryCollection nesting the reader accepts
pub const MAX_NESTING_DEPTH: usize = 64;

/// Human readable name of a type code
pub fn type_name(code: u32) -> &'static str {
    match code {
        WKB_POINT => "Point",
        WKB_LINE_STRING => "LineString",
        WKB_POLYGON => "Polygon",
        WKB_MULTI_POINT => "MultiPoint",
        WKB_GEOMETRY_COLLECTION => "GeometryCollection",
        _ => "Unknown",
    }
}
