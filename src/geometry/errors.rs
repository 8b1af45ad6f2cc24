//! Custom error types for geometry processing

use std::fmt;
use std::io;

/// Reasons a WKB buffer can be rejected
#[derive(Debug, Clone, PartialEq)]
pub enum WkbDecodeError {
    /// Buffer is too short to hold the byte order flag and type code
    BufferTooShort(usize),
    /// Byte order flag is neither 0 nor 1
    InvalidByteOrder(u8),
    /// Type code does not match the variant being decoded
    UnexpectedGeometryType { expected: u32, found: u32 },
    /// Type code is not one this codec understands
    UnsupportedGeometryType(u32),
    /// Polygon record with a ring count other than one
    UnsupportedRingCount(u32),
    /// Buffer ended in the middle of a record
    TruncatedData(String),
    /// Collections nested deeper than the reader accepts
    NestingTooDeep(usize),
    /// Bytes left over after a complete record
    TrailingBytes(usize),
}

impl fmt::Display for WkbDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WkbDecodeError::BufferTooShort(len) =>
                write!(f, "WKB too short to contain type: {} bytes", len),
            WkbDecodeError::InvalidByteOrder(flag) =>
                write!(f, "Invalid byte order in WKB: {}", flag),
            WkbDecodeError::UnexpectedGeometryType { expected, found } =>
                write!(f, "Unexpected geometry type: got {}, want {}", found, expected),
            WkbDecodeError::UnsupportedGeometryType(code) =>
                write!(f, "Unsupported WKB geometry type: {}", code),
            WkbDecodeError::UnsupportedRingCount(count) =>
                write!(f, "Only single-ring polygons supported, got {}", count),
            WkbDecodeError::TruncatedData(what) =>
                write!(f, "Truncated WKB data: failed to read {}", what),
            WkbDecodeError::NestingTooDeep(limit) =>
                write!(f, "Geometry collections nested deeper than {} levels", limit),
            WkbDecodeError::TrailingBytes(count) =>
                write!(f, "{} trailing bytes after WKB record", count),
        }
    }
}

/// Geometry-specific error types
#[derive(Debug)]
pub enum GeometryError {
    /// I/O error
    IoError(io::Error),
    /// Malformed WKT or coordinate text
    ParseError(String),
    /// Malformed WKB
    DecodeError(WkbDecodeError),
    /// EPSG code not present in the registry
    CrsNotFound(u32),
    /// Points with different coordinate systems in one geometry
    CrsMismatch { expected: u32, found: u32 },
    /// Distance or area unit not recognized
    UnsupportedUnit(String),
    /// Operation needs at least one point (or more, as named)
    EmptyGeometry(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::IoError(e) => write!(f, "I/O error: {}", e),
            GeometryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeometryError::DecodeError(e) => write!(f, "WKB decode error: {}", e),
            GeometryError::CrsNotFound(epsg) => write!(f, "No such CRS: EPSG:{}", epsg),
            GeometryError::CrsMismatch { expected, found } =>
                write!(f, "CRS mismatch: expected EPSG:{}, found EPSG:{}", expected, found),
            GeometryError::UnsupportedUnit(unit) => write!(f, "Invalid unit: {} provided", unit),
            GeometryError::EmptyGeometry(op) => write!(f, "Geometry has too few points for {}", op),
            GeometryError::GenericError(msg) => write!(f, "Geometry error: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeometryError {
    fn from(error: io::Error) -> Self {
        GeometryError::IoError(error)
    }
}

impl From<WkbDecodeError> for GeometryError {
    fn from(error: WkbDecodeError) -> Self {
        GeometryError::DecodeError(error)
    }
}

impl From<String> for GeometryError {
    fn from(msg: String) -> Self {
        GeometryError::GenericError(msg)
    }
}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
