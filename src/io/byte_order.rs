//! Byte order handling for WKB records
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading and writing
//! binary geometry data.

use byteorder::{BigEndian, ByteOrder as Endianness, LittleEndian, ReadBytesExt};
use std::io::{Read, Result};

use crate::geometry::errors::{GeometryResult, WkbDecodeError};

/// Represents the byte order of a WKB record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Little-endian byte order (flag 1, NDR)
    #[default]
    LittleEndian,
    /// Big-endian byte order (flag 0, XDR)
    BigEndian,
}

impl ByteOrder {
    /// Resolves the byte order from the leading flag byte of a record
    pub fn from_flag(flag: u8) -> GeometryResult<Self> {
        match flag {
            0 => Ok(ByteOrder::BigEndian),
            1 => Ok(ByteOrder::LittleEndian),
            _ => Err(WkbDecodeError::InvalidByteOrder(flag).into()),
        }
    }

    /// The flag byte written at the start of a record
    pub fn flag(&self) -> u8 {
        match self {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => 1,
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (NDR)",
            ByteOrder::BigEndian => "Big Endian (XDR)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32>;

    /// Read an f64 value
    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64>;

    /// Append a u32 value
    fn write_u32(&self, out: &mut Vec<u8>, value: u32);

    /// Append an f64 value
    fn write_f64(&self, out: &mut Vec<u8>, value: f64);
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<LittleEndian>()
    }

    fn write_u32(&self, out: &mut Vec<u8>, value: u32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, value);
        out.extend_from_slice(&buf);
    }

    fn write_f64(&self, out: &mut Vec<u8>, value: f64) {
        let mut buf = [0u8; 8];
        LittleEndian::write_f64(&mut buf, value);
        out.extend_from_slice(&buf);
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<BigEndian>()
    }

    fn write_u32(&self, out: &mut Vec<u8>, value: u32) {
        let mut buf = [0u8; 4];
        BigEndian::write_u32(&mut buf, value);
        out.extend_from_slice(&buf);
    }

    fn write_f64(&self, out: &mut Vec<u8>, value: f64) {
        let mut buf = [0u8; 8];
        BigEndian::write_f64(&mut buf, value);
        out.extend_from_slice(&buf);
    }
}
