//! WKB decoding
//!
//! The format carries no SRID, so every decoded point receives the CRS the
//! reader was created with. A buffer must hold exactly one record;
//! leftover bytes are rejected, as are collections nested deeper than
//! `MAX_NESTING_DEPTH`.

use std::io::Cursor;
use byteorder::ReadBytesExt;
use log::debug;

use super::constants::*;
use crate::coordinate::crs::{self, Crs};
use crate::coordinate::Point;
use crate::geometry::errors::{GeometryError, GeometryResult, WkbDecodeError};
use crate::geometry::{Geometry, GeometryCollection, LineString, MultiPoint, Polygon};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};

type Record<'a> = Cursor<&'a [u8]>;

fn truncated(what: &str) -> GeometryError {
    WkbDecodeError::TruncatedData(what.to_string()).into()
}

/// Reader for WKB geometry records
pub struct WkbReader {
    crs: &'static Crs,
}

impl Default for WkbReader {
    fn default() -> Self {
        WkbReader::new(crs::wgs84())
    }
}

impl WkbReader {
    /// Create a reader that assigns `crs` to decoded points
    pub fn new(crs: &'static Crs) -> Self {
        WkbReader { crs }
    }

    /// CRS assigned to decoded points
    pub fn crs(&self) -> &'static Crs {
        self.crs
    }

    /// Decode any supported geometry
    pub fn read(&self, bytes: &[u8]) -> GeometryResult<Geometry> {
        let mut cursor = Self::open(bytes)?;
        let (handler, code) = self.read_header(&mut cursor)?;
        let geometry = self.read_body(&mut cursor, handler.as_ref(), code, 0)?;
        Self::finish(&cursor, geometry)
    }

    /// Decode a Point record
    pub fn decode_point(&self, bytes: &[u8]) -> GeometryResult<Point> {
        let mut cursor = Self::open(bytes)?;
        let handler = self.read_expected_header(&mut cursor, WKB_POINT)?;
        let point = self.read_coord(&mut cursor, handler.as_ref())?;
        Self::finish(&cursor, point)
    }

    /// Decode a LineString record
    pub fn decode_line_string(&self, bytes: &[u8]) -> GeometryResult<LineString> {
        let mut cursor = Self::open(bytes)?;
        let handler = self.read_expected_header(&mut cursor, WKB_LINE_STRING)?;
        let points = self.read_points(&mut cursor, handler.as_ref())?;
        Self::finish(&cursor, LineString::from_points_unchecked(points))
    }

    /// Decode a single-ring Polygon record
    pub fn decode_polygon(&self, bytes: &[u8]) -> GeometryResult<Polygon> {
        let mut cursor = Self::open(bytes)?;
        let handler = self.read_expected_header(&mut cursor, WKB_POLYGON)?;
        let polygon = self.read_polygon_body(&mut cursor, handler.as_ref())?;
        Self::finish(&cursor, polygon)
    }

    /// Decode a MultiPoint record
    pub fn decode_multi_point(&self, bytes: &[u8]) -> GeometryResult<MultiPoint> {
        let mut cursor = Self::open(bytes)?;
        let handler = self.read_expected_header(&mut cursor, WKB_MULTI_POINT)?;
        let multi = self.read_multi_point_body(&mut cursor, handler.as_ref())?;
        Self::finish(&cursor, multi)
    }

    fn open(bytes: &[u8]) -> GeometryResult<Record<'_>> {
        if bytes.len() < HEADER_SIZE {
            return Err(WkbDecodeError::BufferTooShort(bytes.len()).into());
        }
        Ok(Cursor::new(bytes))
    }

    fn finish<T>(cursor: &Record<'_>, value: T) -> GeometryResult<T> {
        let left = cursor.get_ref().len().saturating_sub(cursor.position() as usize);
        if left > 0 {
            return Err(WkbDecodeError::TrailingBytes(left).into());
        }
        Ok(value)
    }

    fn read_header(&self, cursor: &mut Record<'_>) -> GeometryResult<(Box<dyn ByteOrderHandler>, u32)> {
        let flag = cursor.read_u8().map_err(|_| truncated("byte order flag"))?;

        let byte_order = ByteOrder::from_flag(flag)?;
        let handler = byte_order.create_handler();
        let code = handler.read_u32(cursor)
            .map_err(|_| truncated("geometry type"))?;

        debug!("WKB record: {} {} at offset {}",
               byte_order.name(), type_name(code), cursor.position() - HEADER_SIZE as u64);

        Ok((handler, code))
    }

    fn read_expected_header(&self, cursor: &mut Record<'_>, expected: u32) -> GeometryResult<Box<dyn ByteOrderHandler>> {
        let (handler, found) = self.read_header(cursor)?;
        if found != expected {
            return Err(WkbDecodeError::UnexpectedGeometryType { expected, found }.into());
        }
        Ok(handler)
    }

    /// Decode the body of a record; `depth` counts enclosing collections
    fn read_body(&self, cursor: &mut Record<'_>, handler: &dyn ByteOrderHandler,
                 code: u32, depth: usize) -> GeometryResult<Geometry> {
        match code {
            WKB_POINT => Ok(Geometry::Point(self.read_coord(cursor, handler)?)),
            WKB_LINE_STRING => Ok(Geometry::LineString(
                LineString::from_points_unchecked(self.read_points(cursor, handler)?),
            )),
            WKB_POLYGON => Ok(Geometry::Polygon(self.read_polygon_body(cursor, handler)?)),
            WKB_MULTI_POINT => Ok(Geometry::MultiPoint(self.read_multi_point_body(cursor, handler)?)),
            WKB_GEOMETRY_COLLECTION => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(WkbDecodeError::NestingTooDeep(MAX_NESTING_DEPTH).into());
                }
                let count = self.read_count(cursor, handler, HEADER_SIZE, "collection size")?;
                let mut members = Vec::with_capacity(count);
                for _ in 0..count {
                    let (member_handler, member_code) = self.read_header(cursor)?;
                    members.push(self.read_body(cursor, member_handler.as_ref(), member_code, depth + 1)?);
                }
                Ok(Geometry::GeometryCollection(GeometryCollection::new(members)))
            }
            other => Err(WkbDecodeError::UnsupportedGeometryType(other).into()),
        }
    }

    fn read_coord(&self, cursor: &mut Record<'_>, handler: &dyn ByteOrderHandler) -> GeometryResult<Point> {
        let x = handler.read_f64(cursor).map_err(|_| truncated("x coordinate"))?;
        let y = handler.read_f64(cursor).map_err(|_| truncated("y coordinate"))?;
        Ok(Point::new(x, y, self.crs))
    }

    /// Read an element count, rejecting counts the remaining bytes cannot hold
    fn read_count(&self, cursor: &mut Record<'_>, handler: &dyn ByteOrderHandler,
                  element_size: usize, what: &str) -> GeometryResult<usize> {
        let count = handler.read_u32(cursor).map_err(|_| truncated(what))? as usize;

        let remaining = cursor.get_ref().len().saturating_sub(cursor.position() as usize);
        if count.saturating_mul(element_size) > remaining {
            return Err(WkbDecodeError::TruncatedData(
                format!("{} elements declared by {}, {} bytes left", count, what, remaining)
            ).into());
        }
        Ok(count)
    }

    fn read_points(&self, cursor: &mut Record<'_>, handler: &dyn ByteOrderHandler) -> GeometryResult<Vec<Point>> {
        let count = self.read_count(cursor, handler, COORD_SIZE, "point count")?;
        (0..count).map(|_| self.read_coord(cursor, handler)).collect()
    }

    fn read_polygon_body(&self, cursor: &mut Record<'_>, handler: &dyn ByteOrderHandler) -> GeometryResult<Polygon> {
        let rings = handler.read_u32(cursor).map_err(|_| truncated("ring count"))?;
        match rings {
            0 => Ok(Polygon::from_points_unchecked(Vec::new())),
            1 => Ok(Polygon::from_points_unchecked(self.read_points(cursor, handler)?)),
            n => Err(WkbDecodeError::UnsupportedRingCount(n).into()),
        }
    }

    fn read_multi_point_body(&self, cursor: &mut Record<'_>, handler: &dyn ByteOrderHandler) -> GeometryResult<MultiPoint> {
        let count = self.read_count(cursor, handler, HEADER_SIZE + COORD_SIZE, "multi point size")?;
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let (point_handler, code) = self.read_header(cursor)?;
            if code != WKB_POINT {
                return Err(WkbDecodeError::UnexpectedGeometryType { expected: WKB_POINT, found: code }.into());
            }
            points.push(self.read_coord(cursor, point_handler.as_ref())?);
        }
        Ok(MultiPoint::from_points_unchecked(points))
    }
}
