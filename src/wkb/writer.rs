//! WKB encoding

use super::constants::*;
use crate::coordinate::Point;
use crate::geometry::Geometry;
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};

/// Writer for WKB geometry records
#[derive(Debug, Default)]
pub struct WkbWriter {
    byte_order: ByteOrder,
}

impl WkbWriter {
    /// Create a writer emitting records in the given byte order
    pub fn new(byte_order: ByteOrder) -> Self {
        WkbWriter { byte_order }
    }

    /// Byte order of emitted records
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Encode a geometry into a new buffer
    pub fn write(&self, geometry: &Geometry) -> Vec<u8> {
        let handler = self.byte_order.create_handler();
        let mut out = Vec::with_capacity(Self::encoded_size(geometry));
        self.write_geometry(&mut out, handler.as_ref(), geometry);
        out
    }

    fn write_header(&self, out: &mut Vec<u8>, handler: &dyn ByteOrderHandler, code: u32) {
        out.push(self.byte_order.flag());
        handler.write_u32(out, code);
    }

    fn write_coord(out: &mut Vec<u8>, handler: &dyn ByteOrderHandler, point: &Point) {
        handler.write_f64(out, point.x);
        handler.write_f64(out, point.y);
    }

    fn write_points(out: &mut Vec<u8>, handler: &dyn ByteOrderHandler, points: &[Point]) {
        handler.write_u32(out, points.len() as u32);
        for point in points {
            Self::write_coord(out, handler, point);
        }
    }

    fn write_geometry(&self, out: &mut Vec<u8>, handler: &dyn ByteOrderHandler, geometry: &Geometry) {
        match geometry {
            Geometry::Point(p) => {
                self.write_header(out, handler, WKB_POINT);
                Self::write_coord(out, handler, p);
            }
            Geometry::LineString(l) => {
                self.write_header(out, handler, WKB_LINE_STRING);
                Self::write_points(out, handler, l.points());
            }
            Geometry::Polygon(p) => {
                self.write_header(out, handler, WKB_POLYGON);
                handler.write_u32(out, 1);
                Self::write_points(out, handler, &p.closed_ring());
            }
            Geometry::MultiPoint(m) => {
                self.write_header(out, handler, WKB_MULTI_POINT);
                handler.write_u32(out, m.len() as u32);
                for point in m.points() {
                    self.write_header(out, handler, WKB_POINT);
                    Self::write_coord(out, handler, point);
                }
            }
            Geometry::GeometryCollection(gc) => {
                self.write_header(out, handler, WKB_GEOMETRY_COLLECTION);
                handler.write_u32(out, gc.len() as u32);
                for member in gc.geometries() {
                    self.write_geometry(out, handler, member);
                }
            }
        }
    }

    fn encoded_size(geometry: &Geometry) -> usize {
        match geometry {
            Geometry::Point(_) => HEADER_SIZE + COORD_SIZE,
            Geometry::LineString(l) => HEADER_SIZE + 4 + l.len() * COORD_SIZE,
            Geometry::Polygon(p) => HEADER_SIZE + 8 + (p.len() + 1) * COORD_SIZE,
            Geometry::MultiPoint(m) => HEADER_SIZE + 4 + m.len() * (HEADER_SIZE + COORD_SIZE),
            Geometry::GeometryCollection(gc) => HEADER_SIZE + 4 + gc.geometries().iter()
                .map(Self::encoded_size)
                .sum::<usize>(),
        }
    }
}
