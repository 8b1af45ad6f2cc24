//! Tests for the WKB reader and writer

extern crate std;

use super::test_utils::{big_endian_line_string, finite_values, nested_collections, point_header};
use crate::coordinate::crs;
use crate::coordinate::{Coord, Point};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryError, LineString, MultiPoint, Polygon, WkbDecodeError,
};
use crate::io::byte_order::ByteOrder;
use crate::wkb::constants::MAX_NESTING_DEPTH;
use crate::wkb::{self, WkbReader, WkbWriter};

fn coords(values: &[(f64, f64)]) -> Vec<Coord> {
    values.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

fn decode_error(result: Result<impl std::fmt::Debug, GeometryError>) -> WkbDecodeError {
    match result {
        Err(GeometryError::DecodeError(e)) => e,
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[test]
fn test_point_bytes_are_exact() {
    let point = Geometry::from(Point::wgs84(30.0, 10.0));
    std::assert_eq!(
        wkb::encode_wkb_hex(&point),
        "01010000000000000000003e400000000000002440"
    );
    std::assert_eq!(wkb::encode_wkb(&point).len(), 21);
}

#[test]
fn test_multi_point_uses_nested_point_records() {
    let multi = Geometry::from(MultiPoint::from_coords(&coords(&[(1.0, 2.0), (3.0, 4.0)]), crs::wgs84()));
    std::assert_eq!(
        wkb::encode_wkb_hex(&multi),
        "0104000000020000000101000000000000000000f03f0000000000000040\
         010100000000000000000008400000000000001040"
    );
    std::assert_eq!(wkb::decode_wkb(&wkb::encode_wkb(&multi)).unwrap(), multi);
}

#[test]
fn test_round_trips() {
    let line = Geometry::from(LineString::from_coords(
        &coords(&[(-0.5, 51.25), (2.35, 48.85), (13.4, 52.52)]),
        crs::wgs84(),
    ));
    let polygon = Geometry::from(Polygon::from_coords(
        &coords(&[(30.0, 10.0), (40.0, 40.0), (20.0, 40.0), (10.0, 20.0), (30.0, 10.0)]),
        crs::wgs84(),
    ));
    let collection = Geometry::from(GeometryCollection::new(vec![
        Geometry::from(Point::wgs84(1.5, -2.5)),
        line.clone(),
        polygon.clone(),
    ]));

    for geometry in [line, polygon, collection] {
        let decoded = wkb::decode_wkb(&wkb::encode_wkb(&geometry)).unwrap();
        std::assert_eq!(decoded, geometry);
    }
}

#[test]
fn test_generated_coordinates_round_trip_bit_exact() {
    let values = finite_values(400);
    let pairs: Vec<Coord> = values.chunks(2)
        .map(|pair| Coord::new(pair[0], pair[1]))
        .collect();

    let line = Geometry::from(LineString::from_coords(&pairs, crs::wgs84()));
    let multi = Geometry::from(MultiPoint::from_coords(&pairs, crs::wgs84()));
    let mut geometries = vec![line, multi];
    geometries.extend(pairs.iter().map(|c| Geometry::from(Point::wgs84(c.x, c.y))));

    for geometry in geometries {
        let decoded = wkb::decode_wkb(&wkb::encode_wkb(&geometry)).unwrap();
        std::assert_eq!(decoded.kind(), geometry.kind());
        std::assert_eq!(decoded.len(), geometry.len());
        for (a, b) in decoded.coords().iter().zip(geometry.coords()) {
            std::assert_eq!(a.x.to_bits(), b.x.to_bits());
            std::assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}

#[test]
fn test_nesting_limit() {
    let decoded = wkb::decode_wkb(&nested_collections(MAX_NESTING_DEPTH)).unwrap();
    std::assert_eq!(decoded.points(), vec![Point::wgs84(1.0, 2.0)]);

    std::assert_eq!(
        decode_error(wkb::decode_wkb(&nested_collections(MAX_NESTING_DEPTH + 1))),
        WkbDecodeError::NestingTooDeep(MAX_NESTING_DEPTH)
    );

    // Deep enough to exhaust the stack without a limit
    std::assert_eq!(
        decode_error(wkb::decode_wkb(&nested_collections(200_000))),
        WkbDecodeError::NestingTooDeep(MAX_NESTING_DEPTH)
    );
}

#[test]
fn test_trailing_bytes_are_rejected() {
    let mut bytes = wkb::encode_wkb(&Geometry::from(Point::wgs84(30.0, 10.0)));
    bytes.extend_from_slice(&[0, 0, 0]);

    std::assert_eq!(decode_error(wkb::decode_wkb(&bytes)), WkbDecodeError::TrailingBytes(3));
    std::assert_eq!(
        decode_error(WkbReader::default().decode_point(&bytes)),
        WkbDecodeError::TrailingBytes(3)
    );

    let mut line = big_endian_line_string(&[(1.0, 2.0)]);
    line.push(0);
    std::assert_eq!(
        decode_error(WkbReader::default().decode_line_string(&line)),
        WkbDecodeError::TrailingBytes(1)
    );
}

#[test]
fn test_open_polygon_is_closed_on_encode() {
    let open = Polygon::from_coords(&coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]), crs::wgs84());
    let bytes = wkb::encode_wkb(&Geometry::from(open));

    // header, ring count, point count, four points
    std::assert_eq!(bytes.len(), 5 + 4 + 4 + 4 * 16);
    let decoded = WkbReader::default().decode_polygon(&bytes).unwrap();
    std::assert_eq!(decoded.len(), 4);
    std::assert!(decoded.is_closed());
}

#[test]
fn test_decoded_points_receive_requested_crs() {
    let point = Geometry::from(Point::wgs84(500000.0, 4649776.0));
    let bytes = wkb::encode_wkb(&point);

    let utm = crs::crs_by_epsg(32631).unwrap();
    let decoded = wkb::decode_wkb_with_crs(&bytes, Some(utm)).unwrap();
    std::assert_eq!(decoded.crs().epsg, 32631);
    std::assert_eq!(wkb::decode_wkb(&bytes).unwrap().crs().epsg, 4326);
}

#[test]
fn test_big_endian_input_is_accepted() {
    let bytes = big_endian_line_string(&[(1.0, 2.0), (3.0, 4.0)]);
    let line = WkbReader::default().decode_line_string(&bytes).unwrap();

    std::assert_eq!(line.len(), 2);
    std::assert_eq!(line.points()[1].coord(), Coord::new(3.0, 4.0));
}

#[test]
fn test_big_endian_writer() {
    let writer = WkbWriter::new(ByteOrder::BigEndian);
    let line = Geometry::from(LineString::from_coords(&coords(&[(1.0, 2.0), (3.0, 4.0)]), crs::wgs84()));

    std::assert_eq!(writer.write(&line), big_endian_line_string(&[(1.0, 2.0), (3.0, 4.0)]));
}

#[test]
fn test_short_buffer() {
    std::assert_eq!(decode_error(wkb::decode_wkb(&[1, 1, 0])), WkbDecodeError::BufferTooShort(3));
    std::assert_eq!(decode_error(wkb::decode_wkb(&[])), WkbDecodeError::BufferTooShort(0));
}

#[test]
fn test_invalid_byte_order() {
    std::assert_eq!(
        decode_error(wkb::decode_wkb(&[2, 1, 0, 0, 0])),
        WkbDecodeError::InvalidByteOrder(2)
    );
}

#[test]
fn test_type_mismatch() {
    let line_bytes = big_endian_line_string(&[(0.0, 0.0)]);
    std::assert_eq!(
        decode_error(WkbReader::default().decode_point(&line_bytes)),
        WkbDecodeError::UnexpectedGeometryType { expected: 1, found: 2 }
    );
    std::assert_eq!(
        decode_error(wkb::decode_wkb(&[1, 9, 0, 0, 0])),
        WkbDecodeError::UnsupportedGeometryType(9)
    );
}

#[test]
fn test_truncated_coordinates() {
    let mut bytes = point_header();
    bytes.extend_from_slice(&30.0f64.to_le_bytes());
    std::assert!(matches!(
        decode_error(wkb::decode_wkb(&bytes)),
        WkbDecodeError::TruncatedData(_)
    ));

    // A count larger than the remaining bytes is rejected before reading
    let mut bytes = big_endian_line_string(&[(1.0, 2.0), (3.0, 4.0)]);
    bytes.truncate(bytes.len() - 8);
    std::assert!(matches!(
        decode_error(wkb::decode_wkb(&bytes)),
        WkbDecodeError::TruncatedData(_)
    ));
}

#[test]
fn test_unsupported_ring_count() {
    let bytes = vec![1, 3, 0, 0, 0, 2, 0, 0, 0];
    std::assert_eq!(
        decode_error(WkbReader::default().decode_polygon(&bytes)),
        WkbDecodeError::UnsupportedRingCount(2)
    );
}

#[test]
fn test_hex_helpers() {
    let point = wkb::decode_wkb_hex("01010000000000000000003e400000000000002440").unwrap();
    std::assert_eq!(point, Geometry::from(Point::wgs84(30.0, 10.0)));

    std::assert!(matches!(wkb::decode_wkb_hex("zz"), Err(GeometryError::ParseError(_))));
}
