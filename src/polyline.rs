//! Encoded polyline format used by routing providers.
//!
//! Each point is stored as the delta from the previous point, scaled by 1e5,
//! zig-zag encoded and split into 5-bit groups offset by 63.

use crate::entities::Coordinates;
use crate::error::{decode_error, Error};

const PRECISION: f64 = 1e5;
const OFFSET: u8 = 63;
const CONTINUATION: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;
// 32-bit values need at most 7 groups
const MAX_SHIFT: u32 = 35;

pub fn decode(encoded: &str) -> Result<Vec<Coordinates>, Error> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        lat += next_delta(bytes, &mut index)?;

        if index >= bytes.len() {
            return Err(decode_error("point is missing its longitude"));
        }
        lng += next_delta(bytes, &mut index)?;

        let point = Coordinates::new(lat as f64 / PRECISION, lng as f64 / PRECISION)
            .map_err(|_| decode_error("point out of range"))?;
        points.push(point);
    }

    Ok(points)
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, Error> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes
            .get(*index)
            .ok_or_else(|| decode_error("truncated input"))?;
        *index += 1;

        if !(OFFSET..=b'~').contains(&byte) {
            return Err(decode_error("invalid character"));
        }

        let chunk = (byte - OFFSET) as i64;
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk < CONTINUATION {
            break;
        }

        if shift >= MAX_SHIFT {
            return Err(decode_error("value too long"));
        }
    }

    if result & 1 == 1 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}

pub fn encode(points: &[Coordinates]) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.lat() * PRECISION).round() as i64;
        let lng = (point.lng() * PRECISION).round() as i64;

        push_value(&mut encoded, lat - prev_lat);
        push_value(&mut encoded, lng - prev_lng);

        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

fn push_value(out: &mut String, delta: i64) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= CONTINUATION {
        out.push((((value & CHUNK_MASK) | CONTINUATION) as u8 + OFFSET) as char);
        value >>= 5;
    }

    out.push((value as u8 + OFFSET) as char);
}
