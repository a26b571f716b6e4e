use serde::{Deserialize, Serialize};

use crate::error::{invalid_coordinates_error, Error};

/// A latitude/longitude pair in decimal degrees.
///
/// Only constructible through [`Coordinates::new`] (or deserialization, which
/// goes through the same check), so every value in hand is in range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLng")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<LatLng> for Coordinates {
    type Error = Error;

    fn try_from(value: LatLng) -> Result<Self, Self::Error> {
        Coordinates::new(value.lat, value.lng)
    }
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(invalid_coordinates_error(lat, lng));
        }

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(invalid_coordinates_error(lat, lng));
        }

        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

impl From<Coordinates> for geo_types::Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        geo_types::Coord {
            x: coordinates.lng,
            y: coordinates.lat,
        }
    }
}
