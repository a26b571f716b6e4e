//! Great-circle distance and location-bias helpers.

use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lng = (b.lng() - a.lng()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    // rounding can push h just past 1 near antipodes
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Rectangular bias sent to the autocomplete provider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationBias {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LocationBias {
    /// A box of `half_span_deg` on every side of `center`, clamped to valid ranges.
    pub fn around(center: Coordinates, half_span_deg: f64) -> Self {
        Self {
            south: (center.lat() - half_span_deg).max(-90.0),
            west: (center.lng() - half_span_deg).max(-180.0),
            north: (center.lat() + half_span_deg).min(90.0),
            east: (center.lng() + half_span_deg).min(180.0),
        }
    }

    /// Google's `rectangle:south,west|north,east` form.
    pub fn to_param(&self) -> String {
        format!(
            "rectangle:{},{}|{},{}",
            self.south, self.west, self.north, self.east
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coords(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn known_distance() {
        // Bengaluru MG Road to Kempegowda airport, roughly 27 km
        let d = haversine_km(coords(12.9756, 77.6067), coords(13.1986, 77.7066));
        assert!((d - 27.1).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn bias_box_clamps_at_poles() {
        let bias = LocationBias::around(coords(89.95, 179.95), 0.1);
        assert_eq!(bias.north, 90.0);
        assert_eq!(bias.east, 180.0);
        assert!((bias.south - 89.85).abs() < 1e-9);
    }

    #[test]
    fn bias_param_format() {
        let bias = LocationBias::around(coords(10.0, 20.0), 0.5);
        assert_eq!(bias.to_param(), "rectangle:9.5,19.5|10.5,20.5");
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let a = coords(lat, lng);
            prop_assert_eq!(haversine_km(a, a), 0.0);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0, lng1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lng2 in -180.0f64..=180.0,
        ) {
            let a = coords(lat1, lng1);
            let b = coords(lat2, lng2);
            prop_assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
        }
    }
}
