use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

/// A raw autocomplete prediction, before details are resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacePrediction {
    pub place_id: String,
    pub primary_text: String,
    pub secondary_text: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub distance_meters: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub coordinates: Coordinates,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub primary_text: String,
    pub secondary_text: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub types: Vec<String>,
    pub has_distance_hint: bool,
    pub score: f64,
    pub distance_km: Option<f64>,
}

impl PlaceCandidate {
    pub fn new(prediction: PlacePrediction, details: Option<PlaceDetails>) -> Self {
        let (coordinates, address) = match details {
            Some(details) => (Some(details.coordinates), details.address),
            None => (None, String::new()),
        };

        Self {
            place_id: prediction.place_id,
            primary_text: prediction.primary_text,
            secondary_text: prediction.secondary_text,
            address,
            coordinates,
            types: prediction.types,
            has_distance_hint: prediction.distance_meters.is_some(),
            score: 0.0,
            distance_km: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub session_token: Uuid,
    pub generation: u64,
    pub candidates: Vec<PlaceCandidate>,
}
