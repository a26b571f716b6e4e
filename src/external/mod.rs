pub mod google_maps;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entities::{Coordinates, PlaceDetails, PlacePrediction},
    error::Error,
    geo::LocationBias,
};

pub use google_maps::GoogleMaps;
pub use mock::MockMaps;

#[derive(Clone, Debug, PartialEq)]
pub struct AutocompleteRequest {
    pub input: String,
    pub session_token: Uuid,
    pub country: String,
    pub types: Option<String>,
    pub bias: Option<LocationBias>,
    /// Point distances are measured from, when the provider reports them.
    pub origin: Option<Coordinates>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Directions {
    pub distance_meters: u64,
    pub duration_text: String,
    pub polyline: String,
}

#[async_trait]
pub trait PlacesProvider {
    async fn autocomplete(&self, request: AutocompleteRequest)
        -> Result<Vec<PlacePrediction>, Error>;

    async fn place_details(&self, place_id: &str, session_token: Uuid)
        -> Result<PlaceDetails, Error>;
}

#[async_trait]
pub trait RoutingProvider {
    /// Driving directions; only the first leg of the first route is used.
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Directions, Error>;
}

pub trait MapsProvider: PlacesProvider + RoutingProvider {}

impl<T: PlacesProvider + RoutingProvider> MapsProvider for T {}
