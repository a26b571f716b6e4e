use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{
    Coordinates, FareQuote, Preferences, QuoteRequest, RoutePath, SearchResults, TripPlan,
};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    fn new_session(&self) -> Uuid;
    fn end_session(&self, session_token: Uuid);
    /// `Ok(None)` when a newer search for the same session superseded this one.
    async fn search_places(
        &self,
        session_token: Uuid,
        query: String,
        location: Option<Coordinates>,
    ) -> Result<Option<SearchResults>, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(&self, request: QuoteRequest) -> Result<FareQuote, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn create_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoutePath, Error>;
}

#[async_trait]
pub trait TripAPI {
    async fn plan_trip(&self, request: QuoteRequest) -> Result<TripPlan, Error>;
}

#[async_trait]
pub trait PreferencesAPI {
    async fn find_preferences(&self) -> Result<Preferences, Error>;
    async fn update_preferences(&self, preferences: Preferences) -> Result<Preferences, Error>;
}

pub trait API: PlaceAPI + QuoteAPI + RouteAPI + TripAPI + PreferencesAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
