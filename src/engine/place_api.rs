use super::{scoring::rank_candidates, Engine};

use async_trait::async_trait;
use futures::future::join_all;
use uuid::Uuid;

use crate::{
    api::PlaceAPI,
    entities::{Coordinates, PlaceCandidate, SearchResults},
    error::Error,
    external::AutocompleteRequest,
    geo::{haversine_km, LocationBias},
};

impl Engine {
    fn location_bias(&self, location: Coordinates) -> LocationBias {
        let dense = self
            .search
            .dense_areas
            .iter()
            .any(|&center| haversine_km(center, location) <= self.search.dense_radius_km);

        let half_span = if dense {
            self.search.dense_bias_deg
        } else {
            self.search.sparse_bias_deg
        };

        LocationBias::around(location, half_span)
    }

    async fn fetch_candidates(
        &self,
        session_token: Uuid,
        query: &str,
        location: Option<Coordinates>,
    ) -> Vec<PlaceCandidate> {
        let request = AutocompleteRequest {
            input: query.to_string(),
            session_token,
            country: self.search.country.clone(),
            types: self.search.types.clone(),
            bias: location.map(|location| self.location_bias(location)),
            origin: location,
        };

        let predictions = match self.maps.autocomplete(request).await {
            Ok(predictions) => predictions,
            Err(err) => {
                tracing::warn!("autocomplete failed, returning no candidates: {}", err);
                return vec![];
            }
        };

        let lookups = predictions.into_iter().map(|prediction| async move {
            match self
                .maps
                .place_details(&prediction.place_id, session_token)
                .await
            {
                Ok(details) => Some(PlaceCandidate::new(prediction, Some(details))),
                Err(err) => {
                    tracing::warn!(
                        "dropping candidate {} after failed details fetch: {}",
                        prediction.place_id,
                        err
                    );
                    None
                }
            }
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }
}

#[async_trait]
impl PlaceAPI for Engine {
    fn new_session(&self) -> Uuid {
        let session_token = Uuid::new_v4();
        self.generations().insert(session_token, 0);
        session_token
    }

    fn end_session(&self, session_token: Uuid) {
        self.generations().remove(&session_token);
    }

    #[tracing::instrument(skip(self))]
    async fn search_places(
        &self,
        session_token: Uuid,
        query: String,
        location: Option<Coordinates>,
    ) -> Result<Option<SearchResults>, Error> {
        let generation = self.begin_search(session_token)?;
        let query = query.trim();

        let candidates = if query.chars().count() < self.search.min_query_len {
            vec![]
        } else {
            let candidates = self.fetch_candidates(session_token, query, location).await;
            rank_candidates(query, location, candidates, self.search.max_results)
        };

        if !self.is_current(session_token, generation) {
            tracing::info!("discarding superseded search generation {}", generation);
            return Ok(None);
        }

        Ok(Some(SearchResults {
            session_token,
            generation,
            candidates,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FareSchedule, SearchConfig},
        external::MockMaps,
        store::PreferencesStore,
    };
    use std::sync::Arc;

    fn engine(maps: MockMaps) -> Engine {
        Engine::with_provider(
            Arc::new(maps),
            FareSchedule::default(),
            SearchConfig::default(),
            PreferencesStore::new("unused.json"),
        )
    }

    fn coords(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn dense_area_gets_tight_bias() {
        let engine = engine(MockMaps::new());

        let bengaluru = engine.location_bias(coords(12.95, 77.60));
        assert!((bengaluru.north - bengaluru.south - 0.2).abs() < 1e-9);

        let rural = engine.location_bias(coords(15.5, 75.0));
        assert!((rural.north - rural.south - 0.6).abs() < 1e-9);
    }

    #[test]
    fn generations_advance_per_session() {
        let engine = engine(MockMaps::new());
        let a = engine.new_session();
        let b = engine.new_session();

        assert_eq!(engine.begin_search(a).unwrap(), 1);
        assert_eq!(engine.begin_search(a).unwrap(), 2);
        assert_eq!(engine.begin_search(b).unwrap(), 1);
        assert!(engine.is_current(a, 2));
        assert!(!engine.is_current(a, 1));

        engine.end_session(a);
        assert!(!engine.is_current(a, 2));
    }
}
