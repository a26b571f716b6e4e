//! In-memory maps provider for tests and offline development.
//!
//! Serves canned predictions, place details and directions, and counts calls
//! so callers can assert on what reached the provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::{AutocompleteRequest, Directions, PlacesProvider, RoutingProvider};
use crate::{
    entities::{Coordinates, PlaceDetails, PlacePrediction},
    error::{upstream_error, Error},
};

#[derive(Clone, Default)]
pub struct MockMaps {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    predictions: Mutex<Vec<PlacePrediction>>,
    details: Mutex<HashMap<String, PlaceDetails>>,
    directions: Mutex<Option<Directions>>,
    autocomplete_delays: Mutex<HashMap<String, Duration>>,
    fail_autocomplete: AtomicBool,
    autocomplete_calls: AtomicUsize,
    details_calls: AtomicUsize,
    directions_calls: AtomicUsize,
    last_autocomplete: Mutex<Option<AutocompleteRequest>>,
}

impl MockMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prediction and, if `details` is given, a resolvable place for it.
    /// A prediction without details fails its detail fetch.
    pub fn with_place(self, prediction: PlacePrediction, details: Option<PlaceDetails>) -> Self {
        if let Some(details) = details {
            lock(&self.inner.details).insert(prediction.place_id.clone(), details);
        }
        lock(&self.inner.predictions).push(prediction);
        self
    }

    pub fn with_directions(self, directions: Directions) -> Self {
        *lock(&self.inner.directions) = Some(directions);
        self
    }

    /// Delay autocomplete responses for one input string.
    pub fn with_autocomplete_delay(self, input: impl Into<String>, delay: Duration) -> Self {
        lock(&self.inner.autocomplete_delays).insert(input.into(), delay);
        self
    }

    pub fn failing_autocomplete(self) -> Self {
        self.inner.fail_autocomplete.store(true, Ordering::SeqCst);
        self
    }

    pub fn autocomplete_calls(&self) -> usize {
        self.inner.autocomplete_calls.load(Ordering::SeqCst)
    }

    pub fn details_calls(&self) -> usize {
        self.inner.details_calls.load(Ordering::SeqCst)
    }

    pub fn directions_calls(&self) -> usize {
        self.inner.directions_calls.load(Ordering::SeqCst)
    }

    pub fn last_autocomplete(&self) -> Option<AutocompleteRequest> {
        lock(&self.inner.last_autocomplete).clone()
    }
}

// a poisoned lock only means another test thread panicked; the data is still usable
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl PlacesProvider for MockMaps {
    async fn autocomplete(
        &self,
        request: AutocompleteRequest,
    ) -> Result<Vec<PlacePrediction>, Error> {
        self.inner.autocomplete_calls.fetch_add(1, Ordering::SeqCst);
        *lock(&self.inner.last_autocomplete) = Some(request.clone());

        let delay = lock(&self.inner.autocomplete_delays)
            .get(&request.input)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.inner.fail_autocomplete.load(Ordering::SeqCst) {
            return Err(upstream_error());
        }

        Ok(lock(&self.inner.predictions).clone())
    }

    async fn place_details(
        &self,
        place_id: &str,
        _session_token: Uuid,
    ) -> Result<PlaceDetails, Error> {
        self.inner.details_calls.fetch_add(1, Ordering::SeqCst);

        lock(&self.inner.details)
            .get(place_id)
            .cloned()
            .ok_or_else(upstream_error)
    }
}

#[async_trait]
impl RoutingProvider for MockMaps {
    async fn directions(
        &self,
        _origin: Coordinates,
        _destination: Coordinates,
    ) -> Result<Directions, Error> {
        self.inner.directions_calls.fetch_add(1, Ordering::SeqCst);

        lock(&self.inner.directions)
            .clone()
            .ok_or_else(upstream_error)
    }
}
