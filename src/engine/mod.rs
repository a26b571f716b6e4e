pub mod fare;
pub mod scoring;

mod place_api;
mod preferences_api;
mod quote_api;
mod route_api;
mod trip_api;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::{
    api::API,
    config::{Config, FareSchedule, SearchConfig},
    error::{unknown_session_error, Error},
    external::{GoogleMaps, MapsProvider},
    store::PreferencesStore,
};

type DynMaps = Arc<dyn MapsProvider + Send + Sync>;

pub struct Engine {
    maps: DynMaps,
    fares: FareSchedule,
    search: SearchConfig,
    preferences: PreferencesStore,
    // latest issued search generation per session
    generations: Mutex<HashMap<Uuid, u64>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: Config) -> Result<Self, Error> {
        let maps = GoogleMaps::new(config.google_maps)?;

        Ok(Self::with_provider(
            Arc::new(maps),
            config.fares,
            config.search,
            PreferencesStore::new(config.preferences_path),
        ))
    }

    pub fn with_provider(
        maps: DynMaps,
        fares: FareSchedule,
        search: SearchConfig,
        preferences: PreferencesStore,
    ) -> Self {
        Self {
            maps,
            fares,
            search,
            preferences,
            generations: Mutex::new(HashMap::new()),
        }
    }

    fn generations(&self) -> MutexGuard<'_, HashMap<Uuid, u64>> {
        self.generations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Only sessions issued by `new_session` and not yet ended can search.
    fn begin_search(&self, session_token: Uuid) -> Result<u64, Error> {
        let mut generations = self.generations();
        let generation = generations
            .get_mut(&session_token)
            .ok_or_else(|| unknown_session_error(session_token))?;
        *generation += 1;
        Ok(*generation)
    }

    fn is_current(&self, session_token: Uuid, generation: u64) -> bool {
        self.generations().get(&session_token) == Some(&generation)
    }
}

impl API for Engine {}
