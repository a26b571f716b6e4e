//! Runtime configuration.
//!
//! Secrets and endpoints come from the environment (optionally a `.env`
//! file); pricing and ranking parameters have defaults that can be
//! overridden in code.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveTime;

use crate::entities::{Coordinates, VehicleClass};
use crate::error::{invalid_input_error, Error};

const DEFAULT_API_BASE: &str = "https://maps.googleapis.com";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_PREFERENCES_PATH: &str = "preferences.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COUNTRY: &str = "in";

#[derive(Debug, Clone)]
pub struct Config {
    pub google_maps: GoogleMapsConfig,
    pub addr: SocketAddr,
    pub preferences_path: PathBuf,
    pub fares: FareSchedule,
    pub search: SearchConfig,
}

impl Config {
    /// Load from environment variables. `GOOGLE_MAPS_API_KEY` is required.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let api_key = env::var("GOOGLE_MAPS_API_KEY")?;
        let api_base = env_or("GOOGLE_MAPS_API_BASE", DEFAULT_API_BASE);

        let timeout_secs = match env::var("TRANXPORTER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| invalid_input_error())?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let addr = env_or("TRANXPORTER_ADDR", DEFAULT_ADDR)
            .parse()
            .map_err(|_| invalid_input_error())?;

        let preferences_path = env_or("TRANXPORTER_PREFERENCES", DEFAULT_PREFERENCES_PATH).into();

        let mut search = SearchConfig::default();
        search.country = env_or("TRANXPORTER_COUNTRY", DEFAULT_COUNTRY);

        Ok(Self {
            google_maps: GoogleMapsConfig::new(api_key)
                .with_api_base(api_base)
                .with_timeout(Duration::from_secs(timeout_secs)),
            addr,
            preferences_path,
            fares: FareSchedule::default(),
            search,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Credentials and endpoint for the Google Maps web services.
#[derive(Clone)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    /// Scheme and host, e.g. `https://maps.googleapis.com`.
    pub api_base: String,
    pub timeout: Duration,
}

impl GoogleMapsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// keep the key out of logs
impl std::fmt::Debug for GoogleMapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleMapsConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Pricing parameters for fare quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct FareSchedule {
    pub base_fare: f64,
    pub small_truck_rate: f64,
    pub large_truck_rate: f64,
    /// Start of the peak window, inclusive.
    pub peak_start: NaiveTime,
    /// End of the peak window, exclusive.
    pub peak_end: NaiveTime,
    pub peak_multiplier: f64,
    /// Used to estimate duration for straight-line quotes.
    pub average_speed_kmh: f64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: 50.0,
            small_truck_rate: 15.0,
            large_truck_rate: 25.0,
            peak_start: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            peak_end: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
            peak_multiplier: 1.2,
            average_speed_kmh: 30.0,
        }
    }
}

impl FareSchedule {
    pub fn per_km_rate(&self, vehicle_class: VehicleClass) -> f64 {
        match vehicle_class {
            VehicleClass::SmallTruck => self.small_truck_rate,
            VehicleClass::LargeTruck => self.large_truck_rate,
        }
    }
}

/// Place search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub min_query_len: usize,
    pub max_results: usize,
    /// ISO 3166-1 alpha-2 country filter.
    pub country: String,
    /// Autocomplete `types` filter, if any.
    pub types: Option<String>,
    /// Centres of areas where a tight location bias is used.
    pub dense_areas: Vec<Coordinates>,
    pub dense_radius_km: f64,
    pub dense_bias_deg: f64,
    pub sparse_bias_deg: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_results: 5,
            country: DEFAULT_COUNTRY.to_string(),
            types: None,
            dense_areas: default_dense_areas(),
            dense_radius_km: 25.0,
            dense_bias_deg: 0.1,
            sparse_bias_deg: 0.3,
        }
    }
}

fn default_dense_areas() -> Vec<Coordinates> {
    // Bengaluru, Mumbai, Delhi, Chennai, Hyderabad
    [
        (12.9716, 77.5946),
        (19.0760, 72.8777),
        (28.6139, 77.2090),
        (13.0827, 80.2707),
        (17.3850, 78.4867),
    ]
    .iter()
    .filter_map(|&(lat, lng)| Coordinates::new(lat, lng).ok())
    .collect()
}
