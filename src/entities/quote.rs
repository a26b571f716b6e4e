use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    SmallTruck,
    LargeTruck,
}

impl Default for VehicleClass {
    fn default() -> Self {
        VehicleClass::SmallTruck
    }
}

/// Where the distance behind a quote came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSource {
    Routed,
    StraightLine,
    /// Routing failed; the quote is the flat base fare.
    Unavailable,
}

/// How a quote request wants its distance measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMode {
    Routed,
    StraightLine,
}

impl Default for DistanceMode {
    fn default() -> Self {
        DistanceMode::Routed
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    #[serde(default)]
    pub vehicle_class: VehicleClass,
    /// Local clock time used for the peak check. Defaults to now.
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub distance_mode: DistanceMode,
}

impl QuoteRequest {
    pub fn new(origin: Coordinates, destination: Coordinates) -> Self {
        Self {
            origin,
            destination,
            vehicle_class: VehicleClass::default(),
            time: None,
            distance_mode: DistanceMode::default(),
        }
    }

    pub fn with_vehicle_class(mut self, vehicle_class: VehicleClass) -> Self {
        self.vehicle_class = vehicle_class;
        self
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn straight_line(mut self) -> Self {
        self.distance_mode = DistanceMode::StraightLine;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub distance_km: f64,
    pub duration: String,
    pub amount: f64,
    pub vehicle_class: VehicleClass,
    pub distance_source: DistanceSource,
}
