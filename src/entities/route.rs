use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, FareQuote};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub points: Vec<Coordinates>,
}

impl RoutePath {
    pub fn new(points: Vec<Coordinates>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<RoutePath> for LineString<f64> {
    fn from(route: RoutePath) -> Self {
        route.points.into_iter().map(geo_types::Coord::from).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub quote: FareQuote,
    pub route: RoutePath,
}
