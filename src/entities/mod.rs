mod location;
mod place;
mod preferences;
mod quote;
mod route;

pub use location::Coordinates;
pub use place::{PlaceCandidate, PlaceDetails, PlacePrediction, SearchResults};
pub use preferences::Preferences;
pub use quote::{DistanceMode, DistanceSource, FareQuote, QuoteRequest, VehicleClass};
pub use route::{RoutePath, TripPlan};
