pub mod places;
pub mod preferences;
pub mod quotes;
pub mod routes;
pub mod trips;
