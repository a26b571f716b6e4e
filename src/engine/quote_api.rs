use super::{
    fare::{calculate_fare, estimate_duration, round_currency},
    Engine,
};

use async_trait::async_trait;
use chrono::Local;

use crate::{
    api::QuoteAPI,
    entities::{DistanceMode, DistanceSource, FareQuote, QuoteRequest, VehicleClass},
    error::Error,
    geo::haversine_km,
};

impl Engine {
    fn fallback_quote(&self, vehicle_class: VehicleClass) -> FareQuote {
        FareQuote {
            distance_km: 0.0,
            duration: String::new(),
            amount: round_currency(self.fares.base_fare),
            vehicle_class,
            distance_source: DistanceSource::Unavailable,
        }
    }
}

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(&self, request: QuoteRequest) -> Result<FareQuote, Error> {
        let time = request.time.unwrap_or_else(|| Local::now().time());

        let (distance_km, duration, distance_source) = match request.distance_mode {
            DistanceMode::StraightLine => {
                let distance_km = haversine_km(request.origin, request.destination);
                (
                    distance_km,
                    estimate_duration(&self.fares, distance_km),
                    DistanceSource::StraightLine,
                )
            }
            DistanceMode::Routed => {
                match self
                    .maps
                    .directions(request.origin, request.destination)
                    .await
                {
                    Ok(directions) => (
                        directions.distance_meters as f64 / 1000.0,
                        directions.duration_text,
                        DistanceSource::Routed,
                    ),
                    Err(err) => {
                        tracing::warn!("routing failed, quoting base fare: {}", err);
                        return Ok(self.fallback_quote(request.vehicle_class));
                    }
                }
            }
        };

        Ok(FareQuote {
            distance_km,
            duration,
            amount: calculate_fare(&self.fares, distance_km, request.vehicle_class, time),
            vehicle_class: request.vehicle_class,
            distance_source,
        })
    }
}
