use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{QuoteAPI, RouteAPI, TripAPI},
    entities::{QuoteRequest, TripPlan},
    error::Error,
};

#[async_trait]
impl TripAPI for Engine {
    /// Quote and route are independent; run them side by side.
    #[tracing::instrument(skip(self))]
    async fn plan_trip(&self, request: QuoteRequest) -> Result<TripPlan, Error> {
        let (origin, destination) = (request.origin, request.destination);

        let (quote, route) = futures::join!(
            self.create_quote(request),
            self.create_route(origin, destination)
        );

        Ok(TripPlan {
            quote: quote?,
            route: route?,
        })
    }
}
