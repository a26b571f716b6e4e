use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, RoutePath},
    error::Error,
    polyline,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoutePath, Error> {
        let directions = match self.maps.directions(origin, destination).await {
            Ok(directions) => directions,
            Err(err) => {
                tracing::warn!("routing failed, returning empty route: {}", err);
                return Ok(RoutePath::empty());
            }
        };

        match polyline::decode(&directions.polyline) {
            Ok(points) => Ok(RoutePath::new(points)),
            Err(err) => {
                tracing::warn!("discarding malformed route polyline: {}", err);
                Ok(RoutePath::empty())
            }
        }
    }
}
