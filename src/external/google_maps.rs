use async_trait::async_trait;
use reqwest::Response as HttpResponse;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use super::{AutocompleteRequest, Directions, PlacesProvider, RoutingProvider};
use crate::{
    config::GoogleMapsConfig,
    entities::{Coordinates, PlaceDetails, PlacePrediction},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Place {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Prediction {
    place_id: String,
    #[serde(default)]
    description: String,
    structured_formatting: Option<StructuredFormatting>,
    #[serde(default)]
    types: Vec<String>,
    distance_meters: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StructuredFormatting {
    main_text: String,
    #[serde(default)]
    secondary_text: String,
}

impl From<Prediction> for PlacePrediction {
    fn from(prediction: Prediction) -> Self {
        let (primary_text, secondary_text) = match prediction.structured_formatting {
            Some(formatting) => (formatting.main_text, formatting.secondary_text),
            None => (prediction.description, String::new()),
        };

        PlacePrediction {
            place_id: prediction.place_id,
            primary_text,
            secondary_text,
            types: prediction.types,
            distance_meters: prediction.distance_meters,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Route {
    legs: Vec<Leg>,
    overview_polyline: Polyline,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Polyline {
    points: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    predictions: Option<T>,
    routes: Option<T>,
}

/// Google Maps Places and Directions web service client.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    http: reqwest::Client,
    config: GoogleMapsConfig,
}

impl GoogleMaps {
    pub fn new(config: GoogleMapsConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        let base = self.config.api_base.trim_end_matches('/');
        format!("{}/maps/api/{}/json", base, path)
    }
}

async fn read_response<T: DeserializeOwned>(res: HttpResponse) -> Result<Response<T>, Error> {
    let status_code = res.status().as_u16();

    if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(res.json().await?)
}

#[async_trait]
impl PlacesProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn autocomplete(
        &self,
        request: AutocompleteRequest,
    ) -> Result<Vec<PlacePrediction>, Error> {
        let mut query: Vec<(&str, String)> = vec![
            ("key", self.config.api_key.clone()),
            ("input", request.input),
            ("sessiontoken", request.session_token.to_string()),
            ("components", format!("country:{}", request.country)),
        ];

        if let Some(types) = request.types {
            query.push(("types", types));
        }
        if let Some(bias) = request.bias {
            query.push(("locationbias", bias.to_param()));
        }
        if let Some(origin) = request.origin {
            query.push(("origin", origin.into()));
        }

        let res = self
            .http
            .get(self.url("place/autocomplete"))
            .query(&query)
            .send()
            .await?;

        let data: Response<Vec<Prediction>> = read_response(res).await?;

        match data.status.as_str() {
            "ZERO_RESULTS" => Ok(vec![]),
            "OK" => Ok(data
                .predictions
                .ok_or_else(upstream_error)?
                .into_iter()
                .map(PlacePrediction::from)
                .collect()),
            _ => Err(upstream_error()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn place_details(
        &self,
        place_id: &str,
        session_token: Uuid,
    ) -> Result<PlaceDetails, Error> {
        let res = self
            .http
            .get(self.url("place/details"))
            .query(&[("key", self.config.api_key.as_str())])
            .query(&[("sessiontoken", session_token.to_string())])
            .query(&[("place_id", place_id)])
            .query(&[("fields", "geometry/location,formatted_address")])
            .send()
            .await?;

        let data: Response<Place> = read_response(res).await?;

        if data.status != "OK" {
            return Err(upstream_error());
        }

        let place = data.result.ok_or_else(upstream_error)?;

        Ok(PlaceDetails {
            coordinates: place.geometry.location,
            address: place.formatted_address,
        })
    }
}

#[async_trait]
impl RoutingProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Directions, Error> {
        let origin: String = origin.into();
        let destination: String = destination.into();

        let res = self
            .http
            .get(self.url("directions"))
            .query(&[("key", self.config.api_key.as_str())])
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", "driving")])
            .send()
            .await?;

        let data: Response<Vec<Route>> = read_response(res).await?;

        if data.status != "OK" {
            return Err(upstream_error());
        }

        first_leg(data.routes.unwrap_or_default())
    }
}

fn first_leg(routes: Vec<Route>) -> Result<Directions, Error> {
    let route = routes.into_iter().next().ok_or_else(upstream_error)?;
    let leg = route.legs.into_iter().next().ok_or_else(upstream_error)?;

    Ok(Directions {
        distance_meters: leg.distance.value,
        duration_text: leg.duration.text,
        polyline: route.overview_polyline.points,
    })
}
