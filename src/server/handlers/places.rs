use axum::extract::{Extension, Json, Path, Query};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{Coordinates, SearchResults};
use crate::error::{invalid_input_error, Error};

#[derive(Serialize, Deserialize)]
pub struct SessionResponse {
    session_token: Uuid,
}

#[derive(Serialize, Deserialize)]
pub struct SearchParams {
    session_token: Uuid,
    query: String,
    lat: Option<f64>,
    lng: Option<f64>,
}

pub async fn create_session(Extension(api): Extension<DynAPI>) -> Json<SessionResponse> {
    let session_token = api.new_session();

    SessionResponse { session_token }.into()
}

pub async fn end_session(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> StatusCode {
    api.end_session(token);

    StatusCode::NO_CONTENT
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Option<SearchResults>>, Error> {
    // location permission may be denied; search without it
    let location = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)?),
        (None, None) => None,
        _ => return Err(invalid_input_error()),
    };

    let results = api
        .search_places(params.session_token, params.query, location)
        .await?;

    Ok(results.into())
}
