use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{QuoteRequest, TripPlan};
use crate::error::Error;

pub async fn plan(
    Extension(api): Extension<DynAPI>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<TripPlan>, Error> {
    let plan = api.plan_trip(request).await?;

    Ok(plan.into())
}
