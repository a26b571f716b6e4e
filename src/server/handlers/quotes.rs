use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{FareQuote, QuoteRequest};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<FareQuote>, Error> {
    let quote = api.create_quote(request).await?;

    Ok(quote.into())
}
