use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Preferences;
use crate::error::Error;

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<Preferences>, Error> {
    let preferences = api.find_preferences().await?;

    Ok(preferences.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Json(preferences): Json<Preferences>,
) -> Result<Json<Preferences>, Error> {
    let preferences = api.update_preferences(preferences).await?;

    Ok(preferences.into())
}
