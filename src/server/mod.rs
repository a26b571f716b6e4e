mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{places, preferences, quotes, routes, trips};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/places/sessions", post(places::create_session))
        .route("/places/sessions/:token", delete(places::end_session))
        .route("/places/search", get(places::search))
        .route("/quotes", post(quotes::create))
        .route("/routes", post(routes::create))
        .route("/trips/plan", post(trips::plan))
        .route(
            "/preferences",
            get(preferences::find).put(preferences::update),
        )
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
