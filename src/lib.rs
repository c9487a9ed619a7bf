pub mod config;
pub mod error;
pub mod models;
pub mod planning;
pub mod routes;
pub mod seed;
pub mod store;

pub const ASSET_HASH: &str = env!("ASSET_HASH");

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::{response::Redirect, routing::get, Router};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::store::TripStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<TripStore>>,
}

impl AppState {
    pub fn new(store: TripStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full Axum application router around `state`.
///
/// Every handler reads and writes through the one shared store; each mutation
/// holds the write lock for its whole duration.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(|| async { Redirect::to("/destinations") }))
        .merge(routes::destinations::router())
        .merge(routes::packing::router())
        .merge(routes::timeline::router())
        .merge(routes::budget::router())
        .merge(routes::gallery::router())
        .merge(routes::currency::router())
        .merge(routes::phrases::router())
        .merge(routes::export::router())
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=86400"),
                ))
                .service(ServeDir::new("static")),
        )
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
