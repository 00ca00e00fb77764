//! # carecost-server
//!
//! HTTP JSON API for patient cost estimates, per-service cost forecasts and
//! the service catalog.
//!
//! The historical dataset is loaded once before the router is built and
//! shared read-only by every handler through [`AppState`].

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse, ServerError};

use axum::{
    routing::{get, post},
    Router,
};
use costing_facade::CostingService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub costing: CostingService,
}

impl AppState {
    pub fn new(costing: CostingService) -> Self {
        Self { costing }
    }
}

/// Build the router with CORS and request tracing.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/predict", post(routes::predict))
        .route("/predict/cost", post(routes::predict_cost))
        .route("/services", get(routes::services))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
