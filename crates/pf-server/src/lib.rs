//! HTTP boundary for the PrintForge estimation service
//!
//! The storefront widgets (quick calculator, 3D configurator, custom-quote
//! form) are the collaborators: they collect field values, call these
//! routes on every change, and render the returned figures. All
//! computation lives in `pf-estimator`; handlers only translate between
//! wire records and specification records.
//!
//! Routes:
//!
//! - `GET  /health` — liveness probe
//! - `GET  /openapi.json` — generated API documentation
//! - `GET  /v1/catalog` — materials, quality tiers, post-processing options
//! - `POST /v1/estimate` — quick-calculator quote
//! - `POST /v1/preview` — configurator live price
//! - `POST /v1/quotes` — custom-quote intake (acknowledgment only)

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod types;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::AppState;

use types::HealthResponse;

/// Build the service router with all routes and middleware attached
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi::serve_openapi_json))
        .route("/v1/catalog", get(routes::catalog::get_catalog))
        .route(
            "/v1/catalog/materials/{id}",
            get(routes::catalog::get_material),
        )
        .route("/v1/estimate", post(routes::estimate::create_estimate))
        .route("/v1/preview", post(routes::preview::create_preview))
        .route("/v1/quotes", post(routes::quotes::submit_quote))
        .layer(TraceLayer::new_for_http())
        // The storefront is served from a different origin in development
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health
/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
