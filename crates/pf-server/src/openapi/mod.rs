//! OpenAPI specification generation
//!
//! Generates an OpenAPI 3.1 specification from the annotated route
//! handlers and types using utoipa.

use axum::Json;
use once_cell::sync::Lazy;
use utoipa::OpenApi;

/// OpenAPI documentation builder
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PrintForge API",
        description = "Pricing and estimation API for the PrintForge 3D-printing storefront"
    ),
    servers(
        (url = "http://localhost:3625", description = "Local development server")
    ),
    paths(
        crate::routes::catalog::get_catalog,
        crate::routes::catalog::get_material,
        crate::routes::estimate::create_estimate,
        crate::routes::preview::create_preview,
        crate::routes::quotes::submit_quote,
        crate::health_check,
        crate::openapi::serve_openapi_json,
    ),
    components(
        schemas(
            crate::types::EstimateRequest,
            crate::types::EstimateResponse,
            crate::types::DiscountInfo,
            crate::types::PreviewRequest,
            crate::types::PreviewResponse,
            crate::types::CatalogResponse,
            crate::types::MaterialOption,
            crate::types::QualityOption,
            crate::types::PostProcessOption,
            crate::types::QuoteRequest,
            crate::types::QuoteResponse,
            crate::types::ProjectType,
            crate::types::Urgency,
            crate::types::HealthResponse,
        )
    ),
    tags(
        (name = "catalog", description = "Pricing catalog"),
        (name = "estimates", description = "Cost/time estimation"),
        (name = "quotes", description = "Custom-quote intake"),
        (name = "system", description = "Health and documentation")
    )
)]
pub struct ApiDoc;

// The spec never changes at runtime; generate it once.
static OPENAPI: Lazy<utoipa::openapi::OpenApi> = Lazy::new(ApiDoc::openapi);

/// GET /openapi.json
/// Serve the generated OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses((status = 200, description = "OpenAPI 3.1 specification"))
)]
pub async fn serve_openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(OPENAPI.clone())
}
