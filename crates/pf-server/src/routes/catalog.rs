//! GET /v1/catalog
//!
//! Lists the full pricing catalog. Widgets populate their selects from
//! this, which is what keeps every id they later send resolvable.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiResult;
use crate::state::AppState;
use crate::types::{CatalogResponse, MaterialOption, PostProcessOption, QualityOption};

/// GET /v1/catalog
/// List materials, quality tiers, and post-processing options with rates
#[utoipa::path(
    get,
    path = "/v1/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "The full pricing catalog", body = CatalogResponse)
    )
)]
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        materials: state.catalog.materials.iter().map(MaterialOption::from).collect(),
        quality_tiers: state
            .catalog
            .quality_tiers
            .iter()
            .map(QualityOption::from)
            .collect(),
        post_processing: state
            .catalog
            .post_processing
            .iter()
            .map(PostProcessOption::from)
            .collect(),
    })
}

/// GET /v1/catalog/materials/{id}
/// Look up a single material by wire id
#[utoipa::path(
    get,
    path = "/v1/catalog/materials/{id}",
    tag = "catalog",
    params(
        ("id" = String, Path, description = "Material wire id, e.g. `pla`")
    ),
    responses(
        (status = 200, description = "Material rates", body = MaterialOption),
        (status = 404, description = "No such material")
    )
)]
pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MaterialOption>> {
    let entry = state.catalog.resolve_material(&id)?;
    Ok(Json(entry.into()))
}
