//! POST /v1/preview
//!
//! The 3D configurator's live price. Narrower than the calculator's
//! estimate on purpose: no post-processing, quantity, or discount.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};

use super::estimate::reject;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::types::{PreviewRequest, PreviewResponse};

/// POST /v1/preview
/// Compute the configurator's live preview price from dimensions
#[utoipa::path(
    post,
    path = "/v1/preview",
    tag = "estimates",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Derived volume and preview price", body = PreviewResponse),
        (status = 422, description = "Malformed body or unknown catalog id")
    )
)]
pub async fn create_preview(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> ApiResult<Json<PreviewResponse>> {
    let Json(request) = payload.map_err(reject)?;

    let spec = request.into_specification();
    let result = pf_estimator::preview(state.catalog, &spec);

    Ok(Json(result.into()))
}
