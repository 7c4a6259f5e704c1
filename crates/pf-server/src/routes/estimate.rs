//! POST /v1/estimate
//!
//! The quick calculator's authoritative quote. Recomputed per call; the
//! handler holds no state between requests.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use tracing::debug;

use crate::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;
use crate::types::{EstimateRequest, EstimateResponse};

/// POST /v1/estimate
/// Compute a full cost/time estimate for a specification
#[utoipa::path(
    post,
    path = "/v1/estimate",
    tag = "estimates",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Cost/time breakdown", body = EstimateResponse),
        (status = 422, description = "Malformed body or unknown catalog id")
    )
)]
pub async fn create_estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> ApiResult<Json<EstimateResponse>> {
    let Json(request) = payload.map_err(reject)?;

    let spec = request.into_specification();
    let result = pf_estimator::estimate(state.catalog, &spec);
    debug!(
        volume_cm3 = spec.volume_cm3,
        material = %spec.material,
        quantity = spec.quantity,
        final_total = result.final_total_cost,
        "estimate computed"
    );

    Ok(Json(result.into()))
}

/// Malformed estimate bodies point at a broken caller, not bad user input:
/// the widgets coerce free-text fields before submitting.
pub(super) fn reject(rejection: JsonRejection) -> ApiErrorResponse {
    tracing::error!("rejected request body: {}", rejection.body_text());
    ApiErrorResponse::unprocessable(rejection.body_text())
}
