//! POST /v1/quotes
//!
//! Custom-quote intake. Submission is acknowledged with a reference id; a
//! human follows up with the actual quote, so nothing is computed or stored
//! here.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::estimate::reject;
use crate::error::{ApiErrorResponse, ApiResult};
use crate::types::{QuoteRequest, QuoteResponse};

const ACK_MESSAGE: &str =
    "Quote request received. We will contact you within 24 hours with your estimate.";

/// POST /v1/quotes
/// Submit a custom-quote request
#[utoipa::path(
    post,
    path = "/v1/quotes",
    tag = "quotes",
    request_body = QuoteRequest,
    responses(
        (status = 201, description = "Quote request accepted", body = QuoteResponse),
        (status = 400, description = "Missing required field"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn submit_quote(
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> ApiResult<(axum::http::StatusCode, Json<QuoteResponse>)> {
    let Json(request) = payload.map_err(reject)?;
    validate(&request)?;

    let reference = Uuid::new_v4();
    info!(
        %reference,
        project_type = ?request.project_type,
        urgency = ?request.urgency,
        quantity = request.quantity,
        "quote request received"
    );

    Ok((
        axum::http::StatusCode::CREATED,
        Json(QuoteResponse {
            reference,
            status: "received",
            message: ACK_MESSAGE,
            received_at: Utc::now(),
        }),
    ))
}

fn validate(request: &QuoteRequest) -> Result<(), ApiErrorResponse> {
    if request.name.trim().is_empty() {
        return Err(ApiErrorResponse::bad_request("name is required"));
    }
    if request.email.trim().is_empty() {
        return Err(ApiErrorResponse::bad_request("email is required"));
    }
    if !request.email.contains('@') {
        return Err(ApiErrorResponse::bad_request("email is not an address"));
    }
    if request.description.trim().is_empty() {
        return Err(ApiErrorResponse::bad_request("description is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProjectType, Urgency};

    fn request() -> QuoteRequest {
        QuoteRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            project_type: ProjectType::Prototype,
            description: "A replacement bracket".to_string(),
            quantity: 1,
            urgency: Urgency::Normal,
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert!(validate(&request()).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        let mut r = request();
        r.name = "  ".to_string();
        assert!(validate(&r).is_err());

        let mut r = request();
        r.email = String::new();
        assert!(validate(&r).is_err());

        let mut r = request();
        r.email = "not-an-address".to_string();
        assert!(validate(&r).is_err());

        let mut r = request();
        r.description = String::new();
        assert!(validate(&r).is_err());
    }
}
