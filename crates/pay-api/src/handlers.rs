//! # Request Handlers
//!
//! Axum request handlers for the payment intent API.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{CreatedPaymentIntent, PaymentError};
use serde::Serialize;
use serde_json::Value;
use tracing::{instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// The `amount` field of a create request, in major units (dollars).
///
/// Kept raw: presence is checked by truthiness, not by type. Only a JSON
/// object has fields; arrays and scalars carry no amount.
pub fn requested_amount(body: &Value) -> Option<&Value> {
    body.as_object().and_then(|fields| fields.get("amount"))
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Detail is already logged by the service; only the generic message goes out.
fn payment_error_to_response(err: PaymentError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.public_message())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "intent-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a payment intent and return its client secret
///
/// A body that cannot be read as a JSON object is treated as one without an
/// `amount`.
#[instrument(skip(state, payload))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedPaymentIntent>, ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Unreadable request body: {}", rejection.body_text());
            Value::Null
        }
    };

    state
        .payments
        .create_payment_intent(requested_amount(&body))
        .await
        .map(Json)
        .map_err(payment_error_to_response)
}
