//! # Stripe Payment Intents
//!
//! Implementation of `PaymentIntentProvider` against Stripe's
//! `POST /v1/payment_intents`.
//!
//! Error classification:
//! - non-2xx with a Stripe error envelope: by `error.type`
//! - non-2xx without one, transport failures, unreadable success bodies: `Other`

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pay_core::{
    Currency, PaymentError, PaymentIntent, PaymentIntentProvider, PaymentIntentRequest,
    PaymentIntentStatus, PaymentResult, ProcessorError, ProcessorErrorKind,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Stripe PaymentIntents provider
pub struct StripePaymentIntentProvider {
    config: StripeConfig,
    client: Client,
}

impl StripePaymentIntentProvider {
    /// Create a new provider with a pooled HTTP client
    pub fn new(config: StripeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    fn form_params(request: &PaymentIntentRequest) -> Vec<(&'static str, String)> {
        vec![
            ("amount", request.amount_minor_units.to_string()),
            ("currency", request.currency.as_str().to_string()),
        ]
    }
}

#[async_trait]
impl PaymentIntentProvider for StripePaymentIntentProvider {
    #[instrument(skip(self), fields(amount = request.amount_minor_units, currency = %request.currency))]
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, ProcessorError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&Self::form_params(&request))
            .send()
            .await
            .map_err(|e| ProcessorError::other(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| {
                ProcessorError::other(format!("Network error: {}", e))
                    .with_http_status(status.as_u16())
            })?;

        if !status.is_success() {
            // Logged in full by the caller once classified
            debug!("Stripe API error: status={}, body={}", status, body);
            return Err(classify_error_body(status.as_u16(), &body));
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            ProcessorError::other(format!("Failed to parse Stripe response: {}", e))
                .with_http_status(status.as_u16())
        })?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            ProcessorError::other(format!(
                "Stripe response for {} has no client_secret",
                intent.id
            ))
        })?;

        info!("Created Stripe payment intent: id={}", intent.id);

        let created_at = intent
            .created
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: intent.amount.unwrap_or(request.amount_minor_units),
            currency: intent
                .currency
                .and_then(|c| c.parse::<Currency>().ok())
                .unwrap_or(request.currency),
            status: intent.status.unwrap_or_default(),
            created_at,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

/// Turn a non-2xx Stripe response into a classified error.
fn classify_error_body(http_status: u16, body: &str) -> ProcessorError {
    match serde_json::from_str::<StripeErrorResponse>(body) {
        Ok(StripeErrorResponse { error: e }) => {
            let kind = e
                .error_type
                .as_deref()
                .map(ProcessorErrorKind::from_stripe_type)
                .unwrap_or(ProcessorErrorKind::Other);
            let message = e
                .message
                .unwrap_or_else(|| format!("HTTP {} from Stripe", http_status));

            let mut err = ProcessorError::new(kind, message).with_http_status(http_status);
            if let Some(error_type) = e.error_type {
                err = err.with_error_type(error_type);
            }
            if let Some(code) = e.code {
                err = err.with_code(code);
            }
            if let Some(decline_code) = e.decline_code {
                err = err.with_decline_code(decline_code);
            }
            if let Some(param) = e.param {
                err = err.with_param(param);
            }
            err
        }
        Err(_) => ProcessorError::other(format!("HTTP {}: {}", http_status, body))
            .with_http_status(http_status),
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    amount: Option<i64>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    status: Option<PaymentIntentStatus>,
    #[serde(default)]
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    decline_code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_params() {
        let params = StripePaymentIntentProvider::form_params(&PaymentIntentRequest::new(
            2000,
            Currency::USD,
        ));
        assert_eq!(
            params,
            vec![("amount", "2000".to_string()), ("currency", "usd".to_string())]
        );
    }

    #[test]
    fn test_classify_card_error() {
        let body = r#"{"error": {"type": "card_error", "code": "card_declined",
            "decline_code": "insufficient_funds", "message": "Your card has insufficient funds."}}"#;
        let err = classify_error_body(402, body);

        assert_eq!(err.kind, ProcessorErrorKind::CardError);
        assert_eq!(err.code.as_deref(), Some("card_declined"));
        assert_eq!(err.decline_code.as_deref(), Some("insufficient_funds"));
        assert_eq!(err.http_status, Some(402));
        assert_eq!(err.message, "Your card has insufficient funds.");
    }

    #[test]
    fn test_classify_other_types() {
        let cases = [
            ("invalid_request_error", ProcessorErrorKind::InvalidRequest),
            ("api_error", ProcessorErrorKind::Api),
            ("authentication_error", ProcessorErrorKind::Other),
            ("rate_limit_error", ProcessorErrorKind::Other),
            ("idempotency_error", ProcessorErrorKind::Other),
        ];
        for (error_type, expected) in cases {
            let body = format!(r#"{{"error": {{"type": "{}", "message": "m"}}}}"#, error_type);
            let err = classify_error_body(400, &body);
            assert_eq!(err.kind, expected, "{}", error_type);
            assert_eq!(err.error_type.as_deref(), Some(error_type));
        }
    }

    #[test]
    fn test_classify_unparseable_body() {
        let err = classify_error_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.kind, ProcessorErrorKind::Other);
        assert!(err.message.contains("502"));

        let err = classify_error_body(500, r#"{"error": {}}"#);
        assert_eq!(err.kind, ProcessorErrorKind::Other);
    }
}
