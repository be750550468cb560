//! # Payment Intent Types
//!
//! What goes to the processor and what comes back.

use crate::amount::Currency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for creating a payment intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    /// Amount in smallest currency unit (cents for USD)
    pub amount_minor_units: i64,
    /// Currency
    pub currency: Currency,
}

impl PaymentIntentRequest {
    pub fn new(amount_minor_units: i64, currency: Currency) -> Self {
        Self {
            amount_minor_units,
            currency,
        }
    }
}

/// Status of a payment intent as reported by the processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    /// Any status this build does not know about
    #[serde(untagged)]
    Unknown(String),
}

impl Default for PaymentIntentStatus {
    fn default() -> Self {
        PaymentIntentStatus::RequiresPaymentMethod
    }
}

/// A payment intent created by the processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Processor's intent ID (pi_...)
    pub id: String,

    /// Secret handed to the client to complete the payment
    pub client_secret: String,

    /// Amount in smallest currency unit
    pub amount: i64,

    /// Currency
    pub currency: Currency,

    /// Intent status
    #[serde(default)]
    pub status: PaymentIntentStatus,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl PaymentIntent {
    /// Create a new intent record
    pub fn new(
        id: impl Into<String>,
        client_secret: impl Into<String>,
        request: PaymentIntentRequest,
    ) -> Self {
        Self {
            id: id.into(),
            client_secret: client_secret.into(),
            amount: request.amount_minor_units,
            currency: request.currency,
            status: PaymentIntentStatus::RequiresPaymentMethod,
            created_at: Utc::now(),
        }
    }
}

/// Result of a successful create call, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPaymentIntent {
    pub client_secret: String,
}

impl From<PaymentIntent> for CreatedPaymentIntent {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            client_secret: intent.client_secret,
        }
    }
}
