//! # Payment Intent Provider Trait
//!
//! The one capability the service needs from a payment processor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │               PaymentIntentProvider (trait)                 │
//! │  ├── create_payment_intent()                                │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┴─────────────────┐
//!          │                                   │
//!  ┌───────┴────────────┐             ┌────────┴────────┐
//!  │StripePaymentIntent │             │  test fakes     │
//!  │     Provider       │             │                 │
//!  └────────────────────┘             └─────────────────┘
//! ```

use crate::error::ProcessorError;
use crate::intent::{PaymentIntent, PaymentIntentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Payment processor capability.
///
/// Implementations classify their own failures into a [`ProcessorError`];
/// the service never inspects provider-specific error strings.
#[async_trait]
pub trait PaymentIntentProvider: Send + Sync {
    /// Create a payment intent for `request.amount_minor_units` in `request.currency`.
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, ProcessorError>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedPaymentIntentProvider = Arc<dyn PaymentIntentProvider>;
