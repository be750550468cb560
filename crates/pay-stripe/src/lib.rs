//! # pay-stripe
//!
//! Stripe provider for intent-relay.
//!
//! Creates PaymentIntents through the Stripe REST API and classifies Stripe
//! errors into `pay_core::ProcessorErrorKind`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_stripe::StripePaymentIntentProvider;
//! use pay_core::{Currency, PaymentIntentProvider, PaymentIntentRequest};
//!
//! // Create provider from environment
//! let provider = StripePaymentIntentProvider::from_env()?;
//!
//! // $20.00
//! let intent = provider
//!     .create_payment_intent(PaymentIntentRequest::new(2000, Currency::USD))
//!     .await?;
//!
//! // Hand intent.client_secret to the frontend
//! ```

pub mod config;
pub mod payment_intent;

// Re-exports
pub use config::StripeConfig;
pub use payment_intent::StripePaymentIntentProvider;
