//! # pay-core
//!
//! Core types and traits for the intent-relay payment intent service.
//!
//! This crate provides:
//! - `PaymentIntentProvider` trait for implementing payment processors
//! - `Amount` and `Currency` for caller-supplied amounts
//! - `PaymentIntentRequest`, `PaymentIntent` and `CreatedPaymentIntent`
//! - `PaymentIntentService`, the request handling core
//! - `PaymentError` / `ProcessorError` with the HTTP status mapping
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Currency, PaymentIntentService};
//!
//! let service = PaymentIntentService::new(provider, Currency::USD);
//!
//! match service.create_payment_intent(Some(&serde_json::json!(20))).await {
//!     Ok(created) => println!("secret: {}", created.client_secret),
//!     Err(e) => println!("{} {}", e.status_code(), e.public_message()),
//! }
//! ```

pub mod amount;
pub mod error;
pub mod intent;
pub mod provider;
pub mod service;

// Re-exports for convenience
pub use amount::{Amount, Currency};
pub use error::{PaymentError, PaymentResult, ProcessorError, ProcessorErrorKind};
pub use intent::{CreatedPaymentIntent, PaymentIntent, PaymentIntentRequest, PaymentIntentStatus};
pub use provider::{BoxedPaymentIntentProvider, PaymentIntentProvider};
pub use service::PaymentIntentService;
