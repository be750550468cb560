//! # pay-api
//!
//! HTTP API layer for intent-relay.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/create-payment-intent` | Create a payment intent, returns `{ "clientSecret": ... }` |
//! | GET | `/health` | Health check |
//!
//! Failures return `{ "error": "<message>" }`: 400 when the caller can fix
//! the request (missing amount, declined card, invalid parameters), 500
//! otherwise.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
