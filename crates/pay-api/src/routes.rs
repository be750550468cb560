//! # Routes
//!
//! Axum router configuration for the payment intent API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
///   - POST /create-payment-intent - Create a payment intent, returns its client secret
///   - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    // CORS: any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/create-payment-intent", post(handlers::create_payment_intent))
        .route("/health", get(handlers::health))
        // Middleware (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        // State
        .with_state(state)
}
