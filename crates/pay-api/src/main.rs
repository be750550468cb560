//! # intent-relay
//!
//! Creates Stripe payment intents for a frontend.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export STRIPE_SECRET_KEY=sk_test_...
//! export PORT=5000
//!
//! # Run the server
//! intent-relay
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::from_env()?;

    let addr = state.config.socket_addr()?;
    let port = state.config.port;

    info!("Currency: {}", state.payments.currency());
    info!("Payment provider: {}", state.payments.provider_name());

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on http://localhost:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
