//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment intent service and configuration.

use anyhow::Context;
use pay_core::{BoxedPaymentIntentProvider, Currency, PaymentIntentService};
use pay_stripe::StripePaymentIntentProvider;
use std::sync::Arc;

pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Currency every intent is created in
    pub currency: Currency,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(p) if !p.trim().is_empty() => p
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {}", p))?,
            _ => DEFAULT_PORT,
        };

        let currency = match std::env::var("PAYMENT_CURRENCY") {
            Ok(c) if !c.trim().is_empty() => c.parse::<Currency>()?,
            _ => Currency::default(),
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            currency,
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            currency: Currency::default(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment intent service
    pub payments: PaymentIntentService,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state with the Stripe provider, configured from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let stripe = StripePaymentIntentProvider::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;
        tracing::info!("Stripe mode: {}", stripe.config().mode());

        Ok(Self::new(config, Arc::new(stripe)))
    }

    /// Create state around any provider (tests pass fakes here)
    pub fn new(config: AppConfig, provider: BoxedPaymentIntentProvider) -> Self {
        let payments = PaymentIntentService::new(provider, config.currency);
        Self { payments, config }
    }
}
