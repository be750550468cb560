//! # Payment Intent Service
//!
//! Request handling core: presence check, minor-unit conversion, one
//! provider call. Holds no per-request state, so a single instance is shared
//! across all requests.

use crate::amount::{Amount, Currency};
use crate::error::PaymentResult;
use crate::intent::{CreatedPaymentIntent, PaymentIntentRequest};
use crate::provider::BoxedPaymentIntentProvider;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

/// Creates payment intents through a [`PaymentIntentProvider`](crate::PaymentIntentProvider).
#[derive(Clone)]
pub struct PaymentIntentService {
    provider: BoxedPaymentIntentProvider,
    currency: Currency,
}

impl PaymentIntentService {
    pub fn new(provider: BoxedPaymentIntentProvider, currency: Currency) -> Self {
        Self { provider, currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Create a payment intent for a caller-supplied major-unit amount.
    ///
    /// Every failure is logged here with full detail; callers only need
    /// [`PaymentError::public_message`](crate::PaymentError::public_message).
    #[instrument(skip(self, amount), fields(provider = self.provider.provider_name()))]
    pub async fn create_payment_intent(
        &self,
        amount: Option<&Value>,
    ) -> PaymentResult<CreatedPaymentIntent> {
        let amount = Amount::from_json(amount).map_err(|e| {
            warn!("Rejected payment intent request: {}", e);
            e
        })?;

        let amount_minor_units = amount.to_minor_units(self.currency).map_err(|e| {
            error!("Error creating payment intent: {} (amount={})", e, amount.raw());
            e
        })?;

        let request = PaymentIntentRequest::new(amount_minor_units, self.currency);
        info!(
            "Creating payment intent: amount={} {}",
            request.amount_minor_units, request.currency
        );

        let intent = self
            .provider
            .create_payment_intent(request)
            .await
            .map_err(|e| {
                error!(
                    kind = %e.kind,
                    error_type = ?e.error_type,
                    code = ?e.code,
                    decline_code = ?e.decline_code,
                    http_status = ?e.http_status,
                    "Error creating payment intent: {:?}",
                    e
                );
                e
            })?;

        info!("Created payment intent: id={}, status={:?}", intent.id, intent.status);

        Ok(intent.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PaymentError, ProcessorError, ProcessorErrorKind};
    use crate::intent::PaymentIntent;
    use crate::provider::PaymentIntentProvider;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Records every request and replays a fixed outcome
    struct FakeProvider {
        calls: Mutex<Vec<PaymentIntentRequest>>,
        failure: Option<ProcessorError>,
    }

    impl FakeProvider {
        fn succeeding() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                failure: None,
            })
        }

        fn failing(err: ProcessorError) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                failure: Some(err),
            })
        }

        fn calls(&self) -> Vec<PaymentIntentRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentIntentProvider for FakeProvider {
        async fn create_payment_intent(
            &self,
            request: PaymentIntentRequest,
        ) -> Result<PaymentIntent, ProcessorError> {
            let n = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(request);
                calls.len()
            };
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(PaymentIntent::new(
                    format!("pi_{}", n),
                    format!("pi_{}_secret", n),
                    request,
                )),
            }
        }

        fn provider_name(&self) -> &'static str {
            "fake"
        }
    }

    #[tokio::test]
    async fn test_converts_to_cents() {
        let provider = FakeProvider::succeeding();
        let service = PaymentIntentService::new(provider.clone(), Currency::USD);

        let created = service.create_payment_intent(Some(&json!(20))).await.unwrap();

        assert_eq!(created.client_secret, "pi_1_secret");
        assert_eq!(
            provider.calls(),
            vec![PaymentIntentRequest::new(2000, Currency::USD)]
        );
    }

    #[tokio::test]
    async fn test_missing_amount_skips_provider() {
        let provider = FakeProvider::succeeding();
        let service = PaymentIntentService::new(provider.clone(), Currency::USD);

        for amount in [None, Some(json!(null)), Some(json!(0)), Some(json!(""))] {
            let err = service
                .create_payment_intent(amount.as_ref())
                .await
                .unwrap_err();
            assert!(matches!(err, PaymentError::AmountRequired));
        }
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_amount_skips_provider() {
        let provider = FakeProvider::succeeding();
        let service = PaymentIntentService::new(provider.clone(), Currency::USD);

        let err = service
            .create_payment_intent(Some(&json!("twenty")))
            .await
            .unwrap_err();

        assert_eq!(err.processor_kind(), Some(ProcessorErrorKind::InvalidRequest));
        assert_eq!(err.status_code(), 400);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_passed_through() {
        let provider = FakeProvider::failing(
            ProcessorError::card("Your card was declined.").with_decline_code("generic_decline"),
        );
        let service = PaymentIntentService::new(provider.clone(), Currency::USD);

        let err = service
            .create_payment_intent(Some(&json!(5)))
            .await
            .unwrap_err();

        assert_eq!(err.processor_kind(), Some(ProcessorErrorKind::CardError));
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_independent() {
        let provider = FakeProvider::succeeding();
        let service = PaymentIntentService::new(provider.clone(), Currency::USD);

        let first = service.create_payment_intent(Some(&json!(20))).await.unwrap();
        let second = service.create_payment_intent(Some(&json!(20))).await.unwrap();

        assert_ne!(first.client_secret, second.client_secret);
        assert_eq!(provider.calls().len(), 2);
    }
}
