//! # Payment Error Types
//!
//! Typed error handling for intent-relay.
//!
//! Two taxonomies exist: local validation failures (the amount is missing)
//! and processor failures, which are classified by [`ProcessorErrorKind`].
//! Every error knows its HTTP status and the generic message that is safe to
//! hand back to a caller. `Display` is the detailed form and is meant for logs.

use thiserror::Error;

/// Message returned when the request carries no usable amount.
pub const AMOUNT_REQUIRED_MESSAGE: &str = "Amount is required";

/// Message returned for declined cards.
pub const CARD_ERROR_MESSAGE: &str =
    "Card declined or insufficient funds. Please check your card details and try again.";

/// Message returned when the processor rejects the request parameters.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request. Please check the payment details.";

/// Message returned when the processor itself fails.
pub const API_ERROR_MESSAGE: &str = "Stripe API error. Please try again later.";

/// Message returned for everything else.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error. Please try again later.";

/// Classified kind of a processor failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorErrorKind {
    /// Card declined, insufficient funds, expired card...
    CardError,
    /// Invalid parameters sent to the processor
    InvalidRequest,
    /// Transient or server-side failure inside the processor
    Api,
    /// Anything unclassified (auth, rate limits, transport, bad responses)
    Other,
}

impl ProcessorErrorKind {
    /// Classify a Stripe error `type` string.
    pub fn from_stripe_type(error_type: &str) -> Self {
        match error_type {
            "card_error" => ProcessorErrorKind::CardError,
            "invalid_request_error" => ProcessorErrorKind::InvalidRequest,
            "api_error" => ProcessorErrorKind::Api,
            _ => ProcessorErrorKind::Other,
        }
    }

    /// HTTP status for this kind (400 = client can fix it)
    pub fn status_code(&self) -> u16 {
        match self {
            ProcessorErrorKind::CardError => 400,
            ProcessorErrorKind::InvalidRequest => 400,
            ProcessorErrorKind::Api => 500,
            ProcessorErrorKind::Other => 500,
        }
    }

    /// Caller-facing message for this kind
    pub fn public_message(&self) -> &'static str {
        match self {
            ProcessorErrorKind::CardError => CARD_ERROR_MESSAGE,
            ProcessorErrorKind::InvalidRequest => INVALID_REQUEST_MESSAGE,
            ProcessorErrorKind::Api => API_ERROR_MESSAGE,
            ProcessorErrorKind::Other => INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorErrorKind::CardError => "card_error",
            ProcessorErrorKind::InvalidRequest => "invalid_request_error",
            ProcessorErrorKind::Api => "api_error",
            ProcessorErrorKind::Other => "other",
        }
    }
}

impl std::fmt::Display for ProcessorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by (or while talking to) the payment processor.
///
/// Everything beyond `kind` is diagnostic detail for the server log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} from processor: {message}")]
pub struct ProcessorError {
    pub kind: ProcessorErrorKind,
    pub message: String,
    /// Raw error `type` as reported by the processor
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub param: Option<String>,
    /// HTTP status of the processor response, if one was received
    pub http_status: Option<u16>,
}

impl ProcessorError {
    pub fn new(kind: ProcessorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            error_type: None,
            code: None,
            decline_code: None,
            param: None,
            http_status: None,
        }
    }

    pub fn card(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorKind::CardError, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorKind::InvalidRequest, message)
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorKind::Api, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorKind::Other, message)
    }

    pub fn with_error_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_decline_code(mut self, decline_code: impl Into<String>) -> Self {
        self.decline_code = Some(decline_code.into());
        self
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }
}

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The request carried no usable amount
    #[error("Amount is required")]
    AmountRequired,

    /// The processor rejected or failed the request
    #[error(transparent)]
    Processor(#[from] ProcessorError),

    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::AmountRequired => 400,
            PaymentError::Processor(err) => err.kind.status_code(),
            PaymentError::Configuration(_) => 500,
        }
    }

    /// Returns the message that may be shown to the caller.
    ///
    /// Never includes processor detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            PaymentError::AmountRequired => AMOUNT_REQUIRED_MESSAGE,
            PaymentError::Processor(err) => err.kind.public_message(),
            PaymentError::Configuration(_) => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// Processor kind, if this is a processor failure
    pub fn processor_kind(&self) -> Option<ProcessorErrorKind> {
        match self {
            PaymentError::Processor(err) => Some(err.kind),
            _ => None,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
