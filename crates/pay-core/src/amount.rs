//! # Amount Types
//!
//! Currency table and the caller-supplied amount.
//!
//! Callers send amounts in major units (dollars). The processor wants minor
//! units (cents). An amount is "present" under loose truthiness rules:
//! `null`, `false`, `0` and `""` count as missing. Anything else is read as a
//! number with JavaScript `Number()` rules (`true` is 1, `"20"` is 20, `[20]`
//! is 20) and forwarded, including negative values; the processor decides
//! what it accepts.

use crate::error::{PaymentError, PaymentResult, ProcessorError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    MXN,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::JPY => "jpy",
            Currency::CAD => "cad",
            Currency::AUD => "aud",
            Currency::CHF => "chf",
            Currency::MXN => "mxn",
        }
    }

    /// Returns the number of decimal places for this currency
    /// (JPY has 0 decimals, most others have 2)
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Convert a major-unit amount to the smallest currency unit (cents, etc.)
    pub fn to_minor_units(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usd" => Ok(Currency::USD),
            "eur" => Ok(Currency::EUR),
            "gbp" => Ok(Currency::GBP),
            "jpy" => Ok(Currency::JPY),
            "cad" => Ok(Currency::CAD),
            "aud" => Ok(Currency::AUD),
            "chf" => Ok(Currency::CHF),
            "mxn" => Ok(Currency::MXN),
            other => Err(PaymentError::Configuration(format!(
                "Unsupported currency: {}",
                other
            ))),
        }
    }
}

/// A caller-supplied amount that passed the presence check.
///
/// Holds the raw JSON value; numeric interpretation happens in
/// [`Amount::to_minor_units`].
#[derive(Debug, Clone, PartialEq)]
pub struct Amount(Value);

impl Amount {
    /// Presence check. Missing, `null`, `false`, `0`, `NaN` and `""` are rejected.
    pub fn from_json(value: Option<&Value>) -> PaymentResult<Self> {
        match value {
            Some(v) if is_truthy(v) => Ok(Self(v.clone())),
            _ => Err(PaymentError::AmountRequired),
        }
    }

    /// The raw value as received
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Major-unit value, if the raw value can be read as a finite number.
    pub fn as_major_units(&self) -> Option<f64> {
        coerce_number(&self.0).filter(|n| n.is_finite())
    }

    /// Convert to the processor's minor units for `currency`.
    ///
    /// An amount that reads as `NaN` or infinity fails as an invalid request,
    /// the same way the processor rejects a non-integer `amount` parameter.
    pub fn to_minor_units(&self, currency: Currency) -> PaymentResult<i64> {
        let major = self.as_major_units().ok_or_else(|| {
            ProcessorError::invalid_request(format!("Amount is not a number: {}", self.0))
                .with_param("amount")
        })?;
        Ok(currency.to_minor_units(major))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `Number(value)`; `None` stands for `NaN`.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_str(s),
        // Arrays go through their string form: [] is "", [x] is String(x)
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [Value::Null] => Some(0.0),
            [item @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => {
                coerce_number(item)
            }
            _ => None,
        },
        Value::Object(_) => None,
    }
}

fn parse_number_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let radix = match s.get(..2).map(|p| p.to_ascii_lowercase()).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }

    // "inf"/"nan" parse here but are not finite, so callers reject them
    s.parse::<f64>().ok()
}
