use super::charge::Charge;
use super::extended_attributes::ExtendedAttributes;
use super::payment_method::PaymentMethod;
use super::Metadata;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment intent as held by the terminal SDK
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentIntent {
    /// Absent for intents created offline and not yet forwarded
    pub id: Option<String>,
    pub amount: u64,
    pub amount_details: Option<AmountDetails>,
    pub amount_tip: Option<Decimal>,
    pub capture_method: CaptureMethod,
    #[serde(default)]
    pub charges: Vec<Charge>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub currency: String,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_method_id: Option<String>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub status: PaymentIntentStatus,

    /// Fields only present in the SDK's raw JSON copy
    #[serde(skip)]
    pub extended: ExtendedAttributes,
}

impl PaymentIntent {
    /// Parse an SDK payment intent from its JSON representation
    ///
    /// Typed fields are deserialized directly; the same object is then read
    /// once more for the attributes the SDK only exposes in its raw copy.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let extended = value
            .as_object()
            .map(ExtendedAttributes::from_raw)
            .unwrap_or_default();

        let mut intent: PaymentIntent = serde_json::from_value(value)?;
        intent.extended = extended;
        Ok(intent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresCapture,
    Processing,
    Canceled,
    Succeeded,
    RequiresAction,
    #[serde(untagged)]
    Unknown(String),
}

impl PaymentIntentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::RequiresPaymentMethod => "requires_payment_method",
            Self::RequiresConfirmation => "requires_confirmation",
            Self::RequiresCapture => "requires_capture",
            Self::Processing => "processing",
            Self::Canceled => "canceled",
            Self::Succeeded => "succeeded",
            Self::RequiresAction => "requires_action",
            Self::Unknown(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    Manual,
    Automatic,
    #[serde(untagged)]
    Unknown(String),
}

impl CaptureMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
            Self::Unknown(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AmountDetails {
    pub tip: Option<Tip>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tip {
    pub amount: Option<Decimal>,
}

/// Reader-side payment collection status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    NotReady,
    Ready,
    WaitingForInput,
    Processing,
    #[serde(untagged)]
    Unknown(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotReady => "not_ready",
            Self::Ready => "ready",
            Self::WaitingForInput => "waiting_for_input",
            Self::Processing => "processing",
            Self::Unknown(raw) => raw,
        }
    }
}
