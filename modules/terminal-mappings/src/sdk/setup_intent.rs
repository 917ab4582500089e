use super::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Setup intent as held by the terminal SDK
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetupIntent {
    pub id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub customer: Option<String>,
    pub metadata: Option<Metadata>,
    pub usage: SetupIntentUsage,
    pub status: SetupIntentStatus,
    pub latest_attempt: Option<SetupAttempt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupIntentUsage {
    OnSession,
    OffSession,
    #[serde(untagged)]
    Unknown(String),
}

impl SetupIntentUsage {
    pub fn as_str(&self) -> &str {
        match self {
            Self::OnSession => "on_session",
            Self::OffSession => "off_session",
            Self::Unknown(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    Canceled,
    Succeeded,
    #[serde(untagged)]
    Unknown(String),
}

impl SetupIntentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::RequiresPaymentMethod => "requires_payment_method",
            Self::RequiresConfirmation => "requires_confirmation",
            Self::RequiresAction => "requires_action",
            Self::Processing => "processing",
            Self::Canceled => "canceled",
            Self::Succeeded => "succeeded",
            Self::Unknown(raw) => raw,
        }
    }
}

/// One attempt at confirming a setup intent
///
/// The SDK exposes `status` as a plain string rather than an enum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetupAttempt {
    pub id: String,
    pub application: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub customer: Option<String>,
    pub on_behalf_of: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_details: Option<SetupAttemptPaymentMethodDetails>,
    pub setup_intent: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetupAttemptPaymentMethodDetails {
    pub card_present: Option<SetupAttemptCardPresentDetails>,
    pub interac_present: Option<SetupAttemptCardPresentDetails>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetupAttemptCardPresentDetails {
    /// EMV authorization data returned by the card
    pub emv_auth_data: Option<String>,
    /// Reusable card payment method generated from this attempt
    pub generated_card: Option<String>,
}
