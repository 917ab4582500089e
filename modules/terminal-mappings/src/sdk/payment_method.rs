use super::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment method collected by the reader
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub payment_method_type: PaymentMethodType,
    pub customer: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub metadata: Option<Metadata>,
    pub card_present: Option<CardPresentDetails>,
    pub interac_present: Option<CardPresentDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    CardPresent,
    Card,
    InteracPresent,
    #[serde(untagged)]
    Unknown(String),
}

impl PaymentMethodType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::CardPresent => "card_present",
            Self::Card => "card",
            Self::InteracPresent => "interac_present",
            Self::Unknown(raw) => raw,
        }
    }
}

/// Card details read from a card-present or Interac-present payment method
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardPresentDetails {
    pub brand: Option<String>,
    pub country: Option<String>,
    pub exp_month: u32,
    pub exp_year: u32,
    pub funding: Option<String>,
    pub last4: Option<String>,
    pub fingerprint: Option<String>,
    pub cardholder_name: Option<String>,
}
