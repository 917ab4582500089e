use crate::sdk::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentApi {
    pub amount: f64,
    pub amount_capturable: Option<f64>,
    pub amount_details: Option<AmountDetailsApi>,
    pub amount_received: Option<f64>,
    pub amount_tip: Option<f64>,
    pub application_fee_amount: Option<f64>,
    pub application_id: Option<String>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub capture_method: CaptureMethodApi,
    pub charges: Vec<ChargeApi>,
    pub client_secret: Option<String>,
    pub confirmation_method: Option<ConfirmationMethodApi>,
    pub created: DateTime<Utc>,
    pub currency: String,
    pub customer_id: Option<String>,
    pub description: Option<String>,
    pub id: String,
    pub invoice_id: Option<String>,
    pub metadata: Metadata,
    pub on_behalf_of: Option<String>,
    pub payment_method: Option<PaymentMethodApi>,
    pub payment_method_id: Option<String>,
    pub receipt_email: Option<String>,
    pub review_id: Option<String>,
    pub setup_future_usage: Option<PaymentIntentUsageApi>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub status: PaymentIntentStatusApi,
    pub transfer_group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentIntentStatusApi {
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

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaptureMethodApi {
    Manual,
    Automatic,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmationMethodApi {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentIntentUsageApi {
    OnSession,
    OffSession,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountDetailsApi {
    pub tip: Option<TipApi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipApi {
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeApi {
    pub id: String,
    pub amount: f64,
    pub amount_refunded: f64,
    pub currency: String,
    pub status: ChargeStatusApi,
    pub paid: bool,
    pub captured: bool,
    pub description: Option<String>,
    pub metadata: Metadata,
    pub statement_descriptor_suffix: Option<String>,
    pub calculated_statement_descriptor: Option<String>,
    pub authorization_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChargeStatusApi {
    Succeeded,
    Pending,
    Failed,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodApi {
    pub id: String,
    #[serde(rename = "type")]
    pub payment_method_type: PaymentMethodTypeApi,
    pub customer_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub metadata: Metadata,
    pub card_present: Option<CardPresentDetailsApi>,
    pub interac_present: Option<CardPresentDetailsApi>,
}

/// Payment method types as tagged by the plugin schema
///
/// `InteractPresent` keeps the schema's historical spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethodTypeApi {
    CardPresent,
    Card,
    InteractPresent,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPresentDetailsApi {
    pub brand: Option<String>,
    pub country: Option<String>,
    pub exp_month: u32,
    pub exp_year: u32,
    pub funding: Option<String>,
    pub last4: Option<String>,
    pub fingerprint: Option<String>,
    pub cardholder_name: Option<String>,
}

/// Reader payment status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatusApi {
    NotReady,
    Ready,
    WaitingForInput,
    Processing,
    #[serde(untagged)]
    Unknown(String),
}
