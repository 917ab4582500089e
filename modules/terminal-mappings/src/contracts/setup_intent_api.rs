use crate::sdk::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupIntentApi {
    pub id: String,
    pub created: DateTime<Utc>,
    pub customer_id: Option<String>,
    pub metadata: Metadata,
    pub usage: SetupIntentUsageApi,
    pub status: SetupIntentStatusApi,
    pub latest_attempt: Option<SetupAttemptApi>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetupIntentUsageApi {
    OnSession,
    OffSession,
    #[serde(untagged)]
    Unknown(String),
}

/// Setup intent status; the schema spells the canceled case `cancelled`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetupIntentStatusApi {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    Cancelled,
    Succeeded,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupAttemptApi {
    pub id: String,
    pub application_id: Option<String>,
    pub created: DateTime<Utc>,
    pub customer_id: Option<String>,
    pub on_behalf_of: Option<String>,
    pub payment_method_id: Option<String>,
    pub payment_method_details: Option<SetupAttemptPaymentMethodDetailsApi>,
    pub setup_intent_id: String,
    pub status: SetupAttemptStatusApi,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetupAttemptStatusApi {
    RequiresConfirmation,
    RequiresAction,
    Processing,
    Succeeded,
    Failed,
    Abandoned,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupAttemptPaymentMethodDetailsApi {
    pub card_present: Option<SetupAttemptCardPresentDetailsApi>,
    pub interac_present: Option<SetupAttemptCardPresentDetailsApi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupAttemptCardPresentDetailsApi {
    pub emv_auth_data: Option<String>,
    pub generated_card: Option<String>,
}
