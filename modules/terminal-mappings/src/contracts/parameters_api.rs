use super::payment_intent_api::{CaptureMethodApi, PaymentIntentUsageApi, PaymentMethodTypeApi};
use crate::sdk::Metadata;
use serde::{Deserialize, Serialize};

/// Payment intent creation request as sent by the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentParametersApi {
    pub amount: i64,
    pub currency: String,
    pub payment_method_types: Vec<PaymentMethodTypeApi>,
    pub capture_method: CaptureMethodApi,
    #[serde(default)]
    pub metadata: Metadata,
    pub description: Option<String>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub receipt_email: Option<String>,
    pub customer_id: Option<String>,
    pub application_fee_amount: Option<i64>,
    pub transfer_data_destination: Option<String>,
    pub transfer_group: Option<String>,
    pub on_behalf_of: Option<String>,
    pub setup_future_usage: Option<PaymentIntentUsageApi>,
    pub payment_method_options_parameters: Option<PaymentMethodOptionsParametersApi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOptionsParametersApi {
    pub card_present_parameters: CardPresentParametersApi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPresentParametersApi {
    #[serde(default)]
    pub request_extended_authorization: bool,
    #[serde(default)]
    pub request_incremental_authorization_support: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_request_deserializes() {
        let params: PaymentIntentParametersApi = serde_json::from_value(json!({
            "amount": 1000,
            "currency": "usd",
            "paymentMethodTypes": ["cardPresent"],
            "captureMethod": "manual"
        }))
        .unwrap();

        assert_eq!(params.amount, 1000);
        assert_eq!(params.payment_method_types, vec![PaymentMethodTypeApi::CardPresent]);
        assert_eq!(params.capture_method, CaptureMethodApi::Manual);
        assert!(params.metadata.is_empty());
        assert!(params.setup_future_usage.is_none());
        assert!(params.payment_method_options_parameters.is_none());
    }
}
