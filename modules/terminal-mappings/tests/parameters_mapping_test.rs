use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use terminal_mappings_rs::contracts::{CaptureMethodApi, PaymentIntentParametersApi};
use terminal_mappings_rs::mappings::map_payment_intent_parameters;
use terminal_mappings_rs::sdk::{CaptureMethod, ParameterError};
use terminal_mappings_rs::MappingError;

fn load_params(name: &str) -> PaymentIntentParametersApi {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));
    serde_json::from_str(&contents).unwrap_or_else(|_| panic!("Failed to parse JSON: {:?}", path))
}

fn minimal_params(extra: Value) -> PaymentIntentParametersApi {
    let mut request = json!({
        "amount": 1000,
        "currency": "usd",
        "paymentMethodTypes": ["cardPresent"],
        "captureMethod": "automatic"
    });
    if let (Some(base), Some(extra)) = (request.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(request).unwrap()
}

fn validation_error(err: MappingError) -> ParameterError {
    match err {
        MappingError::ParameterValidation(inner) => inner,
        other => panic!("expected a parameter validation error, got {:?}", other),
    }
}

#[test]
fn test_full_request_fixture() {
    let params = map_payment_intent_parameters(&load_params("payment_intent_params.json")).unwrap();
    let config = params.as_config();

    assert_eq!(params.amount(), 4200);
    assert_eq!(params.currency(), "cad");
    assert_eq!(params.capture_method(), &CaptureMethod::Manual);
    assert_eq!(config.payment_method_types, vec!["card_present", "interact_present"]);
    assert_eq!(config.metadata.get("order_id").map(String::as_str), Some("ord_9920"));
    assert_eq!(config.description.as_deref(), Some("Table 12"));
    assert_eq!(config.statement_descriptor.as_deref(), Some("BISTRO 12"));
    assert_eq!(config.statement_descriptor_suffix.as_deref(), Some("TBL12"));
    assert_eq!(config.receipt_email.as_deref(), Some("guest@example.com"));
    assert_eq!(config.customer_id.as_deref(), Some("cus_PfQ7a1b2c3"));
    assert_eq!(config.application_fee_amount, Some(210));
    assert_eq!(config.transfer_data_destination.as_deref(), Some("acct_1Nv0FGQ9RKHgCVdK"));
    assert_eq!(config.transfer_group.as_deref(), Some("group_ord_9920"));
    assert_eq!(config.on_behalf_of.as_deref(), Some("acct_1Nv0FGQ9RKHgCVdK"));
    assert_eq!(config.setup_future_usage.as_deref(), Some("off_session"));

    let card_present = &config.payment_method_options.as_ref().unwrap().card_present;
    assert!(card_present.request_extended_authorization);
    assert!(card_present.request_incremental_authorization_support);
}

#[test]
fn test_sdk_serialization_uses_wire_tokens() {
    let params = map_payment_intent_parameters(&load_params("payment_intent_params.json")).unwrap();
    let json = serde_json::to_value(&params).unwrap();

    assert_eq!(json["payment_method_types"], json!(["card_present", "interact_present"]));
    assert_eq!(json["capture_method"], json!("manual"));
    assert_eq!(json["setup_future_usage"], json!("off_session"));
    assert_eq!(json["customer"], json!("cus_PfQ7a1b2c3"));
    assert_eq!(json["currency"], json!("cad"));
}

#[test]
fn test_minimal_request_leaves_optionals_unset() {
    let params = map_payment_intent_parameters(&minimal_params(json!({}))).unwrap();
    let config = params.as_config();

    assert_eq!(config.payment_method_types, vec!["card_present"]);
    assert_eq!(config.capture_method, CaptureMethod::Automatic);
    assert!(config.metadata.is_empty());
    assert!(config.description.is_none());
    assert!(config.application_fee_amount.is_none());
    assert!(config.setup_future_usage.is_none());
    assert!(config.payment_method_options.is_none());
}

#[test]
fn test_on_session_usage_token() {
    let params =
        map_payment_intent_parameters(&minimal_params(json!({ "setupFutureUsage": "onSession" })))
            .unwrap();
    assert_eq!(params.as_config().setup_future_usage.as_deref(), Some("on_session"));
}

#[test]
fn test_card_payment_method_token() {
    let params =
        map_payment_intent_parameters(&minimal_params(json!({ "paymentMethodTypes": ["card"] })))
            .unwrap();
    assert_eq!(params.as_config().payment_method_types, vec!["card"]);
}

#[test]
fn test_negative_amount_rejected() {
    let err = map_payment_intent_parameters(&minimal_params(json!({ "amount": -5 }))).unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(validation_error(err), ParameterError::NegativeAmount(-5));
}

#[test]
fn test_zero_amount_rejected() {
    let err = map_payment_intent_parameters(&minimal_params(json!({ "amount": 0 }))).unwrap_err();
    assert_eq!(validation_error(err), ParameterError::ZeroAmount);
}

#[test]
fn test_negative_application_fee_rejected() {
    let err =
        map_payment_intent_parameters(&minimal_params(json!({ "applicationFeeAmount": -1 })))
            .unwrap_err();
    assert_eq!(validation_error(err), ParameterError::NegativeApplicationFee(-1));
}

#[test]
fn test_application_fee_above_amount_rejected() {
    let err =
        map_payment_intent_parameters(&minimal_params(json!({ "applicationFeeAmount": 1001 })))
            .unwrap_err();
    assert_eq!(
        validation_error(err),
        ParameterError::ApplicationFeeExceedsAmount {
            fee: 1001,
            amount: 1000
        }
    );
}

#[test]
fn test_invalid_currency_rejected() {
    let err = map_payment_intent_parameters(&minimal_params(json!({ "currency": "us" })))
        .unwrap_err();
    assert_eq!(validation_error(err), ParameterError::InvalidCurrency("us".to_string()));
}

#[test]
fn test_empty_payment_method_types_rejected() {
    let err =
        map_payment_intent_parameters(&minimal_params(json!({ "paymentMethodTypes": [] })))
            .unwrap_err();
    assert_eq!(validation_error(err), ParameterError::NoPaymentMethodTypes);
}

#[test]
fn test_long_statement_descriptor_rejected() {
    let err = map_payment_intent_parameters(&minimal_params(json!({
        "statementDescriptor": "A VERY LONG DESCRIPTOR NAME"
    })))
    .unwrap_err();

    assert_eq!(
        validation_error(err),
        ParameterError::StatementDescriptorTooLong {
            field: "statement_descriptor",
            len: 27,
            max: 22
        }
    );
}

#[test]
fn test_invalid_receipt_email_rejected() {
    let err = map_payment_intent_parameters(&minimal_params(json!({
        "receiptEmail": "guest.example.com"
    })))
    .unwrap_err();
    assert_eq!(
        validation_error(err),
        ParameterError::InvalidReceiptEmail("guest.example.com".to_string())
    );
}

#[test]
fn test_incremental_authorization_requires_manual_capture() {
    let request = minimal_params(json!({
        "paymentMethodOptionsParameters": {
            "cardPresentParameters": {
                "requestIncrementalAuthorizationSupport": true
            }
        }
    }));
    assert_eq!(request.capture_method, CaptureMethodApi::Automatic);

    let err = map_payment_intent_parameters(&request).unwrap_err();
    assert_eq!(
        validation_error(err),
        ParameterError::IncrementalAuthorizationRequiresManualCapture
    );
}

#[test]
fn test_extended_authorization_alone_is_allowed() {
    let params = map_payment_intent_parameters(&minimal_params(json!({
        "paymentMethodOptionsParameters": {
            "cardPresentParameters": {
                "requestExtendedAuthorization": true
            }
        }
    })))
    .unwrap();

    let card_present = &params.as_config().payment_method_options.as_ref().unwrap().card_present;
    assert!(card_present.request_extended_authorization);
    assert!(!card_present.request_incremental_authorization_support);
}

#[test]
fn test_wrong_case_capture_method_rejected() {
    let request = minimal_params(json!({ "captureMethod": "Manual" }));
    assert_eq!(request.capture_method, CaptureMethodApi::Unknown("Manual".to_string()));

    let err = map_payment_intent_parameters(&request).unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(
        validation_error(err),
        ParameterError::UnsupportedCaptureMethod("Manual".to_string())
    );
}

#[test]
fn test_snake_case_payment_method_tag_rejected() {
    let err = map_payment_intent_parameters(&minimal_params(json!({
        "paymentMethodTypes": ["card_present"]
    })))
    .unwrap_err();

    assert_eq!(
        validation_error(err),
        ParameterError::UnsupportedPaymentMethodType("card_present".to_string())
    );
}
