use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use terminal_mappings_rs::fixtures::{map_fixture, FixtureError, FixtureKind};
use terminal_mappings_rs::{MappingConfig, MappingError, TransportAdapter, UnknownEnumPolicy};

fn load_fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));
    serde_json::from_str(&contents).unwrap_or_else(|_| panic!("Failed to parse JSON: {:?}", path))
}

#[test]
fn test_every_fixture_maps() {
    let adapter = TransportAdapter::default();
    let cases = [
        (FixtureKind::PaymentIntent, "payment_intent.json"),
        (FixtureKind::SetupIntent, "setup_intent.json"),
        (FixtureKind::SetupAttempt, "setup_attempt.json"),
        (FixtureKind::PaymentIntentParams, "payment_intent_params.json"),
    ];

    for (kind, name) in cases {
        let output = map_fixture(&adapter, kind, load_fixture(name))
            .unwrap_or_else(|err| panic!("{} failed to map as {:?}: {}", name, kind, err));
        assert!(output.is_object(), "{} did not map to a JSON object", name);
    }
}

#[test]
fn test_payment_intent_fixture_output() {
    let output = map_fixture(
        &TransportAdapter::default(),
        FixtureKind::PaymentIntent,
        load_fixture("payment_intent.json"),
    )
    .unwrap();

    assert_eq!(output["id"], json!("pi_3OqLkR2eZvKYlo2C0x1y2z3a"));
    assert_eq!(output["status"], json!("requiresCapture"));
    assert_eq!(output["clientSecret"], json!("pi_3OqLkR2eZvKYlo2C0x1y2z3a_secret_4b5c6d"));
    assert_eq!(output["charges"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_setup_attempt_fixture_output() {
    let output = map_fixture(
        &TransportAdapter::default(),
        FixtureKind::SetupAttempt,
        load_fixture("setup_attempt.json"),
    )
    .unwrap();

    assert_eq!(output["status"], json!("succeeded"));
    assert!(output["applicationId"].is_null());
    assert_eq!(output["onBehalfOf"], json!("acct_1Nv0FGQ9RKHgCVdK"));
    assert_eq!(
        output["paymentMethodDetails"]["interacPresent"]["emvAuthData"],
        json!("8A023030")
    );
    assert!(output["paymentMethodDetails"]["cardPresent"].is_null());
}

#[test]
fn test_parameters_fixture_output() {
    let output = map_fixture(
        &TransportAdapter::default(),
        FixtureKind::PaymentIntentParams,
        load_fixture("payment_intent_params.json"),
    )
    .unwrap();

    assert_eq!(output["currency"], json!("cad"));
    assert_eq!(output["payment_method_types"], json!(["card_present", "interact_present"]));
    assert_eq!(output["capture_method"], json!("manual"));
}

#[test]
fn test_fixture_of_wrong_kind_is_shape_error() {
    let err = map_fixture(
        &TransportAdapter::default(),
        FixtureKind::PaymentIntentParams,
        load_fixture("setup_intent.json"),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        FixtureError::Shape {
            kind: FixtureKind::PaymentIntentParams,
            ..
        }
    ));
}

#[test]
fn test_unknown_status_follows_policy() {
    let mut raw = load_fixture("setup_attempt.json");
    raw["status"] = json!("expired");

    let err = map_fixture(&TransportAdapter::default(), FixtureKind::SetupAttempt, raw.clone())
        .unwrap_err();
    assert!(matches!(
        err,
        FixtureError::Mapping(MappingError::UnsupportedEnumCase { .. })
    ));

    let lenient = TransportAdapter::new(MappingConfig {
        unknown_enum_policy: UnknownEnumPolicy::Passthrough,
        ..MappingConfig::default()
    });
    let output = map_fixture(&lenient, FixtureKind::SetupAttempt, raw).unwrap();
    assert_eq!(output["status"], json!("expired"));
}
