//! Typed view over the SDK's raw JSON side-channel
//!
//! The SDK keeps a copy of the original API response next to its typed
//! properties. Some fields only live there. They are parsed once, when the
//! domain object is built, so the adapter never does string-keyed lookups.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedAttributes {
    pub amount_capturable: Option<f64>,
    pub amount_received: Option<f64>,
    pub application_fee_amount: Option<f64>,
    pub client_secret: Option<String>,
    pub on_behalf_of: Option<String>,
    pub confirmation_method: Option<String>,
}

impl ExtendedAttributes {
    /// Extract the known attributes from a raw JSON object
    ///
    /// A missing key, an explicit null or a value of the wrong type all
    /// produce `None`; nothing here fails.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        Self {
            amount_capturable: number_attribute(raw, "amount_capturable"),
            amount_received: number_attribute(raw, "amount_received"),
            application_fee_amount: number_attribute(raw, "application_fee_amount"),
            client_secret: string_attribute(raw, "client_secret"),
            on_behalf_of: string_attribute(raw, "on_behalf_of"),
            confirmation_method: string_attribute(raw, "confirmation_method"),
        }
    }
}

fn number_attribute(raw: &Map<String, Value>, key: &'static str) -> Option<f64> {
    match raw.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let number = value.as_f64();
            if number.is_none() {
                tracing::debug!(key, value = %value, "Ignoring non-numeric raw attribute");
            }
            number
        }
    }
}

fn string_attribute(raw: &Map<String, Value>, key: &'static str) -> Option<String> {
    match raw.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(value) => {
            tracing::debug!(key, value = %value, "Ignoring non-string raw attribute");
            None
        }
    }
}
