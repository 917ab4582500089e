//! SDK-native payment intent parameters
//!
//! Parameters are described by a plain config struct and turned into a
//! `PaymentIntentParameters` by a single validating constructor. The limits
//! checked here are the ones the SDK enforces before it talks to the reader.

use super::payment_intent::CaptureMethod;
use super::Metadata;
use serde::Serialize;
use thiserror::Error;

/// Payment method type tokens accepted by the SDK wire protocol
pub const PAYMENT_METHOD_TYPE_TOKENS: [&str; 3] = ["card_present", "card", "interact_present"];

pub const MAX_STATEMENT_DESCRIPTOR_LEN: usize = 22;
pub const MAX_METADATA_KEYS: usize = 50;
pub const MAX_METADATA_KEY_LEN: usize = 40;
pub const MAX_METADATA_VALUE_LEN: usize = 500;

/// Parameter validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Amount must be non-negative, got {0}")]
    NegativeAmount(i64),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Application fee amount must be non-negative, got {0}")]
    NegativeApplicationFee(i64),

    #[error("Application fee amount ({fee}) must not exceed amount ({amount})")]
    ApplicationFeeExceedsAmount { fee: u64, amount: u64 },

    #[error("Currency must be a 3-letter code (ISO 4217), got: {0}")]
    InvalidCurrency(String),

    #[error("At least one payment method type is required")]
    NoPaymentMethodTypes,

    #[error("Unsupported payment method type: {0}")]
    UnsupportedPaymentMethodType(String),

    #[error("Unsupported capture method: {0}")]
    UnsupportedCaptureMethod(String),

    #[error("{field} must be at most {max} characters, got {len}")]
    StatementDescriptorTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Metadata must have at most {max} keys, got {count}")]
    TooManyMetadataKeys { count: usize, max: usize },

    #[error("Metadata key '{0}' exceeds {max} characters", max = MAX_METADATA_KEY_LEN)]
    MetadataKeyTooLong(String),

    #[error("Metadata value for key '{0}' exceeds {max} characters", max = MAX_METADATA_VALUE_LEN)]
    MetadataValueTooLong(String),

    #[error("Receipt email is not a valid address: {0}")]
    InvalidReceiptEmail(String),

    #[error("Incremental authorization support requires manual capture")]
    IncrementalAuthorizationRequiresManualCapture,
}

/// Card-present specific options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardPresentParameters {
    pub request_extended_authorization: bool,
    pub request_incremental_authorization_support: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentMethodOptionsParameters {
    pub card_present: CardPresentParameters,
}

/// Unvalidated description of a payment intent to create
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentIntentParametersConfig {
    pub amount: u64,
    pub currency: String,
    pub payment_method_types: Vec<String>,
    pub capture_method: CaptureMethod,
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
    #[serde(rename = "customer", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data_destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_options: Option<PaymentMethodOptionsParameters>,
}

impl PaymentIntentParametersConfig {
    /// Config with the SDK defaults: card-present only, automatic capture
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            payment_method_types: vec!["card_present".to_string()],
            capture_method: CaptureMethod::Automatic,
            metadata: Metadata::new(),
            description: None,
            statement_descriptor: None,
            statement_descriptor_suffix: None,
            receipt_email: None,
            customer_id: None,
            application_fee_amount: None,
            transfer_data_destination: None,
            transfer_group: None,
            on_behalf_of: None,
            setup_future_usage: None,
            payment_method_options: None,
        }
    }
}

/// Validated payment intent parameters, ready to hand to the SDK
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PaymentIntentParameters {
    config: PaymentIntentParametersConfig,
}

impl PaymentIntentParameters {
    /// Validate a config and build parameters from it
    ///
    /// The currency is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns the first `ParameterError` whose rule the config violates
    pub fn build(mut config: PaymentIntentParametersConfig) -> Result<Self, ParameterError> {
        if config.amount == 0 {
            return Err(ParameterError::ZeroAmount);
        }

        if !is_valid_currency(&config.currency) {
            return Err(ParameterError::InvalidCurrency(config.currency));
        }
        config.currency = config.currency.to_lowercase();

        if config.payment_method_types.is_empty() {
            return Err(ParameterError::NoPaymentMethodTypes);
        }
        if let Some(unsupported) = config
            .payment_method_types
            .iter()
            .find(|t| !PAYMENT_METHOD_TYPE_TOKENS.contains(&t.as_str()))
        {
            return Err(ParameterError::UnsupportedPaymentMethodType(unsupported.clone()));
        }

        if let CaptureMethod::Unknown(raw) = &config.capture_method {
            return Err(ParameterError::UnsupportedCaptureMethod(raw.clone()));
        }

        validate_descriptor("statement_descriptor", config.statement_descriptor.as_deref())?;
        validate_descriptor(
            "statement_descriptor_suffix",
            config.statement_descriptor_suffix.as_deref(),
        )?;

        if let Some(fee) = config.application_fee_amount {
            if fee > config.amount {
                return Err(ParameterError::ApplicationFeeExceedsAmount {
                    fee,
                    amount: config.amount,
                });
            }
        }

        validate_metadata(&config.metadata)?;

        if let Some(ref email) = config.receipt_email {
            if !is_valid_email(email) {
                return Err(ParameterError::InvalidReceiptEmail(email.clone()));
            }
        }

        if let Some(ref options) = config.payment_method_options {
            if options.card_present.request_incremental_authorization_support
                && config.capture_method != CaptureMethod::Manual
            {
                return Err(ParameterError::IncrementalAuthorizationRequiresManualCapture);
            }
        }

        Ok(Self { config })
    }

    pub fn amount(&self) -> u64 {
        self.config.amount
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    pub fn capture_method(&self) -> &CaptureMethod {
        &self.config.capture_method
    }

    pub fn as_config(&self) -> &PaymentIntentParametersConfig {
        &self.config
    }

    pub fn into_config(self) -> PaymentIntentParametersConfig {
        self.config
    }
}

/// Check currency is 3 ASCII letters
fn is_valid_currency(currency: &str) -> bool {
    currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

fn validate_descriptor(field: &'static str, value: Option<&str>) -> Result<(), ParameterError> {
    if let Some(value) = value {
        let len = value.chars().count();
        if len > MAX_STATEMENT_DESCRIPTOR_LEN {
            return Err(ParameterError::StatementDescriptorTooLong {
                field,
                len,
                max: MAX_STATEMENT_DESCRIPTOR_LEN,
            });
        }
    }
    Ok(())
}

fn validate_metadata(metadata: &Metadata) -> Result<(), ParameterError> {
    if metadata.len() > MAX_METADATA_KEYS {
        return Err(ParameterError::TooManyMetadataKeys {
            count: metadata.len(),
            max: MAX_METADATA_KEYS,
        });
    }

    for (key, value) in metadata {
        if key.chars().count() > MAX_METADATA_KEY_LEN {
            return Err(ParameterError::MetadataKeyTooLong(key.clone()));
        }
        if value.chars().count() > MAX_METADATA_VALUE_LEN {
            return Err(ParameterError::MetadataValueTooLong(key.clone()));
        }
    }

    Ok(())
}
