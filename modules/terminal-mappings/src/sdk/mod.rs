//! Domain objects as produced by the card-present terminal SDK
//!
//! These records mirror the SDK's JSON shapes (snake_case field names and
//! enum tokens). The adapter treats them as read-only input.

pub mod charge;
pub mod extended_attributes;
pub mod parameters;
pub mod payment_intent;
pub mod payment_method;
pub mod setup_intent;

use std::collections::HashMap;

/// Common metadata type
pub type Metadata = HashMap<String, String>;

pub use charge::{Charge, ChargeStatus};
pub use extended_attributes::ExtendedAttributes;
pub use parameters::{
    CardPresentParameters, ParameterError, PaymentIntentParameters,
    PaymentIntentParametersConfig, PaymentMethodOptionsParameters,
};
pub use payment_intent::{
    AmountDetails, CaptureMethod, PaymentIntent, PaymentIntentStatus, PaymentStatus, Tip,
};
pub use payment_method::{CardPresentDetails, PaymentMethod, PaymentMethodType};
pub use setup_intent::{
    SetupAttempt, SetupAttemptCardPresentDetails, SetupAttemptPaymentMethodDetails, SetupIntent,
    SetupIntentStatus, SetupIntentUsage,
};
