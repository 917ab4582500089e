//! Fixture mapping used by the `map_fixture` tool
//!
//! SDK objects are mapped to transport records; application parameter
//! requests are mapped to SDK parameters. Either way the result comes back
//! as JSON.

use crate::contracts::PaymentIntentParametersApi;
use crate::error::MappingError;
use crate::mappings::{map_payment_intent_parameters, TransportAdapter};
use crate::sdk::{PaymentIntent, SetupAttempt, SetupIntent};
use clap::ValueEnum;
use serde_json::Value;
use thiserror::Error;

/// Kind of object stored in a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureKind {
    PaymentIntent,
    SetupIntent,
    SetupAttempt,
    PaymentIntentParams,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Fixture does not match the {kind:?} shape: {source}")]
    Shape {
        kind: FixtureKind,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("Failed to serialize mapped fixture: {0}")]
    Serialize(serde_json::Error),
}

/// Map one fixture of the given kind and return the result as JSON
pub fn map_fixture(
    adapter: &TransportAdapter,
    kind: FixtureKind,
    value: Value,
) -> Result<Value, FixtureError> {
    let shape = |source: serde_json::Error| FixtureError::Shape { kind, source };

    let mapped = match kind {
        FixtureKind::PaymentIntent => {
            let intent = PaymentIntent::from_json(value).map_err(shape)?;
            serde_json::to_value(adapter.map_payment_intent(&intent)?)
        }
        FixtureKind::SetupIntent => {
            let intent: SetupIntent = serde_json::from_value(value).map_err(shape)?;
            serde_json::to_value(adapter.map_setup_intent(&intent)?)
        }
        FixtureKind::SetupAttempt => {
            let attempt: SetupAttempt = serde_json::from_value(value).map_err(shape)?;
            serde_json::to_value(adapter.map_setup_attempt(&attempt)?)
        }
        FixtureKind::PaymentIntentParams => {
            let params: PaymentIntentParametersApi =
                serde_json::from_value(value).map_err(shape)?;
            serde_json::to_value(map_payment_intent_parameters(&params)?)
        }
    };

    mapped.map_err(FixtureError::Serialize)
}
