//! Transport adapter between SDK domain objects and plugin transport records
//!
//! SDK → transport mappings live on `TransportAdapter` because the handling of
//! forward-compatibility enum cases depends on `MappingConfig`. Transport →
//! SDK mappings are free functions, total over the schema's declared cases.
//!
//! Every mapping is a pure function of its input: no I/O, no caching, no
//! shared mutable state. An adapter can be shared freely across threads.

pub mod parameters;
pub mod payment_intent;
pub mod setup_intent;

pub use parameters::{
    map_capture_method_api, map_payment_intent_parameters, map_payment_intent_usage,
    map_payment_method_options, map_payment_method_type, map_setup_intent_usage_api,
};

use crate::config::{MappingConfig, UnknownEnumPolicy};
use crate::error::MappingError;

#[derive(Debug, Clone, Default)]
pub struct TransportAdapter {
    config: MappingConfig,
}

impl TransportAdapter {
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    /// Create an adapter from environment variables
    pub fn from_env() -> Result<Self, MappingError> {
        Ok(Self::new(MappingConfig::from_env()?))
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Apply the configured policy to an SDK enum case this adapter does not know
    fn unknown_case<T>(
        &self,
        kind: &'static str,
        raw: &str,
        passthrough: impl FnOnce(String) -> T,
    ) -> Result<T, MappingError> {
        match self.config.unknown_enum_policy {
            UnknownEnumPolicy::Reject => {
                tracing::error!(kind, value = raw, "Rejecting unsupported SDK enum case");
                Err(MappingError::UnsupportedEnumCase {
                    kind,
                    value: raw.to_string(),
                })
            }
            UnknownEnumPolicy::Passthrough => {
                tracing::warn!(kind, value = raw, "Passing through unsupported SDK enum case");
                Ok(passthrough(raw.to_string()))
            }
        }
    }
}
