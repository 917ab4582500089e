use crate::sdk::parameters::ParameterError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("Unsupported {kind} value '{value}'")]
    UnsupportedEnumCase { kind: &'static str, value: String },

    #[error("Parameter validation failed: {0}")]
    ParameterValidation(#[from] ParameterError),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl MappingError {
    /// Check if the SDK reported an enum case this adapter does not know
    pub fn is_unsupported_enum(&self) -> bool {
        matches!(self, MappingError::UnsupportedEnumCase { .. })
    }

    /// Check if the failure was caused by the caller's input rather than the SDK
    ///
    /// An object handed over without a required field counts as caller input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MappingError::ParameterValidation(_) | MappingError::MissingRequiredField(_)
        )
    }
}
