use crate::error::MappingError;
use std::env;

/// Largest scale `rust_decimal` can represent
const MAX_AMOUNT_SCALE: u32 = 28;

/// What the adapter does with an SDK enum case it was not built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownEnumPolicy {
    /// Fail the mapping with `MappingError::UnsupportedEnumCase`
    #[default]
    Reject,
    /// Emit the transport `Unknown(raw)` variant and let the caller decide
    Passthrough,
}

impl UnknownEnumPolicy {
    pub fn parse(value: &str) -> Result<Self, MappingError> {
        match value.trim().to_lowercase().as_str() {
            "reject" => Ok(UnknownEnumPolicy::Reject),
            "passthrough" => Ok(UnknownEnumPolicy::Passthrough),
            other => Err(MappingError::ConfigError(format!(
                "TERMINAL_MAPPING_UNKNOWN_ENUMS must be 'reject' or 'passthrough', got '{}'",
                other
            ))),
        }
    }
}

/// Adapter policy configuration parsed from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConfig {
    pub unknown_enum_policy: UnknownEnumPolicy,
    /// Map confirmation method "manual" to the automatic transport case,
    /// as plugin releases before the fix did
    pub legacy_confirmation_method: bool,
    /// Decimal places kept when a fixed-point amount is widened to a float
    pub amount_scale: u32,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            unknown_enum_policy: UnknownEnumPolicy::Reject,
            legacy_confirmation_method: false,
            amount_scale: 2,
        }
    }
}

impl MappingConfig {
    pub fn from_env() -> Result<Self, MappingError> {
        let defaults = Self::default();

        let unknown_enum_policy = match env::var("TERMINAL_MAPPING_UNKNOWN_ENUMS") {
            Ok(value) => UnknownEnumPolicy::parse(&value)?,
            Err(_) => defaults.unknown_enum_policy,
        };

        let legacy_confirmation_method = env::var("TERMINAL_MAPPING_LEGACY_CONFIRMATION_METHOD")
            .unwrap_or_else(|_| defaults.legacy_confirmation_method.to_string())
            .parse::<bool>()
            .map_err(|_| {
                MappingError::ConfigError(
                    "TERMINAL_MAPPING_LEGACY_CONFIRMATION_METHOD must be 'true' or 'false'"
                        .to_string(),
                )
            })?;

        let amount_scale: u32 = env::var("TERMINAL_MAPPING_AMOUNT_SCALE")
            .unwrap_or_else(|_| defaults.amount_scale.to_string())
            .parse()
            .map_err(|_| {
                MappingError::ConfigError(
                    "TERMINAL_MAPPING_AMOUNT_SCALE must be a non-negative integer".to_string(),
                )
            })?;

        if amount_scale > MAX_AMOUNT_SCALE {
            return Err(MappingError::ConfigError(format!(
                "TERMINAL_MAPPING_AMOUNT_SCALE must be at most {}, got {}",
                MAX_AMOUNT_SCALE, amount_scale
            )));
        }

        Ok(MappingConfig {
            unknown_enum_policy,
            legacy_confirmation_method,
            amount_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MappingConfig::default();

        assert_eq!(config.unknown_enum_policy, UnknownEnumPolicy::Reject);
        assert!(!config.legacy_confirmation_method);
        assert_eq!(config.amount_scale, 2);
    }

    #[test]
    fn test_policy_parse_is_case_insensitive() {
        assert_eq!(
            UnknownEnumPolicy::parse(" Passthrough ").unwrap(),
            UnknownEnumPolicy::Passthrough
        );
        assert_eq!(UnknownEnumPolicy::parse("REJECT").unwrap(), UnknownEnumPolicy::Reject);
    }

    #[test]
    fn test_policy_parse_rejects_unknown_value() {
        let err = UnknownEnumPolicy::parse("abort").unwrap_err();
        assert!(matches!(err, MappingError::ConfigError(_)));
    }
}
