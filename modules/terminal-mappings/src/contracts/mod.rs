//! Transport records exposed to the application layer
//!
//! IMPORTANT: Field names and enum tags are part of the plugin schema and must
//! match it EXACTLY (camelCase). Enum values produced from SDK enums carry an
//! `Unknown(raw)` case which serializes as the SDK's raw token.

pub mod parameters_api;
pub mod payment_intent_api;
pub mod setup_intent_api;

pub use parameters_api::*;
pub use payment_intent_api::*;
pub use setup_intent_api::*;
