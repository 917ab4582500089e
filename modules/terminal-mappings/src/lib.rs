//! # Terminal Mappings
//!
//! Transport adapter between the card-present terminal SDK and the plugin API
//! consumed by the application layer.
//!
//! - `sdk`: domain objects as the SDK produces them, plus SDK-native payment
//!   intent parameters and their validating constructor
//! - `contracts`: transport records in the plugin schema
//! - `mappings`: the adapter itself
//! - `fixtures`: JSON-in, JSON-out dispatch behind the `map_fixture` tool
//!
//! ## Usage
//!
//! ```rust
//! use terminal_mappings_rs::{PaymentIntent, TransportAdapter};
//!
//! let intent = PaymentIntent::from_json(serde_json::json!({
//!     "id": "pi_123",
//!     "amount": 1000,
//!     "capture_method": "automatic",
//!     "created": 1700000000,
//!     "currency": "usd",
//!     "status": "succeeded",
//!     "confirmation_method": "manual"
//! }))
//! .unwrap();
//!
//! let api = TransportAdapter::default().map_payment_intent(&intent).unwrap();
//! assert_eq!(api.amount, 1000.0);
//! assert!(api.amount_capturable.is_none());
//! ```

pub mod amounts;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fixtures;
pub mod mappings;
pub mod sdk;

pub use config::{MappingConfig, UnknownEnumPolicy};
pub use error::MappingError;
pub use mappings::TransportAdapter;
pub use sdk::{PaymentIntent, SetupAttempt, SetupIntent};
