use super::Metadata;
use serde::{Deserialize, Serialize};

/// Charge attached to a payment intent
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Charge {
    pub id: String,
    pub amount: u64,
    #[serde(default)]
    pub amount_refunded: u64,
    pub currency: String,
    pub status: ChargeStatus,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub captured: bool,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub statement_descriptor_suffix: Option<String>,
    pub calculated_statement_descriptor: Option<String>,
    pub authorization_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Succeeded,
    Pending,
    Failed,
    #[serde(untagged)]
    Unknown(String),
}

impl ChargeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Unknown(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charge_defaults() {
        let charge: Charge = serde_json::from_value(json!({
            "id": "ch_1",
            "amount": 1500,
            "currency": "usd",
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(charge.status, ChargeStatus::Pending);
        assert_eq!(charge.amount_refunded, 0);
        assert!(!charge.paid);
        assert!(!charge.captured);
        assert!(charge.metadata.is_none());
    }
}
