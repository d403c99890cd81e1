//! Request and response bodies that differ from the domain types.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, RecordId};
use crate::domain::progression::HistoryEntry;

/// `{success: true}` acknowledgement for mutations without a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedResponse {
    pub id: RecordId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogAttendanceRequest {
    pub date: String,
}

/// `amount` is kept raw so non-numeric values map to `INVALID_ARGUMENT`.
#[derive(Debug, Clone, Deserialize)]
pub struct GrantXpRequest {
    #[serde(default)]
    pub amount: serde_json::Value,
    #[serde(default)]
    pub action: String,
}

impl GrantXpRequest {
    /// The amount as an integer. Integral floats such as `50.0` are accepted.
    pub fn amount(&self) -> Result<i64, DomainError> {
        let invalid = || {
            DomainError::new(
                ErrorCode::InvalidArgument,
                format!("XP amount must be an integer, got {}", self.amount),
            )
            .with_detail("field", "amount")
        };

        if let Some(n) = self.amount.as_i64() {
            return Ok(n);
        }
        match self.amount.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                Ok(f as i64)
            }
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

/// History entry as exposed to the client; `date` is the RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub date: String,
    pub action: String,
    pub xp: i64,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id.value(),
            date: entry.occurred_at.to_storage_string(),
            action: entry.action,
            xp: entry.xp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: serde_json::Value) -> GrantXpRequest {
        serde_json::from_value(serde_json::json!({ "amount": amount, "action": "Treino" }))
            .unwrap()
    }

    #[test]
    fn integer_amounts_are_accepted() {
        assert_eq!(request(serde_json::json!(50)).amount().unwrap(), 50);
        assert_eq!(request(serde_json::json!(-20)).amount().unwrap(), -20);
        assert_eq!(request(serde_json::json!(50.0)).amount().unwrap(), 50);
    }

    #[test]
    fn non_integer_amounts_are_invalid_arguments() {
        for amount in [
            serde_json::json!("abc"),
            serde_json::json!(12.5),
            serde_json::json!(null),
            serde_json::json!([1]),
        ] {
            let err = request(amount).amount().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidArgument);
        }
    }

    #[test]
    fn missing_amount_is_invalid_argument() {
        let req: GrantXpRequest =
            serde_json::from_value(serde_json::json!({ "action": "Treino" })).unwrap();
        assert_eq!(req.amount().unwrap_err().code, ErrorCode::InvalidArgument);
    }
}
