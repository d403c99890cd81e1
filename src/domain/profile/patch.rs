//! Partial profile updates.

use serde::Deserialize;

use crate::domain::foundation::{CalendarDate, ValidationError};
use crate::domain::graduation::Belt;
use crate::domain::records::{require_text_if_present, Assignments, FieldAssignment, FieldSet, FieldValue};

/// Updatable profile fields. Anything else in the request body is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub objective: Option<String>,
    pub belt: Option<Belt>,
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is kept.
    pub belt_start_date: Option<String>,
    pub stripes: Option<i64>,
}

impl ProfilePatch {
    /// Normalised start date; `None` when absent or unparseable.
    pub fn parsed_belt_start_date(&self) -> Option<CalendarDate> {
        self.belt_start_date
            .as_deref()
            .and_then(|s| CalendarDate::parse_flexible(s).ok())
    }

    /// Stripe count, checked against `Belt::MAX_STRIPES`.
    pub fn stripes(&self) -> Result<Option<u8>, ValidationError> {
        self.stripes
            .map(|raw| {
                u8::try_from(raw)
                    .ok()
                    .filter(|stripes| i64::from(*stripes) <= Belt::MAX_STRIPES)
                    .ok_or_else(|| {
                        ValidationError::out_of_range("stripes", 0, Belt::MAX_STRIPES, raw)
                    })
            })
            .transpose()
    }
}

impl From<Belt> for FieldValue {
    fn from(belt: Belt) -> Self {
        FieldValue::from(belt.as_str())
    }
}

fn ensure_positive(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ValidationError::invalid_format(
            field,
            format!("must be a positive number, got {}", v),
        )),
        _ => Ok(()),
    }
}

impl FieldSet for ProfilePatch {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set_if("name", &self.name)
            .set_if("height", &self.height)
            .set_if("weight", &self.weight)
            .set_if("objective", &self.objective)
            .set_if("belt", &self.belt)
            .set_if(
                "belt_start_date",
                &self.parsed_belt_start_date().map(|d| d.to_string()),
            )
            .set_if("stripes", &self.stripes)
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_present("name", &self.name)?;
        ensure_positive("height", self.height)?;
        ensure_positive("weight", self.weight)?;
        self.stripes()?;
        if let Some(raw) = &self.belt_start_date {
            CalendarDate::parse_flexible(raw).map_err(|_| {
                ValidationError::invalid_format(
                    "belt_start_date",
                    format!("'{}' is not a calendar date", raw),
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::ensure_not_empty;

    fn patch(json: serde_json::Value) -> ProfilePatch {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn stripes_out_of_range_are_rejected() {
        assert!(patch(serde_json::json!({ "stripes": 5 })).validate().is_err());
        assert!(patch(serde_json::json!({ "stripes": -1 })).validate().is_err());
        assert!(patch(serde_json::json!({ "stripes": 4 })).validate().is_ok());
        assert!(patch(serde_json::json!({ "stripes": 260 })).stripes().is_err());
        assert_eq!(patch(serde_json::json!({ "stripes": 3 })).stripes().unwrap(), Some(3));
    }

    #[test]
    fn unknown_belt_fails_to_deserialize() {
        let result: Result<ProfilePatch, _> =
            serde_json::from_value(serde_json::json!({ "belt": "Verde" }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_fails_to_deserialize() {
        let result: Result<ProfilePatch, _> =
            serde_json::from_value(serde_json::json!({ "age": 30 }));
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        assert!(patch(serde_json::json!({ "weight": 0.0 })).validate().is_err());
    }

    #[test]
    fn timestamp_start_date_is_normalised() {
        let p = patch(serde_json::json!({ "belt_start_date": "2023-05-04T12:00:00.000Z" }));
        assert!(p.validate().is_ok());
        let assignments = p.assignments();
        assert_eq!(assignments.len(), 1);
        assert_eq!(
            assignments[0].value,
            FieldValue::Text(Some("2023-05-04".to_string()))
        );
    }

    #[test]
    fn malformed_start_date_is_rejected() {
        let p = patch(serde_json::json!({ "belt_start_date": "04/05/2023" }));
        assert!(p.validate().is_err());
    }

    #[test]
    fn empty_patch_is_rejected() {
        assert!(ensure_not_empty(&ProfilePatch::default()).is_err());
    }

    #[test]
    fn belt_is_stored_by_portuguese_name() {
        let p = patch(serde_json::json!({ "belt": "Blue" }));
        assert_eq!(
            p.assignments()[0].value,
            FieldValue::Text(Some("Azul".to_string()))
        );
    }
}
