//! Column-level values produced by drafts and patches.
//!
//! Column names are `&'static str` constants owned by each record type, so only
//! enumerated fields can ever reach the storage layer.

use crate::domain::foundation::ValidationError;

/// A storable scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(Option<i64>),
    Real(Option<f64>),
}

impl FieldValue {
    pub fn flag(value: bool) -> Self {
        FieldValue::Integer(Some(i64::from(value)))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(Some(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(Some(value.to_string()))
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(Some(value))
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(Some(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::flag(value)
    }
}

/// One `column = value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAssignment {
    pub column: &'static str,
    pub value: FieldValue,
}

impl FieldAssignment {
    pub fn new(column: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// Builder that skips fields the caller did not supply.
#[derive(Debug, Default)]
pub struct Assignments(Vec<FieldAssignment>);

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: &'static str, value: impl Into<FieldValue>) -> Self {
        self.0.push(FieldAssignment::new(column, value));
        self
    }

    pub fn set_if<T: Clone + Into<FieldValue>>(mut self, column: &'static str, value: &Option<T>) -> Self {
        if let Some(v) = value {
            self.0.push(FieldAssignment::new(column, v.clone()));
        }
        self
    }

    pub fn build(self) -> Vec<FieldAssignment> {
        self.0
    }
}

/// A typed set of fields that maps onto storage columns.
pub trait FieldSet {
    fn assignments(&self) -> Vec<FieldAssignment>;

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Rejects patches that would change nothing.
pub fn ensure_not_empty<P: FieldSet>(patch: &P) -> Result<(), ValidationError> {
    if patch.assignments().is_empty() {
        return Err(ValidationError::empty_field("patch"));
    }
    Ok(())
}

/// Rejects blank required text.
pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

/// Same as [`require_text`] for optional patch fields.
pub fn require_text_if_present(field: &str, value: &Option<String>) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_if_skips_absent_values() {
        let assignments = Assignments::new()
            .set_if("name", &Some("Armbar".to_string()))
            .set_if::<String>("notes", &None)
            .set_if("favorited", &Some(true))
            .build();

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].column, "name");
        assert_eq!(assignments[1].value, FieldValue::Integer(Some(1)));
    }

    #[test]
    fn require_text_rejects_blank() {
        assert!(require_text("name", "   ").is_err());
        assert!(require_text("name", "Kimura").is_ok());
        assert!(require_text_if_present("name", &None).is_ok());
    }
}
