//! Generic contract shared by every stored collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, RecordId};

use super::fields::FieldSet;

/// The independent collections kept by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Technique,
    Workout,
    ScheduleEntry,
    Diet,
    Achievement,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Technique => "Technique",
            RecordKind::Workout => "Workout",
            RecordKind::ScheduleEntry => "Schedule entry",
            RecordKind::Diet => "Diet",
            RecordKind::Achievement => "Achievement",
        }
    }
}

impl RecordKind {
    /// Error for an update against an id that does not exist.
    pub fn not_found(&self, id: RecordId) -> DomainError {
        DomainError::new(
            ErrorCode::RecordNotFound,
            format!("{} {} not found", self.label(), id),
        )
        .with_detail("id", id.to_string())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A record type with its creation draft and partial-update patch.
///
/// Drafts and patches reject unknown field names at deserialization
/// (`deny_unknown_fields`), so the updatable field set is exactly the patch struct.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    const KIND: RecordKind;

    type Draft: FieldSet + DeserializeOwned + Clone + Send + Sync + 'static;
    type Patch: FieldSet + DeserializeOwned + Send + Sync + 'static;

    fn id(&self) -> RecordId;

    /// Materialises a draft as a stored record, applying column defaults.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Overwrites the fields present in `patch`.
    fn apply(&mut self, patch: &Self::Patch);
}
