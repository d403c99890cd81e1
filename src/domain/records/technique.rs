//! Technique library entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, ValidationError};

use super::fields::{require_text, require_text_if_present, Assignments, FieldAssignment, FieldSet, FieldValue};
use super::record::{Record, RecordKind};

/// How well the user knows a technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechniqueStatus {
    Mastered,
    InProgress,
    #[default]
    NeedsImprovement,
}

impl TechniqueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueStatus::Mastered => "mastered",
            TechniqueStatus::InProgress => "in_progress",
            TechniqueStatus::NeedsImprovement => "needs_improvement",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "mastered" => Ok(TechniqueStatus::Mastered),
            "in_progress" => Ok(TechniqueStatus::InProgress),
            "needs_improvement" => Ok(TechniqueStatus::NeedsImprovement),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown technique status '{}'", other),
            )),
        }
    }
}

impl From<TechniqueStatus> for FieldValue {
    fn from(status: TechniqueStatus) -> Self {
        FieldValue::from(status.as_str())
    }
}

/// A stored technique. `steps` and `image_ref` are opaque text blobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technique {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub technique_type: Option<String>,
    pub objective: Option<String>,
    pub situation: Option<String>,
    pub steps: Option<String>,
    pub adjustments: Option<String>,
    pub errors: Option<String>,
    pub safety: Option<String>,
    pub strategy: Option<String>,
    pub image_ref: Option<String>,
    pub status: TechniqueStatus,
    pub favorited: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechniqueDraft {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub technique_type: Option<String>,
    pub objective: Option<String>,
    pub situation: Option<String>,
    pub steps: Option<String>,
    pub adjustments: Option<String>,
    pub errors: Option<String>,
    pub safety: Option<String>,
    pub strategy: Option<String>,
    pub image_ref: Option<String>,
    pub status: Option<TechniqueStatus>,
    pub favorited: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechniquePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub technique_type: Option<String>,
    pub objective: Option<String>,
    pub situation: Option<String>,
    pub steps: Option<String>,
    pub adjustments: Option<String>,
    pub errors: Option<String>,
    pub safety: Option<String>,
    pub strategy: Option<String>,
    pub image_ref: Option<String>,
    pub status: Option<TechniqueStatus>,
    pub favorited: Option<bool>,
    pub notes: Option<String>,
}

impl FieldSet for TechniqueDraft {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set("name", self.name.clone())
            .set("category", self.category.clone())
            .set("type", self.technique_type.clone())
            .set("objective", self.objective.clone())
            .set("situation", self.situation.clone())
            .set("steps", self.steps.clone())
            .set("adjustments", self.adjustments.clone())
            .set("errors", self.errors.clone())
            .set("safety", self.safety.clone())
            .set("strategy", self.strategy.clone())
            .set("image_ref", self.image_ref.clone())
            .set("status", self.status.unwrap_or_default())
            .set("favorited", self.favorited.unwrap_or(false))
            .set("notes", self.notes.clone())
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("category", &self.category)
    }
}

impl FieldSet for TechniquePatch {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set_if("name", &self.name)
            .set_if("category", &self.category)
            .set_if("type", &self.technique_type)
            .set_if("objective", &self.objective)
            .set_if("situation", &self.situation)
            .set_if("steps", &self.steps)
            .set_if("adjustments", &self.adjustments)
            .set_if("errors", &self.errors)
            .set_if("safety", &self.safety)
            .set_if("strategy", &self.strategy)
            .set_if("image_ref", &self.image_ref)
            .set_if("status", &self.status)
            .set_if("favorited", &self.favorited)
            .set_if("notes", &self.notes)
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_present("name", &self.name)?;
        require_text_if_present("category", &self.category)
    }
}

impl Record for Technique {
    const KIND: RecordKind = RecordKind::Technique;

    type Draft = TechniqueDraft;
    type Patch = TechniquePatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: TechniqueDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            technique_type: draft.technique_type,
            objective: draft.objective,
            situation: draft.situation,
            steps: draft.steps,
            adjustments: draft.adjustments,
            errors: draft.errors,
            safety: draft.safety,
            strategy: draft.strategy,
            image_ref: draft.image_ref,
            status: draft.status.unwrap_or_default(),
            favorited: draft.favorited.unwrap_or(false),
            notes: draft.notes,
        }
    }

    fn apply(&mut self, patch: &TechniquePatch) {
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = &patch.category {
            self.category = v.clone();
        }
        if patch.technique_type.is_some() {
            self.technique_type = patch.technique_type.clone();
        }
        if patch.objective.is_some() {
            self.objective = patch.objective.clone();
        }
        if patch.situation.is_some() {
            self.situation = patch.situation.clone();
        }
        if patch.steps.is_some() {
            self.steps = patch.steps.clone();
        }
        if patch.adjustments.is_some() {
            self.adjustments = patch.adjustments.clone();
        }
        if patch.errors.is_some() {
            self.errors = patch.errors.clone();
        }
        if patch.safety.is_some() {
            self.safety = patch.safety.clone();
        }
        if patch.strategy.is_some() {
            self.strategy = patch.strategy.clone();
        }
        if patch.image_ref.is_some() {
            self.image_ref = patch.image_ref.clone();
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.favorited {
            self.favorited = v;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::ensure_not_empty;

    #[test]
    fn draft_applies_defaults() {
        let draft: TechniqueDraft =
            serde_json::from_value(serde_json::json!({ "name": "Kimura", "category": "FINALIZAÇÕES" }))
                .unwrap();
        let technique = Technique::from_draft(RecordId::new(1), draft);

        assert_eq!(technique.status, TechniqueStatus::NeedsImprovement);
        assert!(!technique.favorited);
    }

    #[test]
    fn draft_requires_name() {
        let result: Result<TechniqueDraft, _> =
            serde_json::from_value(serde_json::json!({ "category": "QUEDAS" }));
        assert!(result.is_err());
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let result: Result<TechniquePatch, _> =
            serde_json::from_value(serde_json::json!({ "status": "mastered", "id": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let draft: TechniqueDraft = serde_json::from_value(serde_json::json!({
            "name": "Single Leg",
            "category": "QUEDAS",
            "notes": "keep head up"
        }))
        .unwrap();
        let mut technique = Technique::from_draft(RecordId::new(1), draft);

        let patch: TechniquePatch =
            serde_json::from_value(serde_json::json!({ "status": "mastered", "favorited": true }))
                .unwrap();
        assert_eq!(patch.assignments().len(), 2);
        technique.apply(&patch);

        assert_eq!(technique.status, TechniqueStatus::Mastered);
        assert!(technique.favorited);
        assert_eq!(technique.notes.as_deref(), Some("keep head up"));
    }

    #[test]
    fn empty_patch_is_rejected() {
        assert!(ensure_not_empty(&TechniquePatch::default()).is_err());
    }

    #[test]
    fn serializes_type_field_name() {
        let mut technique = Technique::from_draft(
            RecordId::new(2),
            serde_json::from_value(serde_json::json!({
                "name": "Torreando",
                "category": "PASSAGENS DE GUARDA",
                "type": "Ataque"
            }))
            .unwrap(),
        );
        technique.status = TechniqueStatus::InProgress;
        let json = serde_json::to_value(&technique).unwrap();
        assert_eq!(json["type"], "Ataque");
        assert_eq!(json["status"], "in_progress");
    }
}
