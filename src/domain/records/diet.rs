//! Diet plan templates. `content` is an opaque menu blob.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, ValidationError};

use super::fields::{require_text, require_text_if_present, Assignments, FieldAssignment, FieldSet};
use super::record::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diet {
    pub id: RecordId,
    pub title: String,
    pub kcal: Option<String>,
    pub macros: Option<String>,
    pub color: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DietDraft {
    pub title: String,
    pub kcal: Option<String>,
    pub macros: Option<String>,
    pub color: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DietPatch {
    pub title: Option<String>,
    pub kcal: Option<String>,
    pub macros: Option<String>,
    pub color: Option<String>,
    pub content: Option<String>,
}

impl FieldSet for DietDraft {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set("title", self.title.clone())
            .set("kcal", self.kcal.clone())
            .set("macros", self.macros.clone())
            .set("color", self.color.clone())
            .set("content", self.content.clone())
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)
    }
}

impl FieldSet for DietPatch {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set_if("title", &self.title)
            .set_if("kcal", &self.kcal)
            .set_if("macros", &self.macros)
            .set_if("color", &self.color)
            .set_if("content", &self.content)
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_present("title", &self.title)
    }
}

impl Record for Diet {
    const KIND: RecordKind = RecordKind::Diet;

    type Draft = DietDraft;
    type Patch = DietPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: DietDraft) -> Self {
        Self {
            id,
            title: draft.title,
            kcal: draft.kcal,
            macros: draft.macros,
            color: draft.color,
            content: draft.content,
        }
    }

    fn apply(&mut self, patch: &DietPatch) {
        if let Some(v) = &patch.title {
            self.title = v.clone();
        }
        if patch.kcal.is_some() {
            self.kcal = patch.kcal.clone();
        }
        if patch.macros.is_some() {
            self.macros = patch.macros.clone();
        }
        if patch.color.is_some() {
            self.color = patch.color.clone();
        }
        if patch.content.is_some() {
            self.content = patch.content.clone();
        }
    }
}
