//! Unlockable achievements.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, ValidationError};

use super::fields::{require_text, require_text_if_present, Assignments, FieldAssignment, FieldSet};
use super::record::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: RecordId,
    pub name: String,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub unlocked: bool,
    /// When it was unlocked, as sent by the client.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementDraft {
    pub name: String,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub unlocked: Option<bool>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub unlocked: Option<bool>,
    pub date: Option<String>,
}

impl FieldSet for AchievementDraft {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set("name", self.name.clone())
            .set("category", self.category.clone())
            .set("icon", self.icon.clone())
            .set("unlocked", self.unlocked.unwrap_or(false))
            .set("date", self.date.clone())
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

impl FieldSet for AchievementPatch {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set_if("name", &self.name)
            .set_if("category", &self.category)
            .set_if("icon", &self.icon)
            .set_if("unlocked", &self.unlocked)
            .set_if("date", &self.date)
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_present("name", &self.name)
    }
}

impl Record for Achievement {
    const KIND: RecordKind = RecordKind::Achievement;

    type Draft = AchievementDraft;
    type Patch = AchievementPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: AchievementDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            icon: draft.icon,
            unlocked: draft.unlocked.unwrap_or(false),
            date: draft.date,
        }
    }

    fn apply(&mut self, patch: &AchievementPatch) {
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if patch.category.is_some() {
            self.category = patch.category.clone();
        }
        if patch.icon.is_some() {
            self.icon = patch.icon.clone();
        }
        if let Some(v) = patch.unlocked {
            self.unlocked = v;
        }
        if patch.date.is_some() {
            self.date = patch.date.clone();
        }
    }
}
