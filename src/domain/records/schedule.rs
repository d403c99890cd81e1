//! Weekly class schedule.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, ValidationError};

use super::fields::{require_text, require_text_if_present, Assignments, FieldAssignment, FieldSet};
use super::record::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub id: RecordId,
    pub day: String,
    pub time: String,
    pub activity: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleEntryDraft {
    pub day: String,
    pub time: String,
    pub activity: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleEntryPatch {
    pub day: Option<String>,
    pub time: Option<String>,
    pub activity: Option<String>,
}

impl FieldSet for ScheduleEntryDraft {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set("day", self.day.clone())
            .set("time", self.time.clone())
            .set("activity", self.activity.clone())
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("day", &self.day)?;
        require_text("time", &self.time)?;
        require_text("activity", &self.activity)
    }
}

impl FieldSet for ScheduleEntryPatch {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set_if("day", &self.day)
            .set_if("time", &self.time)
            .set_if("activity", &self.activity)
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_present("day", &self.day)?;
        require_text_if_present("time", &self.time)?;
        require_text_if_present("activity", &self.activity)
    }
}

impl Record for ScheduleEntry {
    const KIND: RecordKind = RecordKind::ScheduleEntry;

    type Draft = ScheduleEntryDraft;
    type Patch = ScheduleEntryPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ScheduleEntryDraft) -> Self {
        Self {
            id,
            day: draft.day,
            time: draft.time,
            activity: draft.activity,
        }
    }

    fn apply(&mut self, patch: &ScheduleEntryPatch) {
        if let Some(v) = &patch.day {
            self.day = v.clone();
        }
        if let Some(v) = &patch.time {
            self.time = v.clone();
        }
        if let Some(v) = &patch.activity {
            self.activity = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required_on_create() {
        let result: Result<ScheduleEntryDraft, _> =
            serde_json::from_value(serde_json::json!({ "day": "Sábado", "time": "10:00" }));
        assert!(result.is_err());
    }

    #[test]
    fn blank_activity_is_invalid() {
        let draft = ScheduleEntryDraft {
            day: "Sábado".to_string(),
            time: "10:00".to_string(),
            activity: " ".to_string(),
        };
        assert!(draft.validate().is_err());
    }
}
