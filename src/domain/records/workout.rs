//! Strength and conditioning exercises grouped by plan letter.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, ValidationError};

use super::fields::{require_text, require_text_if_present, Assignments, FieldAssignment, FieldSet};
use super::record::{Record, RecordKind};

/// One exercise of a workout plan (`A`..`F` or `Warmup`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub plan: String,
    pub name: String,
    pub sets: Option<i64>,
    pub reps: Option<String>,
    /// Rest between sets, in seconds.
    pub rest: Option<i64>,
    pub muscle_group: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkoutDraft {
    #[serde(rename = "type")]
    pub plan: String,
    pub name: String,
    pub sets: Option<i64>,
    pub reps: Option<String>,
    pub rest: Option<i64>,
    pub muscle_group: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkoutPatch {
    #[serde(rename = "type")]
    pub plan: Option<String>,
    pub name: Option<String>,
    pub sets: Option<i64>,
    pub reps: Option<String>,
    pub rest: Option<i64>,
    pub muscle_group: Option<String>,
    pub completed: Option<bool>,
}

fn validate_counts(sets: Option<i64>, rest: Option<i64>) -> Result<(), ValidationError> {
    if let Some(sets) = sets {
        if sets < 0 {
            return Err(ValidationError::out_of_range("sets", 0, i64::MAX, sets));
        }
    }
    if let Some(rest) = rest {
        if rest < 0 {
            return Err(ValidationError::out_of_range("rest", 0, i64::MAX, rest));
        }
    }
    Ok(())
}

impl FieldSet for WorkoutDraft {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set("type", self.plan.clone())
            .set("name", self.name.clone())
            .set("sets", self.sets)
            .set("reps", self.reps.clone())
            .set("rest", self.rest)
            .set("muscle_group", self.muscle_group.clone())
            .set("completed", self.completed.unwrap_or(false))
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("type", &self.plan)?;
        require_text("name", &self.name)?;
        validate_counts(self.sets, self.rest)
    }
}

impl FieldSet for WorkoutPatch {
    fn assignments(&self) -> Vec<FieldAssignment> {
        Assignments::new()
            .set_if("type", &self.plan)
            .set_if("name", &self.name)
            .set_if("sets", &self.sets)
            .set_if("reps", &self.reps)
            .set_if("rest", &self.rest)
            .set_if("muscle_group", &self.muscle_group)
            .set_if("completed", &self.completed)
            .build()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_present("type", &self.plan)?;
        require_text_if_present("name", &self.name)?;
        validate_counts(self.sets, self.rest)
    }
}

impl Record for Workout {
    const KIND: RecordKind = RecordKind::Workout;

    type Draft = WorkoutDraft;
    type Patch = WorkoutPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: WorkoutDraft) -> Self {
        Self {
            id,
            plan: draft.plan,
            name: draft.name,
            sets: draft.sets,
            reps: draft.reps,
            rest: draft.rest,
            muscle_group: draft.muscle_group,
            completed: draft.completed.unwrap_or(false),
        }
    }

    fn apply(&mut self, patch: &WorkoutPatch) {
        if let Some(v) = &patch.plan {
            self.plan = v.clone();
        }
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if patch.sets.is_some() {
            self.sets = patch.sets;
        }
        if patch.reps.is_some() {
            self.reps = patch.reps.clone();
        }
        if patch.rest.is_some() {
            self.rest = patch.rest;
        }
        if patch.muscle_group.is_some() {
            self.muscle_group = patch.muscle_group.clone();
        }
        if let Some(v) = patch.completed {
            self.completed = v;
        }
    }
}
