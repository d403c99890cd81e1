//! Records module - plain collections kept by the record store.
//!
//! Each record type pairs a stored struct with a creation draft and a
//! partial-update patch. Patches enumerate exactly the updatable fields.

mod achievement;
mod diet;
mod fields;
mod record;
mod schedule;
mod technique;
mod workout;

pub use achievement::{Achievement, AchievementDraft, AchievementPatch};
pub use diet::{Diet, DietDraft, DietPatch};
pub use fields::{
    ensure_not_empty, require_text, require_text_if_present, Assignments, FieldAssignment,
    FieldSet, FieldValue,
};
pub use record::{Record, RecordKind};
pub use schedule::{ScheduleEntry, ScheduleEntryDraft, ScheduleEntryPatch};
pub use technique::{Technique, TechniqueDraft, TechniquePatch, TechniqueStatus};
pub use workout::{Workout, WorkoutDraft, WorkoutPatch};
