//! The athlete profile singleton.

use serde::Serialize;

use crate::domain::foundation::{CalendarDate, ValidationError};
use crate::domain::graduation::{self, Belt, GraduationStatus};
use crate::domain::records::FieldSet;

use super::patch::ProfilePatch;

pub const DEFAULT_NAME: &str = "Guerreiro";
pub const DEFAULT_HEIGHT_M: f64 = 1.75;
pub const DEFAULT_WEIGHT_KG: f64 = 75.0;
pub const DEFAULT_OBJECTIVE: &str = "Performance";

/// Athlete profile.
///
/// # Invariants
///
/// - `stripes` is within `0..=Belt::MAX_STRIPES`
/// - `height` and `weight` are positive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    /// Height in metres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub objective: String,
    pub belt: Belt,
    pub belt_start_date: Option<CalendarDate>,
    pub stripes: u8,
}

impl Profile {
    /// Profile created on first startup.
    pub fn initial(today: CalendarDate) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            height: DEFAULT_HEIGHT_M,
            weight: DEFAULT_WEIGHT_KG,
            objective: DEFAULT_OBJECTIVE.to_string(),
            belt: Belt::Branca,
            belt_start_date: Some(today),
            stripes: 0,
        }
    }

    /// Applies a patch, leaving the profile untouched if any field is invalid.
    pub fn apply(&mut self, patch: &ProfilePatch) -> Result<(), ValidationError> {
        patch.validate()?;
        let stripes = patch.stripes()?;

        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(objective) = &patch.objective {
            self.objective = objective.clone();
        }
        if let Some(belt) = patch.belt {
            self.belt = belt;
        }
        if let Some(start) = patch.parsed_belt_start_date() {
            self.belt_start_date = Some(start);
        }
        if let Some(stripes) = stripes {
            self.stripes = stripes;
        }
        Ok(())
    }

    pub fn graduation(&self, today: CalendarDate) -> GraduationStatus {
        graduation::evaluate(Some(self.belt), self.belt_start_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2024, 3, 10).unwrap()
    }

    #[test]
    fn initial_profile_uses_defaults() {
        let profile = Profile::initial(today());
        assert_eq!(profile.name, "Guerreiro");
        assert_eq!(profile.belt, Belt::Branca);
        assert_eq!(profile.stripes, 0);
        assert_eq!(profile.belt_start_date, Some(today()));
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut profile = Profile::initial(today());
        let patch = ProfilePatch {
            stripes: Some(2),
            ..Default::default()
        };
        profile.apply(&patch).unwrap();

        assert_eq!(profile.stripes, 2);
        assert_eq!(profile.name, "Guerreiro");
        assert_eq!(profile.weight, 75.0);
    }

    #[test]
    fn apply_rejects_out_of_range_stripes_without_changes() {
        let mut profile = Profile::initial(today());
        let patch = ProfilePatch {
            name: Some("Ana".to_string()),
            stripes: Some(300),
            ..Default::default()
        };

        assert!(profile.apply(&patch).is_err());
        assert_eq!(profile, Profile::initial(today()));
    }

    #[test]
    fn graduation_uses_current_belt() {
        let mut profile = Profile::initial(CalendarDate::from_ymd(2022, 1, 1).unwrap());
        profile.belt = Belt::Azul;
        let status = profile.graduation(today());
        let progress = status.progress().unwrap();
        assert_eq!(progress.min_months, 24);
        assert_eq!(progress.months_in_belt, 26);
        assert!(progress.eligible);
    }
}
