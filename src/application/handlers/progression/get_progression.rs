//! GetProgressionHandler - Current XP state with tier metadata.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{CalendarDate, DomainError};
use crate::domain::progression::{Level, ProgressionState};
use crate::ports::ProgressionRepository;

/// Progression state plus where the user stands within the tier table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionSnapshot {
    pub total_xp: i64,
    pub level: Level,
    pub level_threshold: i64,
    pub next_level: Option<Level>,
    pub next_level_threshold: Option<i64>,
    pub xp_to_next_level: Option<i64>,
    pub streak: u32,
    pub last_action_date: Option<CalendarDate>,
}

impl From<&ProgressionState> for ProgressionSnapshot {
    fn from(state: &ProgressionState) -> Self {
        let next_level = state.level().next();
        Self {
            total_xp: state.total_xp(),
            level: state.level(),
            level_threshold: state.level().threshold(),
            next_level,
            next_level_threshold: next_level.map(|l| l.threshold()),
            xp_to_next_level: state.xp_to_next_level(),
            streak: state.streak(),
            last_action_date: state.last_action_date(),
        }
    }
}

pub struct GetProgressionHandler {
    repository: Arc<dyn ProgressionRepository>,
}

impl GetProgressionHandler {
    pub fn new(repository: Arc<dyn ProgressionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<ProgressionSnapshot, DomainError> {
        let state = self.repository.load_state().await?;
        Ok(ProgressionSnapshot::from(&state))
    }
}
