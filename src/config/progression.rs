//! Progression engine configuration

use serde::Deserialize;

use crate::domain::progression::StreakPolicy;

use super::error::ValidationError;

/// Upper bound for a single history page.
pub const MAX_HISTORY_LIMIT: u32 = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressionConfig {
    /// `consecutive_days` or `frozen`
    #[serde(default)]
    pub streak_policy: StreakPolicy,

    /// Entries returned by the history endpoint when no limit is given
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl ProgressionConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_limit == 0 || self.history_limit > MAX_HISTORY_LIMIT {
            return Err(ValidationError::InvalidHistoryLimit(self.history_limit));
        }
        Ok(())
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            streak_policy: StreakPolicy::default(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_history_limit() -> u32 {
    MAX_HISTORY_LIMIT
}
