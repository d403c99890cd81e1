//! Progression aggregate: XP total, level, streak.

use serde::Serialize;

use crate::domain::foundation::{CalendarDate, Timestamp};

use super::history::NewHistoryEntry;
use super::level::Level;
use super::streak::{StreakPolicy, StreakState};

/// Singleton progression state.
///
/// `level` is never set directly; it is always derived from `total_xp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionState {
    total_xp: i64,
    level: Level,
    streak: u32,
    last_action_date: Option<CalendarDate>,
}

/// Result of a single XP grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XpGrant {
    pub total_xp: i64,
    pub level: Level,
}

impl ProgressionState {
    /// State before any XP has been granted.
    pub fn initial() -> Self {
        Self::from_parts(0, 0, None)
    }

    /// Rebuilds state from persisted fields, re-deriving the level.
    pub fn from_parts(total_xp: i64, streak: u32, last_action_date: Option<CalendarDate>) -> Self {
        Self {
            total_xp,
            level: Level::for_xp(total_xp),
            streak,
            last_action_date,
        }
    }

    pub fn total_xp(&self) -> i64 {
        self.total_xp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_action_date(&self) -> Option<CalendarDate> {
        self.last_action_date
    }

    /// XP still missing to the next tier, `None` at the top tier.
    pub fn xp_to_next_level(&self) -> Option<i64> {
        Level::xp_to_next(self.total_xp)
    }

    /// Applies a grant and returns the history entry to append.
    ///
    /// The amount is added as given; neither it nor the action label is validated.
    pub fn grant(
        &mut self,
        amount: i64,
        action: impl Into<String>,
        occurred_at: Timestamp,
        policy: StreakPolicy,
    ) -> NewHistoryEntry {
        self.total_xp = self.total_xp.saturating_add(amount);
        self.level = Level::for_xp(self.total_xp);

        let streak = policy.advance(
            StreakState {
                streak: self.streak,
                last_action_date: self.last_action_date,
            },
            occurred_at.date(),
        );
        self.streak = streak.streak;
        self.last_action_date = streak.last_action_date;

        NewHistoryEntry {
            occurred_at,
            action: action.into(),
            xp: amount,
        }
    }

    pub fn as_grant(&self) -> XpGrant {
        XpGrant {
            total_xp: self.total_xp,
            level: self.level,
        }
    }
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::initial()
    }
}
