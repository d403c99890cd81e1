//! Streak policies applied when XP is granted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CalendarDate;

/// How the day streak reacts to a new XP-granting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// Streak is stored but never advanced; only the last action date moves.
    Frozen,

    /// Consecutive-day streak: next day increments, same day keeps,
    /// any gap restarts at 1.
    #[default]
    ConsecutiveDays,
}

/// Streak counter plus the day it was last touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakState {
    pub streak: u32,
    pub last_action_date: Option<CalendarDate>,
}

impl StreakPolicy {
    /// Computes the streak after an action on `day`.
    pub fn advance(&self, current: StreakState, day: CalendarDate) -> StreakState {
        match self {
            StreakPolicy::Frozen => StreakState {
                streak: current.streak,
                last_action_date: Some(day),
            },
            StreakPolicy::ConsecutiveDays => match current.last_action_date {
                None => StreakState {
                    streak: 1,
                    last_action_date: Some(day),
                },
                Some(last) if day == last => StreakState {
                    streak: current.streak.max(1),
                    last_action_date: Some(last),
                },
                // Backdated actions do not rewind the streak.
                Some(last) if day < last => current,
                Some(last) if last.next_day() == Some(day) => StreakState {
                    streak: current.streak.saturating_add(1),
                    last_action_date: Some(day),
                },
                Some(_) => StreakState {
                    streak: 1,
                    last_action_date: Some(day),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn state(streak: u32, last: Option<&str>) -> StreakState {
        StreakState {
            streak,
            last_action_date: last.map(date),
        }
    }

    #[test]
    fn frozen_policy_only_moves_last_action_date() {
        let next = StreakPolicy::Frozen.advance(state(0, Some("2024-01-01")), date("2024-01-02"));
        assert_eq!(next, state(0, Some("2024-01-02")));
    }

    #[test]
    fn first_action_starts_streak() {
        let next = StreakPolicy::ConsecutiveDays.advance(state(0, None), date("2024-01-01"));
        assert_eq!(next, state(1, Some("2024-01-01")));
    }

    #[test]
    fn next_day_increments() {
        let next =
            StreakPolicy::ConsecutiveDays.advance(state(3, Some("2024-02-28")), date("2024-02-29"));
        assert_eq!(next, state(4, Some("2024-02-29")));
    }

    #[test]
    fn same_day_keeps_streak() {
        let next =
            StreakPolicy::ConsecutiveDays.advance(state(3, Some("2024-01-05")), date("2024-01-05"));
        assert_eq!(next, state(3, Some("2024-01-05")));
    }

    #[test]
    fn gap_resets_to_one() {
        let next =
            StreakPolicy::ConsecutiveDays.advance(state(9, Some("2024-01-05")), date("2024-01-07"));
        assert_eq!(next, state(1, Some("2024-01-07")));
    }

    #[test]
    fn backdated_action_leaves_state_untouched() {
        let current = state(2, Some("2024-01-05"));
        let next = StreakPolicy::ConsecutiveDays.advance(current, date("2024-01-01"));
        assert_eq!(next, current);
    }

    #[test]
    fn policy_deserializes_from_snake_case() {
        let policy: StreakPolicy = serde_json::from_str("\"consecutive_days\"").unwrap();
        assert_eq!(policy, StreakPolicy::ConsecutiveDays);
        assert_eq!(StreakPolicy::default(), StreakPolicy::ConsecutiveDays);
    }
}
