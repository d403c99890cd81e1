//! Progression module - XP, level tiers, streak and action history.

mod history;
mod level;
mod state;
mod streak;

pub use history::{sort_most_recent_first, HistoryEntry, NewHistoryEntry};
pub use level::Level;
pub use state::{ProgressionState, XpGrant};
pub use streak::{StreakPolicy, StreakState};
