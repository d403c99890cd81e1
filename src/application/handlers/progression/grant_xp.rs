//! GrantXpHandler - Command handler for XP-granting actions.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::progression::{StreakPolicy, XpGrant};
use crate::ports::ProgressionRepository;

/// Command to grant XP for an action.
///
/// `amount` is applied verbatim, including zero and negative values.
#[derive(Debug, Clone)]
pub struct GrantXpCommand {
    pub amount: i64,
    pub action: String,
    pub occurred_at: Timestamp,
}

/// Handler for XP grants.
///
/// Grants are serialised so that concurrent load-modify-save cycles cannot
/// lose an update.
pub struct GrantXpHandler {
    repository: Arc<dyn ProgressionRepository>,
    streak_policy: StreakPolicy,
    lock: Mutex<()>,
}

impl GrantXpHandler {
    pub fn new(repository: Arc<dyn ProgressionRepository>, streak_policy: StreakPolicy) -> Self {
        Self {
            repository,
            streak_policy,
            lock: Mutex::new(()),
        }
    }

    pub async fn handle(&self, cmd: GrantXpCommand) -> Result<XpGrant, DomainError> {
        let _guard = self.lock.lock().await;

        // 1. Load current state
        let mut state = self.repository.load_state().await?;
        let previous_level = state.level();

        // 2. Apply grant (total, level, streak) and build the history entry
        let entry = state.grant(cmd.amount, cmd.action, cmd.occurred_at, self.streak_policy);

        // 3. Persist state and history together
        let stored = self.repository.record_grant(&state, entry).await?;

        info!(
            action = %stored.action,
            xp = stored.xp,
            total_xp = state.total_xp(),
            level = %state.level(),
            streak = state.streak(),
            "XP granted"
        );
        if state.level() != previous_level {
            info!(from = %previous_level, to = %state.level(), "Level changed");
        }

        Ok(state.as_grant())
    }
}
