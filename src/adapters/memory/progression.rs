//! In-memory progression state and history.
//!
//! State and history live behind one lock so a grant is applied as a unit.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, HistoryEntryId};
use crate::domain::progression::{
    sort_most_recent_first, HistoryEntry, NewHistoryEntry, ProgressionState,
};
use crate::ports::ProgressionRepository;

#[derive(Debug, Default)]
struct Store {
    state: ProgressionState,
    history: Vec<HistoryEntry>,
    next_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProgressionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of history entries ever written.
    pub async fn history_len(&self) -> usize {
        self.store.read().await.history.len()
    }
}

#[async_trait]
impl ProgressionRepository for InMemoryProgressionRepository {
    async fn load_state(&self) -> Result<ProgressionState, DomainError> {
        Ok(self.store.read().await.state.clone())
    }

    async fn record_grant(
        &self,
        state: &ProgressionState,
        entry: NewHistoryEntry,
    ) -> Result<HistoryEntry, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let stored = entry.with_id(HistoryEntryId::new(store.next_id));
        store.state = state.clone();
        store.history.push(stored.clone());
        Ok(stored)
    }

    async fn list_history(&self, limit: u32) -> Result<Vec<HistoryEntry>, DomainError> {
        let mut entries = self.store.read().await.history.clone();
        sort_most_recent_first(&mut entries);
        entries.truncate(limit as usize);
        Ok(entries)
    }
}
