//! ListHistoryHandler - Most recent XP-granting actions.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::progression::HistoryEntry;
use crate::ports::ProgressionRepository;

/// Query for recent history. `limit` is clamped to the handler maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListHistoryQuery {
    pub limit: Option<u32>,
}

pub struct ListHistoryHandler {
    repository: Arc<dyn ProgressionRepository>,
    max_entries: u32,
}

impl ListHistoryHandler {
    pub fn new(repository: Arc<dyn ProgressionRepository>, max_entries: u32) -> Self {
        Self {
            repository,
            max_entries,
        }
    }

    pub async fn handle(&self, query: ListHistoryQuery) -> Result<Vec<HistoryEntry>, DomainError> {
        let limit = query
            .limit
            .unwrap_or(self.max_entries)
            .min(self.max_entries);
        self.repository.list_history(limit).await
    }
}
