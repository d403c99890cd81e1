//! Progression repository port.
//!
//! The progression state and its history are two views of the same grant,
//! so they are persisted together.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::progression::{HistoryEntry, NewHistoryEntry, ProgressionState};

#[async_trait]
pub trait ProgressionRepository: Send + Sync {
    /// Load the singleton state. Returns the initial state if nothing was stored yet.
    async fn load_state(&self) -> Result<ProgressionState, DomainError>;

    /// Persist the post-grant state and append its history entry atomically.
    ///
    /// Returns the stored entry with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure; neither write is applied
    async fn record_grant(
        &self,
        state: &ProgressionState,
        entry: NewHistoryEntry,
    ) -> Result<HistoryEntry, DomainError>;

    /// Most recent history entries first, at most `limit`.
    async fn list_history(&self, limit: u32) -> Result<Vec<HistoryEntry>, DomainError>;
}
