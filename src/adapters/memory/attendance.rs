//! In-memory attendance ledger.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::attendance::AttendanceLedger;
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::ports::AttendanceRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceRepository {
    ledger: Arc<RwLock<AttendanceLedger>>,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded days (useful for tests).
    pub async fn day_count(&self) -> usize {
        self.ledger.read().await.len()
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn add(&self, date: CalendarDate) -> Result<(), DomainError> {
        self.ledger.write().await.record(date)
    }

    async fn remove(&self, date: CalendarDate) -> Result<(), DomainError> {
        self.ledger.write().await.remove(&date);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CalendarDate>, DomainError> {
        Ok(self.ledger.read().await.dates())
    }

    async fn ledger(&self) -> Result<AttendanceLedger, DomainError> {
        Ok(self.ledger.read().await.clone())
    }
}
