//! Attendance repository port.
//!
//! Stores the set of calendar dates the user trained on.

use async_trait::async_trait;

use crate::domain::attendance::AttendanceLedger;
use crate::domain::foundation::{CalendarDate, DomainError};

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Record a training day.
    ///
    /// # Errors
    ///
    /// - `AttendanceAlreadyRecorded` if the date is already present
    /// - `DatabaseError` on persistence failure
    async fn add(&self, date: CalendarDate) -> Result<(), DomainError>;

    /// Remove a training day. Removing an absent date is not an error.
    async fn remove(&self, date: CalendarDate) -> Result<(), DomainError>;

    /// All recorded dates, ascending.
    async fn list(&self) -> Result<Vec<CalendarDate>, DomainError>;

    /// Loads every recorded date into a ledger for counting.
    async fn ledger(&self) -> Result<AttendanceLedger, DomainError> {
        Ok(self.list().await?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AttendanceRepository) {}
    }
}
