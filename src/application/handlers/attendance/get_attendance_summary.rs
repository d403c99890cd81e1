//! GetAttendanceSummaryHandler - Training counts for the dashboard.

use std::sync::Arc;

use crate::domain::attendance::AttendanceSummary;
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::ports::AttendanceRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetAttendanceSummaryQuery {
    pub today: CalendarDate,
}

pub struct GetAttendanceSummaryHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl GetAttendanceSummaryHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAttendanceSummaryQuery,
    ) -> Result<AttendanceSummary, DomainError> {
        let ledger = self.repository.ledger().await?;
        Ok(ledger.summary(query.today))
    }
}
