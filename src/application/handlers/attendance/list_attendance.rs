//! ListAttendanceHandler - Query handler for all training days.

use std::sync::Arc;

use crate::domain::foundation::{CalendarDate, DomainError};
use crate::ports::AttendanceRepository;

pub struct ListAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl ListAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<CalendarDate>, DomainError> {
        self.repository.list().await
    }
}
