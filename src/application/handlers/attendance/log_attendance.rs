//! LogAttendanceHandler - Command handler for recording a training day.

use std::sync::Arc;

use tracing::info;

use crate::domain::attendance::parse_training_day;
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::ports::AttendanceRepository;

/// Command to record a training day, as sent by the client.
#[derive(Debug, Clone)]
pub struct LogAttendanceCommand {
    pub date: String,
}

pub struct LogAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl LogAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    /// Records the day. Future dates are accepted.
    ///
    /// # Errors
    ///
    /// - `InvalidDate` if the date is not `YYYY-MM-DD`
    /// - `AttendanceAlreadyRecorded` on a duplicate
    pub async fn handle(&self, cmd: LogAttendanceCommand) -> Result<CalendarDate, DomainError> {
        let date = parse_training_day(&cmd.date)?;
        self.repository.add(date).await?;
        info!(date = %date, "Attendance logged");
        Ok(date)
    }
}
