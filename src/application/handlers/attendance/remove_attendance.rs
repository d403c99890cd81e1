//! RemoveAttendanceHandler - Command handler for un-logging a training day.

use std::sync::Arc;

use tracing::info;

use crate::domain::attendance::parse_training_day;
use crate::domain::foundation::DomainError;
use crate::ports::AttendanceRepository;

#[derive(Debug, Clone)]
pub struct RemoveAttendanceCommand {
    pub date: String,
}

pub struct RemoveAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl RemoveAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    /// Removes the day if present. Absent days are not an error.
    pub async fn handle(&self, cmd: RemoveAttendanceCommand) -> Result<(), DomainError> {
        let date = parse_training_day(&cmd.date)?;
        self.repository.remove(date).await?;
        info!(date = %date, "Attendance removed");
        Ok(())
    }
}
