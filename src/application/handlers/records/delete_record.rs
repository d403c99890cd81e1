//! DeleteRecordHandler - Idempotent delete by id.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::records::Record;
use crate::ports::RecordRepository;

pub struct DeleteRecordHandler<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> DeleteRecordHandler<R> {
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: RecordId) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        info!(kind = %R::KIND, id = %id, "Record deleted");
        Ok(())
    }
}
