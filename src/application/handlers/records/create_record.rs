//! CreateRecordHandler - Inserts a record into any collection.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::records::{FieldSet, Record};
use crate::ports::RecordRepository;

pub struct CreateRecordHandler<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> CreateRecordHandler<R> {
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// Validates required fields and stores the draft.
    pub async fn handle(&self, draft: R::Draft) -> Result<RecordId, DomainError> {
        draft.validate()?;
        let id = self.repository.create(&draft).await?;
        info!(kind = %R::KIND, id = %id, "Record created");
        Ok(id)
    }
}
