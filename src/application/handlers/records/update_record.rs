//! UpdateRecordHandler - Partial update of one record.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::records::{ensure_not_empty, FieldSet, Record};
use crate::ports::RecordRepository;

#[derive(Debug, Clone)]
pub struct UpdateRecordCommand<P> {
    pub id: RecordId,
    pub patch: P,
}

pub struct UpdateRecordHandler<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> UpdateRecordHandler<R> {
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` for an empty patch or an invalid value
    /// - `RecordNotFound` if the id does not exist
    pub async fn handle(&self, cmd: UpdateRecordCommand<R::Patch>) -> Result<(), DomainError> {
        cmd.patch.validate()?;
        ensure_not_empty(&cmd.patch)?;
        self.repository.update_partial(cmd.id, &cmd.patch).await?;
        info!(kind = %R::KIND, id = %cmd.id, "Record updated");
        Ok(())
    }
}
