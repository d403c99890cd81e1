//! ListRecordsHandler - Every record of a collection.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::records::Record;
use crate::ports::RecordRepository;

pub struct ListRecordsHandler<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> ListRecordsHandler<R> {
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<R>, DomainError> {
        self.repository.list().await
    }
}
