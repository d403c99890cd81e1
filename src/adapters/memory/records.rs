//! In-memory record store, one instance per collection.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::records::Record;
use crate::ports::RecordRepository;

#[derive(Debug)]
struct Table<R> {
    rows: BTreeMap<RecordId, R>,
    next_id: i64,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

#[derive(Debug)]
pub struct InMemoryRecordRepository<R> {
    table: Arc<RwLock<Table<R>>>,
}

impl<R> InMemoryRecordRepository<R> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
        }
    }
}

impl<R> Default for InMemoryRecordRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for InMemoryRecordRepository<R> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRecordRepository<R> {
    async fn create(&self, draft: &R::Draft) -> Result<RecordId, DomainError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = RecordId::new(table.next_id);
        table.rows.insert(id, R::from_draft(id, draft.clone()));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<R>, DomainError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update_partial(&self, id: RecordId, patch: &R::Patch) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        let record = table.rows.get_mut(&id).ok_or_else(|| R::KIND.not_found(id))?;
        record.apply(patch);
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
