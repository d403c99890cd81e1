//! Generic record store port.
//!
//! One implementation per collection; the record type decides the
//! draft and patch shapes.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::records::Record;

#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Insert a validated draft and return the new id.
    async fn create(&self, draft: &R::Draft) -> Result<RecordId, DomainError>;

    /// Every record, ascending by id.
    async fn list(&self) -> Result<Vec<R>, DomainError>;

    /// Overwrite only the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if no record has this id
    /// - `DatabaseError` on persistence failure
    async fn update_partial(&self, id: RecordId, patch: &R::Patch) -> Result<(), DomainError>;

    /// Delete by id. Deleting an absent id is not an error.
    async fn delete(&self, id: RecordId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{Technique, Workout};

    #[test]
    fn record_repository_is_object_safe() {
        fn _accepts_techniques(_repo: &dyn RecordRepository<Technique>) {}
        fn _accepts_workouts(_repo: &dyn RecordRepository<Workout>) {}
    }
}
