//! In-memory profile store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CalendarDate, DomainError};
use crate::domain::profile::{Profile, ProfilePatch};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct InMemoryProfileRepository {
    profile: Arc<RwLock<Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(profile)),
        }
    }

    /// Starts with the first-startup defaults.
    pub fn with_defaults(today: CalendarDate) -> Self {
        Self::new(Profile::initial(today))
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self) -> Result<Profile, DomainError> {
        Ok(self.profile.read().await.clone())
    }

    async fn update_partial(&self, patch: &ProfilePatch) -> Result<(), DomainError> {
        self.profile.write().await.apply(patch)?;
        Ok(())
    }
}
