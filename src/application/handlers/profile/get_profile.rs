//! GetProfileHandler - Query handler for the athlete profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Handler for reading the profile.
pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Profile, DomainError> {
        self.repository.get().await
    }
}
