//! UpdateProfileHandler - Command handler for partial profile updates.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::profile::ProfilePatch;
use crate::domain::records::{ensure_not_empty, FieldSet};
use crate::ports::ProfileRepository;

/// Command to change some profile fields.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub patch: ProfilePatch,
}

/// Handler for partial profile updates.
pub struct UpdateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<(), DomainError> {
        // 1. Reject invalid patches, then empty ones, before touching storage
        cmd.patch.validate()?;
        ensure_not_empty(&cmd.patch)?;

        // 2. Persist only the supplied fields
        self.repository.update_partial(&cmd.patch).await?;

        let fields: Vec<&str> = cmd.patch.assignments().iter().map(|a| a.column).collect();
        info!(fields = ?fields, "Profile updated");
        Ok(())
    }
}
