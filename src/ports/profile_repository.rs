//! ProfileRepository port for the athlete profile singleton.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::profile::{Profile, ProfilePatch};

/// Repository for the single athlete profile.
///
/// The profile row exists from first startup; implementations never return "absent".
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Load the current profile.
    async fn get(&self) -> Result<Profile, DomainError>;

    /// Overwrite only the fields present in `patch`.
    ///
    /// Callers validate the patch first.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn update_partial(&self, patch: &ProfilePatch) -> Result<(), DomainError>;
}
