//! GetGraduationHandler - Time-in-belt progress for the current profile.

use std::sync::Arc;

use crate::domain::foundation::{CalendarDate, DomainError};
use crate::domain::graduation::GraduationStatus;
use crate::ports::ProfileRepository;

/// Query for graduation progress as of a given day.
#[derive(Debug, Clone, Copy)]
pub struct GetGraduationQuery {
    pub today: CalendarDate,
}

pub struct GetGraduationHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetGraduationHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetGraduationQuery) -> Result<GraduationStatus, DomainError> {
        let profile = self.repository.get().await?;
        Ok(profile.graduation(query.today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;
    use crate::domain::graduation::Belt;
    use crate::domain::profile::Profile;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[tokio::test]
    async fn purple_belt_halfway() {
        let mut profile = Profile::initial(date("2023-06-15"));
        profile.belt = Belt::Roxa;
        let handler = GetGraduationHandler::new(Arc::new(InMemoryProfileRepository::new(profile)));

        let status = handler
            .handle(GetGraduationQuery {
                today: date("2024-03-20"),
            })
            .await
            .unwrap();

        let progress = status.progress().unwrap();
        assert_eq!(progress.months_in_belt, 9);
        assert_eq!(progress.progress_percent, 50.0);
        assert_eq!(progress.next_belt, Some(Belt::Marrom));
    }

    #[tokio::test]
    async fn unavailable_without_start_date() {
        let mut profile = Profile::initial(date("2024-01-01"));
        profile.belt_start_date = None;
        let handler = GetGraduationHandler::new(Arc::new(InMemoryProfileRepository::new(profile)));

        let status = handler
            .handle(GetGraduationQuery {
                today: date("2024-03-20"),
            })
            .await
            .unwrap();
        assert_eq!(status, GraduationStatus::Unavailable);
    }
}
