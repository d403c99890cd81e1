//! Shared state for the HTTP handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::adapters::memory::{
    InMemoryAttendanceRepository, InMemoryProfileRepository, InMemoryProgressionRepository,
    InMemoryRecordRepository,
};
use crate::adapters::sqlite::{
    SqliteAttendanceRepository, SqliteProfileRepository, SqliteProgressionRepository,
    SqliteRecordRepository,
};
use crate::application::handlers::{
    GetAttendanceSummaryHandler, GetGraduationHandler, GetProfileHandler, GetProgressionHandler,
    GrantXpHandler, ListAttendanceHandler, ListHistoryHandler, LogAttendanceHandler,
    RemoveAttendanceHandler, UpdateProfileHandler,
};
use crate::config::ProgressionConfig;
use crate::domain::foundation::CalendarDate;
use crate::domain::records::{Achievement, Diet, ScheduleEntry, Technique, Workout};
use crate::ports::{AttendanceRepository, ProfileRepository, ProgressionRepository, RecordRepository};

/// One repository per record collection.
#[derive(Clone)]
pub struct RecordRepositories {
    pub techniques: Arc<dyn RecordRepository<Technique>>,
    pub workouts: Arc<dyn RecordRepository<Workout>>,
    pub schedule: Arc<dyn RecordRepository<ScheduleEntry>>,
    pub diets: Arc<dyn RecordRepository<Diet>>,
    pub achievements: Arc<dyn RecordRepository<Achievement>>,
}

impl RecordRepositories {
    pub fn sqlite(pool: &SqlitePool) -> Self {
        Self {
            techniques: Arc::new(SqliteRecordRepository::<Technique>::new(pool.clone())),
            workouts: Arc::new(SqliteRecordRepository::<Workout>::new(pool.clone())),
            schedule: Arc::new(SqliteRecordRepository::<ScheduleEntry>::new(pool.clone())),
            diets: Arc::new(SqliteRecordRepository::<Diet>::new(pool.clone())),
            achievements: Arc::new(SqliteRecordRepository::<Achievement>::new(pool.clone())),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            techniques: Arc::new(InMemoryRecordRepository::<Technique>::new()),
            workouts: Arc::new(InMemoryRecordRepository::<Workout>::new()),
            schedule: Arc::new(InMemoryRecordRepository::<ScheduleEntry>::new()),
            diets: Arc::new(InMemoryRecordRepository::<Diet>::new()),
            achievements: Arc::new(InMemoryRecordRepository::<Achievement>::new()),
        }
    }
}

/// Shared application state containing all dependencies.
///
/// Cloned for each request. The XP grant handler is shared so that its lock
/// serialises grants across requests.
#[derive(Clone)]
pub struct AppState {
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub attendance_repository: Arc<dyn AttendanceRepository>,
    pub progression_repository: Arc<dyn ProgressionRepository>,
    pub records: RecordRepositories,
    grant_xp: Arc<GrantXpHandler>,
    history_limit: u32,
}

impl AppState {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        attendance_repository: Arc<dyn AttendanceRepository>,
        progression_repository: Arc<dyn ProgressionRepository>,
        records: RecordRepositories,
        progression: &ProgressionConfig,
    ) -> Self {
        let grant_xp = Arc::new(GrantXpHandler::new(
            progression_repository.clone(),
            progression.streak_policy,
        ));
        Self {
            profile_repository,
            attendance_repository,
            progression_repository,
            records,
            grant_xp,
            history_limit: progression.history_limit,
        }
    }

    /// State backed by a migrated and bootstrapped SQLite pool.
    pub fn sqlite(pool: SqlitePool, progression: &ProgressionConfig) -> Self {
        Self::new(
            Arc::new(SqliteProfileRepository::new(pool.clone())),
            Arc::new(SqliteAttendanceRepository::new(pool.clone())),
            Arc::new(SqliteProgressionRepository::new(pool.clone())),
            RecordRepositories::sqlite(&pool),
            progression,
        )
    }

    /// State with empty in-memory stores and a default profile.
    pub fn in_memory(today: CalendarDate, progression: &ProgressionConfig) -> Self {
        Self::new(
            Arc::new(InMemoryProfileRepository::with_defaults(today)),
            Arc::new(InMemoryAttendanceRepository::new()),
            Arc::new(InMemoryProgressionRepository::new()),
            RecordRepositories::in_memory(),
            progression,
        )
    }

    // Handlers are created on demand from the shared state.

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.profile_repository.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.profile_repository.clone())
    }

    pub fn get_graduation_handler(&self) -> GetGraduationHandler {
        GetGraduationHandler::new(self.profile_repository.clone())
    }

    pub fn list_attendance_handler(&self) -> ListAttendanceHandler {
        ListAttendanceHandler::new(self.attendance_repository.clone())
    }

    pub fn log_attendance_handler(&self) -> LogAttendanceHandler {
        LogAttendanceHandler::new(self.attendance_repository.clone())
    }

    pub fn remove_attendance_handler(&self) -> RemoveAttendanceHandler {
        RemoveAttendanceHandler::new(self.attendance_repository.clone())
    }

    pub fn attendance_summary_handler(&self) -> GetAttendanceSummaryHandler {
        GetAttendanceSummaryHandler::new(self.attendance_repository.clone())
    }

    pub fn grant_xp_handler(&self) -> Arc<GrantXpHandler> {
        self.grant_xp.clone()
    }

    pub fn get_progression_handler(&self) -> GetProgressionHandler {
        GetProgressionHandler::new(self.progression_repository.clone())
    }

    pub fn list_history_handler(&self) -> ListHistoryHandler {
        ListHistoryHandler::new(self.progression_repository.clone(), self.history_limit)
    }
}
