//! SQLite adapters.
//!
//! Persistent implementations of every storage port over a single SQLite
//! database file, plus pool setup, migrations and first-startup seeding.

mod attendance_repository;
mod pool;
mod profile_repository;
mod progression_repository;
mod record_repository;
mod seed;
mod statement;

pub use attendance_repository::SqliteAttendanceRepository;
pub use pool::{connect, run_migrations};
pub use profile_repository::SqliteProfileRepository;
pub use progression_repository::SqliteProgressionRepository;
pub use record_repository::{SqliteRecord, SqliteRecordRepository};
pub use seed::bootstrap;

#[cfg(test)]
pub(crate) use pool::test_pool;
