//! In-memory adapters.
//!
//! Implement every storage port without a database. Used by handler tests
//! and by HTTP tests that do not need SQLite.

mod attendance;
mod profile;
mod progression;
mod records;

pub use attendance::InMemoryAttendanceRepository;
pub use profile::InMemoryProfileRepository;
pub use progression::InMemoryProgressionRepository;
pub use records::InMemoryRecordRepository;
