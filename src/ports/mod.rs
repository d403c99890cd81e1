//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and storage. Adapters implement these ports.
//!
//! - `ProfileRepository` - The athlete profile singleton
//! - `AttendanceRepository` - Set of training days
//! - `ProgressionRepository` - XP state plus append-only history
//! - `RecordRepository` - Plain CRUD collections, generic over the record type

mod attendance_repository;
mod profile_repository;
mod progression_repository;
mod record_repository;

pub use attendance_repository::AttendanceRepository;
pub use profile_repository::ProfileRepository;
pub use progression_repository::ProgressionRepository;
pub use record_repository::RecordRepository;
