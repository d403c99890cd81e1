//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the training domain.

mod calendar_date;
mod errors;
mod ids;
mod timestamp;

pub use calendar_date::CalendarDate;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{HistoryEntryId, RecordId};
pub use timestamp::Timestamp;
