//! Attendance module - days the user trained.

mod ledger;

pub use ledger::{already_recorded, parse_training_day, AttendanceLedger, AttendanceSummary};
