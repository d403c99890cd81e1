//! Attendance command and query handlers.

mod get_attendance_summary;
mod list_attendance;
mod log_attendance;
mod remove_attendance;

pub use get_attendance_summary::{GetAttendanceSummaryHandler, GetAttendanceSummaryQuery};
pub use list_attendance::ListAttendanceHandler;
pub use log_attendance::{LogAttendanceCommand, LogAttendanceHandler};
pub use remove_attendance::{RemoveAttendanceCommand, RemoveAttendanceHandler};
