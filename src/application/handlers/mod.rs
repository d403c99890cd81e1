//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod attendance;
pub mod profile;
pub mod progression;
pub mod records;

pub use attendance::{
    GetAttendanceSummaryHandler, GetAttendanceSummaryQuery, ListAttendanceHandler,
    LogAttendanceCommand, LogAttendanceHandler, RemoveAttendanceCommand, RemoveAttendanceHandler,
};
pub use profile::{
    GetGraduationHandler, GetGraduationQuery, GetProfileHandler, UpdateProfileCommand,
    UpdateProfileHandler,
};
pub use progression::{
    GetProgressionHandler, GrantXpCommand, GrantXpHandler, ListHistoryHandler, ListHistoryQuery,
    ProgressionSnapshot,
};
pub use records::{
    CreateRecordHandler, DeleteRecordHandler, ListRecordsHandler, UpdateRecordCommand,
    UpdateRecordHandler,
};
