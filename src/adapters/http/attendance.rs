//! Attendance endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{
    GetAttendanceSummaryQuery, LogAttendanceCommand, RemoveAttendanceCommand,
};
use crate::domain::foundation::Timestamp;

use super::dto::{AckResponse, LogAttendanceRequest};
use super::error::{json_body, ApiError};
use super::state::AppState;

/// GET /api/attendance - Every recorded training day
pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let dates = state.list_attendance_handler().handle().await?;
    Ok(Json(dates))
}

/// POST /api/attendance - Record a training day
pub async fn log_attendance(
    State(state): State<AppState>,
    payload: Result<Json<LogAttendanceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;
    state
        .log_attendance_handler()
        .handle(LogAttendanceCommand { date: request.date })
        .await?;
    Ok(Json(AckResponse::ok()))
}

/// DELETE /api/attendance/:date - Remove a training day if present
pub async fn remove_attendance(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .remove_attendance_handler()
        .handle(RemoveAttendanceCommand { date })
        .await?;
    Ok(Json(AckResponse::ok()))
}

/// GET /api/attendance/summary - Totals for all time, this month and this year
pub async fn attendance_summary(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetAttendanceSummaryQuery {
        today: Timestamp::now().date(),
    };
    let summary = state.attendance_summary_handler().handle(query).await?;
    Ok(Json(summary))
}
