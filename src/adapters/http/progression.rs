//! XP and history endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{GrantXpCommand, ListHistoryQuery};
use crate::domain::foundation::Timestamp;

use super::dto::{GrantXpRequest, HistoryEntryResponse, HistoryParams};
use super::error::{json_body, ApiError};
use super::state::AppState;

/// POST /api/xp - Grant XP for an action
pub async fn grant_xp(
    State(state): State<AppState>,
    payload: Result<Json<GrantXpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;
    let cmd = GrantXpCommand {
        amount: request.amount()?,
        action: request.action,
        occurred_at: Timestamp::now(),
    };

    let grant = state.grant_xp_handler().handle(cmd).await?;
    Ok(Json(grant))
}

/// GET /api/xp - Current progression with tier metadata
pub async fn get_progression(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.get_progression_handler().handle().await?;
    Ok(Json(snapshot))
}

/// GET /api/history?limit= - Most recent XP-granting actions
pub async fn list_history(
    State(state): State<AppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let entries = state
        .list_history_handler()
        .handle(ListHistoryQuery {
            limit: params.limit,
        })
        .await?;

    let response: Vec<HistoryEntryResponse> =
        entries.into_iter().map(HistoryEntryResponse::from).collect();
    Ok(Json(response))
}
