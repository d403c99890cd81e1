//! Generic CRUD endpoints shared by every record collection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::application::handlers::{
    CreateRecordHandler, DeleteRecordHandler, ListRecordsHandler, UpdateRecordCommand,
    UpdateRecordHandler,
};
use crate::domain::foundation::RecordId;
use crate::domain::records::Record;
use crate::ports::RecordRepository;

use super::dto::{AckResponse, CreatedResponse};
use super::error::{json_body, ApiError};

/// State for the routes of one collection.
pub struct RecordRoutes<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> Clone for RecordRoutes<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

/// Routes for one collection, to be nested under its base path.
///
/// - `GET /` - List records in ascending id order
/// - `POST /` - Create a record, returns `{id}`
/// - `PATCH /:id` - Update a subset of the updatable fields
/// - `DELETE /:id` - Delete the record if present
pub fn record_router<R: Record>(repository: Arc<dyn RecordRepository<R>>) -> Router {
    Router::new()
        .route("/", get(list_records::<R>).post(create_record::<R>))
        .route(
            "/:id",
            axum::routing::patch(update_record::<R>).delete(delete_record::<R>),
        )
        .with_state(RecordRoutes { repository })
}

fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    Ok(raw.parse::<RecordId>()?)
}

async fn list_records<R: Record>(
    State(routes): State<RecordRoutes<R>>,
) -> Result<impl IntoResponse, ApiError> {
    let records = ListRecordsHandler::new(routes.repository).handle().await?;
    Ok(Json(records))
}

async fn create_record<R: Record>(
    State(routes): State<RecordRoutes<R>>,
    payload: Result<Json<R::Draft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = json_body(payload)?;
    let id = CreateRecordHandler::new(routes.repository).handle(draft).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

async fn update_record<R: Record>(
    State(routes): State<RecordRoutes<R>>,
    Path(id): Path<String>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let patch = json_body(payload)?;
    UpdateRecordHandler::new(routes.repository)
        .handle(UpdateRecordCommand { id, patch })
        .await?;
    Ok(Json(AckResponse::ok()))
}

async fn delete_record<R: Record>(
    State(routes): State<RecordRoutes<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    DeleteRecordHandler::new(routes.repository).handle(id).await?;
    Ok(Json(AckResponse::ok()))
}
