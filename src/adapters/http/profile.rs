//! Profile and graduation endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{GetGraduationQuery, UpdateProfileCommand};
use crate::domain::foundation::Timestamp;
use crate::domain::profile::ProfilePatch;

use super::dto::AckResponse;
use super::error::{json_body, ApiError};
use super::state::AppState;

/// GET /api/profile
pub async fn get_profile(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let profile = state.get_profile_handler().handle().await?;
    Ok(Json(profile))
}

/// PATCH /api/profile - Update any subset of the profile fields
pub async fn update_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let patch = json_body(payload)?;
    state
        .update_profile_handler()
        .handle(UpdateProfileCommand { patch })
        .await?;
    Ok(Json(AckResponse::ok()))
}

/// GET /api/graduation - Time-in-belt progress towards the next belt
pub async fn get_graduation(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let query = GetGraduationQuery {
        today: Timestamp::now().date(),
    };
    let status = state.get_graduation_handler().handle(query).await?;
    Ok(Json(status))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn get_profile_returns_defaults() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/profile", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Guerreiro");
        assert_eq!(body["belt"], "Branca");
        assert_eq!(body["stripes"], 0);
    }

    #[tokio::test]
    async fn patch_updates_only_supplied_fields() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/profile",
            Some(json!({ "weight": 82.5, "belt": "Azul" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (_, profile) = send(&app, Method::GET, "/api/profile", None).await;
        assert_eq!(profile["weight"], 82.5);
        assert_eq!(profile["belt"], "Azul");
        assert_eq!(profile["name"], "Guerreiro");
    }

    #[tokio::test]
    async fn patch_with_unknown_field_is_rejected() {
        let app = test_app();
        let (status, body) =
            send(&app, Method::PATCH, "/api/profile", Some(json!({ "age": 30 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn empty_patch_is_rejected() {
        let app = test_app();
        let (status, body) = send(&app, Method::PATCH, "/api/profile", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn out_of_range_stripes_are_rejected() {
        let app = test_app();
        let (status, body) =
            send(&app, Method::PATCH, "/api/profile", Some(json!({ "stripes": 5 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "stripes");
    }

    #[tokio::test]
    async fn graduation_reports_progress() {
        let app = test_app();
        send(
            &app,
            Method::PATCH,
            "/api/profile",
            Some(json!({ "belt_start_date": "2000-01-01" })),
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/api/graduation", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "available");
        assert_eq!(body["progress_percent"].as_f64(), Some(100.0));
        assert_eq!(body["eligible"], true);
        assert_eq!(body["next_belt"], "Azul");
    }
}
