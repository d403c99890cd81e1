//! Integration tests for the HTTP API over a real SQLite database.
//!
//! Each test migrates and bootstraps a fresh in-memory database, then drives
//! the fully layered router with `oneshot` requests.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bjj_elite::adapters::http::{build_router, AppState};
use bjj_elite::adapters::sqlite::{bootstrap, connect, run_migrations};
use bjj_elite::config::{AppConfig, DatabaseConfig};
use bjj_elite::domain::catalogue;
use bjj_elite::domain::foundation::Timestamp;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn app_with(seed_defaults: bool) -> Router {
    let config = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            seed_defaults,
            ..Default::default()
        },
        ..Default::default()
    };

    let pool = connect(&config.database).await.unwrap();
    run_migrations(&pool).await.unwrap();
    bootstrap(&pool, Timestamp::now(), config.database.seed_defaults)
        .await
        .unwrap();

    build_router(AppState::sqlite(pool, &config.progression), &config.server)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |json| Body::from(json.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// =============================================================================
// Startup
// =============================================================================

#[tokio::test]
async fn fresh_database_serves_seeded_catalogue() {
    let app = app_with(true).await;

    let (status, techniques) = send(&app, Method::GET, "/api/techniques", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        techniques.as_array().unwrap().len(),
        catalogue::techniques().len()
    );

    let (_, workouts) = send(&app, Method::GET, "/api/workouts", None).await;
    assert_eq!(workouts.as_array().unwrap().len(), catalogue::workouts().len());

    let (_, achievements) = send(&app, Method::GET, "/api/achievements", None).await;
    let unlocked: Vec<&Value> = achievements
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["unlocked"] == true)
        .collect();
    assert_eq!(unlocked.len(), 1);
}

#[tokio::test]
async fn fresh_profile_has_graduation_progress() {
    let app = app_with(false).await;

    let (status, profile) = send(&app, Method::GET, "/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["belt"], "Branca");
    assert_eq!(profile["height"], 1.75);

    let (status, graduation) = send(&app, Method::GET, "/api/graduation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(graduation["status"], "available");
    assert_eq!(graduation["months_in_belt"], 0);
    assert_eq!(graduation["min_months"], 12);
}

// =============================================================================
// Profile
// =============================================================================

#[tokio::test]
async fn profile_patch_persists_and_feeds_graduation() {
    let app = app_with(false).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/profile",
        Some(json!({ "belt": "Roxa", "belt_start_date": "2000-01-01", "stripes": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, profile) = send(&app, Method::GET, "/api/profile", None).await;
    assert_eq!(profile["belt"], "Roxa");
    assert_eq!(profile["belt_start_date"], "2000-01-01");
    assert_eq!(profile["stripes"], 2);
    assert_eq!(profile["name"], "Guerreiro");

    let (_, graduation) = send(&app, Method::GET, "/api/graduation", None).await;
    assert_eq!(graduation["min_months"], 18);
    assert_eq!(graduation["next_belt"], "Marrom");
    assert_eq!(graduation["eligible"], true);
}

#[tokio::test]
async fn invalid_profile_patch_leaves_profile_untouched() {
    let app = app_with(false).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/profile",
        Some(json!({ "name": "Rickson", "stripes": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (_, profile) = send(&app, Method::GET, "/api/profile", None).await;
    assert_eq!(profile["name"], "Guerreiro");
}

// =============================================================================
// Attendance
// =============================================================================

#[tokio::test]
async fn attendance_lifecycle() {
    let app = app_with(false).await;
    let day = Some(json!({ "date": "2024-02-29" }));

    let (status, body) = send(&app, Method::POST, "/api/attendance", day.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = send(&app, Method::POST, "/api/attendance", day.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ATTENDANCE_ALREADY_RECORDED");

    let (_, dates) = send(&app, Method::GET, "/api/attendance", None).await;
    assert_eq!(dates, json!(["2024-02-29"]));

    let (status, _) = send(&app, Method::DELETE, "/api/attendance/2024-02-29", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::POST, "/api/attendance", day).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn impossible_calendar_day_is_invalid_date() {
    let app = app_with(false).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/attendance",
        Some(json!({ "date": "2023-02-29" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");
}

// =============================================================================
// Progression
// =============================================================================

#[tokio::test]
async fn xp_grants_accumulate_with_history() {
    let app = app_with(false).await;

    for (amount, action) in [(450, "Treino"), (100, "Competição")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/xp",
            Some(json!({ "amount": amount, "action": action })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, state) = send(&app, Method::GET, "/api/xp", None).await;
    assert_eq!(state["total_xp"], 550);
    assert_eq!(state["level"], "Guerreiro");
    assert_eq!(state["streak"], 1);

    let (_, history) = send(&app, Method::GET, "/api/history", None).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["action"], "Competição");
    assert_eq!(history[0]["xp"], 100);
    assert_eq!(history[1]["xp"], 450);
}

#[tokio::test]
async fn history_limit_is_capped() {
    let app = app_with(false).await;
    for _ in 0..55 {
        send(&app, Method::POST, "/api/xp", Some(json!({ "amount": 1, "action": "x" }))).await;
    }

    let (_, history) = send(&app, Method::GET, "/api/history?limit=500", None).await;
    assert_eq!(history.as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn non_integer_amount_changes_nothing() {
    let app = app_with(false).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/xp",
        Some(json!({ "amount": "cem", "action": "Treino" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");

    let (_, history) = send(&app, Method::GET, "/api/history", None).await;
    assert_eq!(history, json!([]));
}

// =============================================================================
// Records
// =============================================================================

#[tokio::test]
async fn diet_crud_round_trip() {
    let app = app_with(false).await;
    let content = "{\"cafe\":[\"ovos\",\"aveia\"]}";

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/diets",
        Some(json!({ "title": "Bulking", "kcal": "3200", "content": content })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/diets/{}", id),
        Some(json!({ "kcal": "3000" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, diets) = send(&app, Method::GET, "/api/diets", None).await;
    assert_eq!(diets[0]["kcal"], "3000");
    assert_eq!(diets[0]["content"], content);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/diets/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/diets/{}", id),
        Some(json!({ "kcal": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "RECORD_NOT_FOUND");
}

#[tokio::test]
async fn workout_type_field_round_trips() {
    let app = app_with(false).await;

    send(
        &app,
        Method::POST,
        "/api/workouts",
        Some(json!({ "type": "Warmup", "name": "Polichinelo", "sets": 3, "rest": 30 })),
    )
    .await;

    let (_, workouts) = send(&app, Method::GET, "/api/workouts", None).await;
    assert_eq!(workouts[0]["type"], "Warmup");
    assert_eq!(workouts[0]["completed"], false);
    assert_eq!(workouts[0]["rest"], 30);
}
