//! Router assembly and middleware stack.

use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

use super::attendance::{attendance_summary, list_attendance, log_attendance, remove_attendance};
use super::profile::{get_graduation, get_profile, update_profile};
use super::progression::{get_progression, grant_xp, list_history};
use super::records::record_router;
use super::state::AppState;

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Every API route, without middleware.
///
/// # Routes
///
/// - `GET, PATCH /api/profile`
/// - `GET /api/graduation`
/// - `GET, POST /api/attendance`, `GET /api/attendance/summary`, `DELETE /api/attendance/:date`
/// - `GET, POST /api/xp`, `GET /api/history?limit=`
/// - CRUD under `/api/techniques`, `/api/workouts`, `/api/schedule`, `/api/diets`,
///   `/api/achievements`
/// - `GET /health`
pub fn api_router(state: AppState) -> Router {
    let records = state.records.clone();

    Router::new()
        .route("/api/profile", get(get_profile).patch(update_profile))
        .route("/api/graduation", get(get_graduation))
        .route("/api/attendance", get(list_attendance).post(log_attendance))
        .route("/api/attendance/summary", get(attendance_summary))
        .route("/api/attendance/:date", delete(remove_attendance))
        .route("/api/xp", get(get_progression).post(grant_xp))
        .route("/api/history", get(list_history))
        .with_state(state)
        .nest("/api/techniques", record_router(records.techniques))
        .nest("/api/workouts", record_router(records.workouts))
        .nest("/api/schedule", record_router(records.schedule))
        .nest("/api/diets", record_router(records.diets))
        .nest("/api/achievements", record_router(records.achievements))
        .route("/health", get(health))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

/// The full application: API routes, optional static client, and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = api_router(state);
    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::foundation::CalendarDate;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app(config: &ServerConfig) -> Router {
        let today = CalendarDate::from_ymd(2024, 3, 10).unwrap();
        let state = AppState::in_memory(today, &AppConfig::default().progression);
        build_router(state, config)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/api/profile").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn static_dir_serves_client_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>BJJ</h1>").unwrap();
        let config = ServerConfig {
            static_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let response = app(&config)
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_without_static_dir_is_not_found() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
