//! Trendboard HTTP API
//!
//! HTTP layer for Trendboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Rendered dashboard (`?viral=1`, `?early=1`, `?all=1`, `?view=...`)
//!
//! ## Videos
//! - `GET /api/v1/videos` - Ranked videos for a view as JSON
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use trendboard::api::{serve, AppState};
//! use trendboard::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Config::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/videos", get(routes::videos::list_videos));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::dashboard_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.api.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Trendboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Trendboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const SEED: &str = "
        CREATE TABLE video_trends (
            video_id TEXT, title TEXT, channel TEXT, view_velocity REAL, age_hours REAL
        );
        INSERT INTO video_trends VALUES ('a', 'Alpha', 'Chan A', 100, 10);
        INSERT INTO video_trends VALUES ('b', 'Beta', 'Chan B', 500, 5);
        INSERT INTO video_trends VALUES ('c', 'Gamma', 'Chan C', 10, 48);
    ";

    const EMPTY: &str = "
        CREATE TABLE video_trends (
            video_id TEXT, title TEXT, channel TEXT, view_velocity REAL, age_hours REAL
        );
    ";

    const NO_TREND_TABLES: &str = "CREATE TABLE other (x INTEGER);";

    const CARD: &str = "class=\"card\"";
    const BADGE: &str = "class=\"viral\"";

    fn create_test_app(seed: Option<&str>) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("youtube.db");

        if let Some(sql) = seed {
            rusqlite::Connection::open(&db_path)
                .unwrap()
                .execute_batch(sql)
                .unwrap();
        }

        let mut config = Config::default();
        config.storage.db_path = db_path.to_string_lossy().to_string();

        (build_router(AppState::new(config)), dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(None);
        assert_eq!(get(app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app(Some(SEED));
        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_not_ready_without_database() {
        let (app, _dir) = create_test_app(None);
        assert_eq!(
            get(app, "/health/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(Some(SEED));
        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "ok");
    }

    #[tokio::test]
    async fn test_dashboard_default_view() {
        let (app, _dir) = create_test_app(Some(SEED));
        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Top Performing Videos"));
        assert_eq!(html.matches(CARD).count(), 3);
        assert_eq!(html.matches(BADGE).count(), 1);
        assert!(html.contains("VIRAL"));
    }

    #[tokio::test]
    async fn test_dashboard_trigger_precedence() {
        let (app, _dir) = create_test_app(Some(SEED));
        let html = body_text(get(app, "/?all=1&early=1").await).await;

        assert!(html.contains("Early Trending (Under 24 Hours)"));
        assert_eq!(html.matches(CARD).count(), 2);
    }

    #[tokio::test]
    async fn test_dashboard_detailed_view() {
        let (app, _dir) = create_test_app(Some(SEED));
        let html = body_text(get(app, "/?all=1").await).await;

        assert!(html.contains("Detailed Video Analysis"));
        assert_eq!(html.matches("Engagement: 0.000").count(), 3);
    }

    #[tokio::test]
    async fn test_dashboard_empty_snapshot() {
        let (app, _dir) = create_test_app(Some(EMPTY));
        let response = get(app, "/?viral=1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(crate::dashboard::EMPTY_NOTICE));
        assert!(!html.contains(CARD));
    }

    #[tokio::test]
    async fn test_dashboard_without_trend_tables() {
        let (app, _dir) = create_test_app(Some(NO_TREND_TABLES));
        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(crate::dashboard::EMPTY_NOTICE));
        assert!(!html.contains(CARD));
        assert!(!html.contains("class=\"metric-card\""));
    }

    #[tokio::test]
    async fn test_videos_without_trend_tables() {
        let (app, _dir) = create_test_app(Some(NO_TREND_TABLES));
        let response = get(app, "/api/v1/videos").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_missing_database() {
        let (app, _dir) = create_test_app(None);
        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_videos_json() {
        let (app, _dir) = create_test_app(Some(SEED));
        let response = get(app, "/api/v1/videos?view=early").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["source"], "video_trends");
        assert_eq!(body["view"], "early_trending");
        assert_eq!(body["total"], 2);
        assert_eq!(body["summary"]["total_videos"], 3);
        assert_eq!(body["summary"]["viral_videos"], 1);
        assert_eq!(body["videos"][0]["video_id"], "b");
        assert_eq!(
            body["videos"][0]["watch_url"],
            "https://www.youtube.com/watch?v=b"
        );
        assert_eq!(body["videos"][1]["video_id"], "a");
    }

    #[tokio::test]
    async fn test_videos_no_data() {
        let (app, _dir) = create_test_app(Some(EMPTY));
        let response = get(app, "/api/v1/videos").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NO_DATA");
    }
}
