//! Video Routes
//!
//! - GET /api/v1/videos - Ranked videos for a view as JSON

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::VideosResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::ViewTriggers;
use crate::trends::SnapshotSummary;

/// GET /api/v1/videos
///
/// Same selection as the dashboard page, capped the same way.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(triggers): Query<ViewTriggers>,
) -> ApiResult<Json<VideosResponse>> {
    let view = triggers.resolve();
    let snapshot = state.load_snapshot().await?.ok_or(ApiError::NoData)?;

    let config = &state.config.dashboard;
    let section = view.section(config);
    let rows = view.select(&snapshot.records, config);
    let total = rows.len();

    Ok(Json(VideosResponse {
        summary: SnapshotSummary::from_records(&snapshot.records),
        viral_threshold: snapshot.viral_threshold,
        loaded_at: snapshot.loaded_at,
        view,
        heading: section.heading.to_string(),
        total,
        videos: rows.into_iter().take(section.cap).cloned().collect(),
        source: snapshot.source,
    }))
}
