//! Dashboard Route
//!
//! - GET / - Rendered dashboard page
//!
//! Query flags `viral`, `early` and `all` mirror the dashboard buttons;
//! `view=default|viral|early|detailed` is accepted as well.

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{render_dashboard, ViewTriggers};

/// GET /
///
/// One full render cycle: load, derive, rank, select, render.
/// An empty snapshot renders the no-data notice rather than an error.
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(triggers): Query<ViewTriggers>,
) -> ApiResult<Html<String>> {
    let view = triggers.resolve();
    let snapshot = state.load_snapshot().await?;

    tracing::debug!(view = %view, rows = snapshot.as_ref().map_or(0, |s| s.len()), "Rendering dashboard");

    Ok(Html(render_dashboard(
        snapshot.as_ref(),
        view,
        &state.config.dashboard,
    )))
}
