//! HTML rendering for the trend dashboard
//!
//! Components from [`crate::dashboard::components`] are rendered to a string
//! with Leptos SSR and wrapped in a static document shell. Every function
//! here is a pure projection: the same rows, view and config always produce
//! the same document.

use leptos::*;

use crate::config::DashboardConfig;
use crate::dashboard::components::{CardSection, DashboardPage, EmptyPage};
use crate::dashboard::style::STYLESHEET;
use crate::dashboard::view::{Layout, View};
use crate::store::{Snapshot, VideoTrendRecord};
use crate::trends::SnapshotSummary;

pub use crate::dashboard::components::{EMPTY_NOTICE, PAGE_TITLE, SUBTITLE};

/// Render the page for a load outcome; `None` or an empty snapshot gives the notice
pub fn render_dashboard(snapshot: Option<&Snapshot>, view: View, config: &DashboardConfig) -> String {
    match snapshot {
        Some(snapshot) if !snapshot.is_empty() => render_page(snapshot, view, config),
        _ => render_empty_page(),
    }
}

/// Render the full dashboard for a ranked snapshot
pub fn render_page(snapshot: &Snapshot, view: View, config: &DashboardConfig) -> String {
    let summary = SnapshotSummary::from_records(&snapshot.records);
    let section = view.section(config);
    let rows = view.select(&snapshot.records, config);
    let columns = split_columns(&rows, section.cap, section.columns);

    let body = leptos::ssr::render_to_string(move || {
        view! { <DashboardPage summary=summary active=view section=section columns=columns/> }
    });
    document(&body)
}

/// Header plus the no-data notice; no tiles, no cards
pub fn render_empty_page() -> String {
    let body = leptos::ssr::render_to_string(|| view! { <EmptyPage/> });
    document(&body)
}

/// Thumbnail cards laid out column-major over `columns` columns
///
/// Rows beyond `cap` are dropped.
pub fn render_grid(rows: &[&VideoTrendRecord], heading: &'static str, cap: usize, columns: usize) -> String {
    render_section(rows, heading, Layout::Grid, cap, columns)
}

/// Text cards with engagement, no thumbnail, badge or watch link
///
/// Rows beyond `cap` are dropped.
pub fn render_detailed(
    rows: &[&VideoTrendRecord],
    heading: &'static str,
    cap: usize,
    columns: usize,
) -> String {
    render_section(rows, heading, Layout::Detailed, cap, columns)
}

fn render_section(
    rows: &[&VideoTrendRecord],
    heading: &'static str,
    layout: Layout,
    cap: usize,
    columns: usize,
) -> String {
    let columns = split_columns(rows, cap, columns);
    leptos::ssr::render_to_string(move || {
        view! { <CardSection heading=heading layout=layout columns=columns/> }
    })
    .to_string()
}

/// Deal the first `cap` rows round-robin into `columns` buckets
fn split_columns(rows: &[&VideoTrendRecord], cap: usize, columns: usize) -> Vec<Vec<VideoTrendRecord>> {
    let columns = columns.max(1);
    let mut buckets: Vec<Vec<VideoTrendRecord>> = vec![Vec::new(); columns];

    for (idx, row) in rows.iter().take(cap).enumerate() {
        buckets[idx % columns].push((*row).clone());
    }

    buckets
}

fn document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = PAGE_TITLE,
        css = STYLESHEET,
        body = body,
    )
}
