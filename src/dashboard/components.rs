//! Dashboard Components
//!
//! Leptos components for the dashboard page. They are rendered to HTML on
//! the server; nothing here is reactive after the page is sent.

use leptos::*;

use crate::dashboard::view::{Layout, Section, View};
use crate::store::VideoTrendRecord;
use crate::trends::SnapshotSummary;

pub const PAGE_TITLE: &str = "YouTube Trend Intelligence";
pub const SUBTITLE: &str = "Real-Time Viral Detection • Early Trend Prediction";
pub const EMPTY_NOTICE: &str = "No data available yet";

const GRID_TITLE_CHARS: usize = 80;
const DETAILED_TITLE_CHARS: usize = 70;

/// Title and subtitle shown on every page
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <h1>{PAGE_TITLE}</h1>
        <div class="subtitle">{SUBTITLE}</div>
    }
}

/// Full dashboard: header, summary tiles and the card section for a view
#[component]
pub fn DashboardPage(
    summary: SnapshotSummary,
    active: View,
    section: Section,
    /// Rows already capped and split into columns
    columns: Vec<Vec<VideoTrendRecord>>,
) -> impl IntoView {
    view! {
        <Header/>
        <SummaryTiles summary=summary active=active/>
        <hr class="divider"/>
        <CardSection heading={section.heading} layout={section.layout} columns=columns/>
    }
}

/// Header plus the no-data notice; no tiles, no cards
#[component]
pub fn EmptyPage() -> impl IntoView {
    view! {
        <Header/>
        <div class="notice">{EMPTY_NOTICE}</div>
    }
}

/// The three summary tiles, each with the button for its view
#[component]
pub fn SummaryTiles(summary: SnapshotSummary, active: View) -> impl IntoView {
    view! {
        <div class="tiles">
            <MetricTile
                label="Total Videos"
                value={summary.total_videos.to_string()}
                target=View::DetailedReview
                button="Detailed Review"
                active={active == View::DetailedReview}
            />
            <MetricTile
                label="Viral Videos"
                value={summary.viral_videos.to_string()}
                target=View::ViralOnly
                button="Viral Videos"
                active={active == View::ViralOnly}
            />
            <MetricTile
                label="Average Velocity"
                value={summary.average_velocity.to_string()}
                target=View::EarlyTrending
                button="Early Trending"
                active={active == View::EarlyTrending}
            />
        </div>
    }
}

/// Metric card with a GET form button submitting the view's trigger flag
#[component]
pub fn MetricTile(
    label: &'static str,
    #[prop(into)]
    value: String,
    target: View,
    button: &'static str,
    active: bool,
) -> impl IntoView {
    let key = target.trigger_key().unwrap_or("view");
    let button_class = if active {
        format!("trigger-{} active", target.name())
    } else {
        format!("trigger-{}", target.name())
    };

    view! {
        <div class="tile">
            <div class="metric-card">
                <div class="metric-title">{label}</div>
                <div class="metric-value">{value}</div>
            </div>
            <form method="get" action="/" class="big-button">
                <button type="submit" name=key value="1" class=button_class>
                    {button}
                </button>
            </form>
        </div>
    }
}

/// Section heading over a column-major card grid
#[component]
pub fn CardSection(
    heading: &'static str,
    layout: Layout,
    columns: Vec<Vec<VideoTrendRecord>>,
) -> impl IntoView {
    let grid_class = format!("grid grid-{}", columns.len());

    view! {
        <section>
            <h2>{heading}</h2>
            <div class=grid_class>
                {columns
                    .into_iter()
                    .map(|cards| view! {
                        <div class="column">
                            {cards
                                .into_iter()
                                .map(|row| match layout {
                                    Layout::Grid => view! { <VideoCard row=row/> }.into_view(),
                                    Layout::Detailed => view! { <DetailedCard row=row/> }.into_view(),
                                })
                                .collect_view()}
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Thumbnail card with viral badge and watch link
#[component]
pub fn VideoCard(row: VideoTrendRecord) -> impl IntoView {
    let title = truncate_chars(&row.title, GRID_TITLE_CHARS).to_string();
    let velocity = format!("Velocity: {}/hr", whole(row.view_velocity));
    let age = format!("Age: {} hrs", whole(row.age_hours));
    let badge = row.is_viral.then(|| view! { <div class="viral">"VIRAL"</div> });
    let VideoTrendRecord {
        channel,
        thumbnail_url,
        watch_url,
        ..
    } = row;
    let thumbnail_link = watch_url.clone();

    view! {
        <div class="card">
            <a href=thumbnail_link target="_blank">
                <img src=thumbnail_url alt=""/>
            </a>
            <div class="title">{title}</div>
            <div class="meta">
                {channel}
                <br/>
                {velocity}
                <br/>
                {age}
            </div>
            {badge}
            <div class="watch-btn">
                <a href=watch_url target="_blank">"Watch Video"</a>
            </div>
        </div>
    }
}

/// Text card with engagement; no thumbnail, badge or watch link
#[component]
pub fn DetailedCard(row: VideoTrendRecord) -> impl IntoView {
    let title = truncate_chars(&row.title, DETAILED_TITLE_CHARS).to_string();
    let channel = format!("Channel: {}", row.channel);
    let velocity = format!("Velocity: {}/hr", whole(row.view_velocity));
    let engagement = format!("Engagement: {}", format_engagement(row.engagement_rate));
    let age = format!("Age: {} hrs", whole(row.age_hours));

    view! {
        <div class="card">
            <div class="title">{title}</div>
            <div class="meta">
                {channel}
                <br/>
                {velocity}
                <br/>
                {engagement}
                <br/>
                {age}
            </div>
        </div>
    }
}

/// Truncate toward zero for display
pub(crate) fn whole(value: f64) -> i64 {
    value.trunc() as i64
}

/// Engagement rate rounded to three decimals
pub(crate) fn format_engagement(rate: f64) -> String {
    format!("{:.3}", (rate * 1000.0).round() / 1000.0)
}

/// First `max` characters of `s`
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
