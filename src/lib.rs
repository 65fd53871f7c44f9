//! # Trendboard
//!
//! YouTube Trend Intelligence - a read-only dashboard that ranks videos by
//! view velocity and flags the viral top decile of each snapshot.
//!
//! ## Features
//!
//! - **Ordered source fallback**: Reads the preferred relation, falls back to the next
//! - **Relative virality**: 90th-percentile velocity threshold recomputed per load
//! - **Four views**: Top performing, currently viral, early trending, detailed review
//! - **Server-rendered**: Axum serves HTML and a JSON mirror of every view
//!
//! ## Modules
//!
//! - [`store`]: Read-only SQLite snapshot loading
//! - [`trends`]: Derived columns, ranking and summary figures
//! - [`dashboard`]: View selection and HTML rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trendboard::config::DashboardConfig;
//! use trendboard::dashboard::{render_dashboard, View};
//! use trendboard::store::{FallbackPolicy, SnapshotLoader};
//! use trendboard::trends;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = SnapshotLoader::new(
//!         "youtube.db",
//!         vec!["video_viral_status".into(), "video_trends".into()],
//!         FallbackPolicy::AnyError,
//!     );
//!
//!     // Load, derive and rank one snapshot
//!     let snapshot = trends::load_ranked(&loader)?;
//!
//!     // Render the viral view
//!     let html = render_dashboard(snapshot.as_ref(), View::ViralOnly, &DashboardConfig::default());
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod store;
pub mod trends;

// Re-export top-level types for convenience
pub use store::{
    FallbackPolicy, Snapshot, SnapshotLoader, SourceColumns, StoreError, StoreResult,
    VideoTrendRecord,
};

pub use trends::{load_ranked, prepare, SnapshotSummary, VIRAL_QUANTILE};

pub use dashboard::{render_dashboard, View, ViewTriggers};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig, StorageConfig,
};
