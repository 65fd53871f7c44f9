//! Application State
//!
//! Shared, immutable state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks; every request
//! still performs its own load.

use crate::api::error::{ApiError, ApiResult};
use crate::config::Config;
use crate::store::{Snapshot, SnapshotLoader};
use crate::trends;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Full configuration
    pub config: Arc<Config>,
    /// Loader for the trend database
    pub loader: Arc<SnapshotLoader>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from configuration
    pub fn new(config: Config) -> Self {
        let loader = SnapshotLoader::from_config(&config.storage);
        Self {
            config: Arc::new(config),
            loader: Arc::new(loader),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Run one load → derive → rank cycle on the blocking pool
    ///
    /// `Ok(None)` means there is no data: an empty snapshot or no readable source.
    pub async fn load_snapshot(&self) -> ApiResult<Option<Snapshot>> {
        let loader = Arc::clone(&self.loader);

        tokio::task::spawn_blocking(move || trends::load_ranked(&loader))
            .await
            .map_err(|e| ApiError::Internal(format!("Snapshot load task failed: {}", e)))?
            .map_err(ApiError::from)
    }

    /// Check that the trend database can be opened
    pub async fn database_ready(&self) -> bool {
        let loader = Arc::clone(&self.loader);

        match tokio::task::spawn_blocking(move || loader.probe()).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Trend database not ready");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Database probe task failed");
                false
            }
        }
    }
}
