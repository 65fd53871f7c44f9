//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use crate::dashboard::View;
use crate::store::VideoTrendRecord;
use crate::trends::SnapshotSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================
// VIDEO DTOs
// ============================================

/// Ranked, filtered, capped view of one snapshot
#[derive(Debug, Serialize)]
pub struct VideosResponse {
    /// Relation the snapshot was read from
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    /// Velocity cutoff when `is_viral` was derived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viral_threshold: Option<f64>,
    pub summary: SnapshotSummary,
    pub view: View,
    pub heading: String,
    /// Rows matching the view before the cap
    pub total: usize,
    pub videos: Vec<VideoTrendRecord>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// "ok" or "error"
    pub database: String,
    pub uptime_seconds: u64,
    pub version: String,
}
