//! Snapshot-level figures shown in the dashboard header tiles

use crate::store::VideoTrendRecord;
use serde::Serialize;

/// Headline numbers for one snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub total_videos: usize,
    pub viral_videos: usize,
    /// Mean velocity, truncated toward zero
    pub average_velocity: i64,
}

impl SnapshotSummary {
    pub fn from_records(records: &[VideoTrendRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let total: f64 = records.iter().map(|r| r.view_velocity).sum();

        Self {
            total_videos: records.len(),
            viral_videos: records.iter().filter(|r| r.is_viral).count(),
            average_velocity: (total / records.len() as f64).trunc() as i64,
        }
    }
}
