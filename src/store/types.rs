//! Core data types for trend snapshots
//!
//! - `VideoTrendRecord`: one row per video per snapshot
//! - `SourceColumns`: which optional columns the source relation carried
//! - `Snapshot`: the full result set of one load

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single video's trend metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoTrendRecord {
    /// External platform identifier, never empty
    pub video_id: String,
    pub title: String,
    pub channel: String,
    /// Estimated views per hour, the ranking key
    pub view_velocity: f64,
    /// Hours since publish
    pub age_hours: f64,
    pub is_viral: bool,
    pub engagement_rate: f64,
    /// Derived from `video_id`, empty until derivation runs
    pub thumbnail_url: String,
    /// Derived from `video_id`, empty until derivation runs
    pub watch_url: String,
}

impl VideoTrendRecord {
    /// Create a record with only the required fields set
    pub fn new(
        video_id: impl Into<String>,
        title: impl Into<String>,
        channel: impl Into<String>,
        view_velocity: f64,
        age_hours: f64,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            channel: channel.into(),
            view_velocity,
            age_hours,
            is_viral: false,
            engagement_rate: 0.0,
            thumbnail_url: String::new(),
            watch_url: String::new(),
        }
    }

    /// Builder method: set the viral flag
    pub fn viral(mut self, is_viral: bool) -> Self {
        self.is_viral = is_viral;
        self
    }

    /// Builder method: set the engagement rate
    pub fn engagement(mut self, rate: f64) -> Self {
        self.engagement_rate = rate;
        self
    }

    /// Published no more than `max_age_hours` ago
    pub fn is_early(&self, max_age_hours: f64) -> bool {
        self.age_hours <= max_age_hours
    }
}

/// Optional columns present in the relation a snapshot was read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceColumns {
    pub has_is_viral: bool,
    pub has_engagement_rate: bool,
}

/// Everything read from storage during one render cycle
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Relation the rows came from
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub columns: SourceColumns,
    /// Velocity cutoff used to derive `is_viral`, when it was derived
    pub viral_threshold: Option<f64>,
    pub records: Vec<VideoTrendRecord>,
}

impl Snapshot {
    pub fn new(source: impl Into<String>, columns: SourceColumns, records: Vec<VideoTrendRecord>) -> Self {
        Self {
            source: source.into(),
            loaded_at: Utc::now(),
            columns,
            viral_threshold: None,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
