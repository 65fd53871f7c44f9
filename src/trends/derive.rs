//! Derived columns
//!
//! Fills in whatever the source relation did not carry:
//! - `is_viral`: velocity at or above the snapshot's 90th percentile
//! - `engagement_rate`: zero
//! - thumbnail and watch URLs, always rebuilt from `video_id`

use crate::store::Snapshot;

/// Quantile of the loaded velocities that marks a video as viral
pub const VIRAL_QUANTILE: f64 = 0.90;

/// Thumbnail image for a video
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

/// Canonical watch link for a video
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Quantile with linear interpolation between closest ranks
///
/// Returns `None` for an empty input. `q` is clamped to `[0, 1]`.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;

    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

/// Fill in missing columns and presentation URLs
pub fn derive(mut snapshot: Snapshot) -> Snapshot {
    if !snapshot.columns.has_is_viral {
        let velocities: Vec<f64> = snapshot.records.iter().map(|r| r.view_velocity).collect();
        snapshot.viral_threshold = quantile(&velocities, VIRAL_QUANTILE);

        if let Some(threshold) = snapshot.viral_threshold {
            for record in &mut snapshot.records {
                record.is_viral = record.view_velocity >= threshold;
            }
            tracing::debug!(threshold, "Derived viral flags from velocity quantile");
        }
    }

    if !snapshot.columns.has_engagement_rate {
        for record in &mut snapshot.records {
            record.engagement_rate = 0.0;
        }
    }

    for record in &mut snapshot.records {
        record.thumbnail_url = thumbnail_url(&record.video_id);
        record.watch_url = watch_url(&record.video_id);
    }

    snapshot
}
