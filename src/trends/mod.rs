//! Trend Processing
//!
//! Turns a raw snapshot into the ranked set the dashboard renders:
//!
//! ```text
//! Snapshot (raw) → derive (viral flag, engagement, URLs) → rank (velocity desc)
//! ```
//!
//! The viral threshold is relative: it is recomputed from every freshly
//! loaded snapshot and never carried across loads.

pub mod derive;
pub mod rank;
pub mod summary;

pub use self::derive::{derive, quantile, thumbnail_url, watch_url, VIRAL_QUANTILE};
pub use rank::rank_by_velocity;
pub use summary::SnapshotSummary;

use crate::store::{Snapshot, SnapshotLoader, StoreError, StoreResult};

/// Derive missing columns and rank by velocity
pub fn prepare(snapshot: Snapshot) -> Snapshot {
    let mut snapshot = derive(snapshot);
    rank_by_velocity(&mut snapshot.records);
    snapshot
}

/// Run one load cycle
///
/// Returns `None` when the snapshot holds no rows or when no candidate
/// relation could be read. An unopenable database is still an error.
pub fn load_ranked(loader: &SnapshotLoader) -> StoreResult<Option<Snapshot>> {
    let snapshot = match loader.load() {
        Ok(snapshot) => snapshot,
        Err(StoreError::NoUsableSource { tried, last }) => {
            tracing::warn!(tried = ?tried, error = %last, "No readable trend source");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    if snapshot.is_empty() {
        tracing::warn!(source = %snapshot.source, "Trend snapshot is empty");
        return Ok(None);
    }

    Ok(Some(prepare(snapshot)))
}
