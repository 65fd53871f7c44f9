//! Velocity ranking

use crate::store::VideoTrendRecord;

/// Sort records by descending view velocity
///
/// The sort is stable: equal velocities keep their load order.
pub fn rank_by_velocity(records: &mut [VideoTrendRecord]) {
    records.sort_by(|a, b| b.view_velocity.total_cmp(&a.view_velocity));
}
