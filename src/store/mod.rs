//! Trendboard Trend Store
//!
//! Read-only access to the externally maintained trend database:
//!
//! - **types**: Core data structures (VideoTrendRecord, Snapshot)
//! - **loader**: Ordered source fallback over a scoped SQLite connection
//! - **error**: Error types
//!
//! # Read Path
//!
//! ```text
//! open (read-only) → SELECT * FROM primary ──ok──→ Snapshot
//!                          │ fail
//!                          ↓
//!                    SELECT * FROM fallback ──ok──→ Snapshot
//!                          │ fail
//!                          ↓
//!                    NoUsableSource
//! ```
//!
//! Nothing in this module writes to the database; rows are produced by an
//! external ingestion job.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use loader::{FallbackPolicy, SnapshotLoader};
pub use types::{Snapshot, SourceColumns, VideoTrendRecord};
