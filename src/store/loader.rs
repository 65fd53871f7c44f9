//! Snapshot Loader - read-only SQLite access with ordered source fallback
//!
//! Reads every row of the first candidate relation that can be read.
//! The connection lives only for the duration of [`SnapshotLoader::load`].
//!
//! # Usage
//! ```ignore
//! let loader = SnapshotLoader::new(
//!     "youtube.db",
//!     vec!["video_viral_status".into(), "video_trends".into()],
//!     FallbackPolicy::AnyError,
//! );
//! let snapshot = loader.load()?;
//! ```

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Snapshot, SourceColumns, VideoTrendRecord};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

/// When a failed candidate relation hands over to the next one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Any failure moves on to the next relation
    #[default]
    AnyError,
    /// Only a missing relation moves on; other failures are returned
    MissingRelation,
}

impl FallbackPolicy {
    fn allows_fallback(self, err: &StoreError) -> bool {
        match self {
            FallbackPolicy::AnyError => true,
            FallbackPolicy::MissingRelation => err.is_missing_relation(),
        }
    }
}

/// Loads trend snapshots from a SQLite file
#[derive(Debug, Clone)]
pub struct SnapshotLoader {
    db_path: PathBuf,
    sources: Vec<String>,
    policy: FallbackPolicy,
}

impl SnapshotLoader {
    /// Create a loader trying `sources` in order
    pub fn new(db_path: impl Into<PathBuf>, sources: Vec<String>, policy: FallbackPolicy) -> Self {
        Self {
            db_path: db_path.into(),
            sources,
            policy,
        }
    }

    /// Create a loader from the storage section of the config
    pub fn from_config(config: &crate::config::StorageConfig) -> Self {
        Self::new(&config.db_path, config.sources.clone(), config.fallback)
    }

    /// Check that the database can be opened read-only
    pub fn probe(&self) -> StoreResult<()> {
        self.open().map(|_| ())
    }

    /// Load all rows from the first readable candidate relation
    pub fn load(&self) -> StoreResult<Snapshot> {
        let started = Instant::now();
        let conn = self.open()?;
        let mut last_error: Option<StoreError> = None;

        for relation in &self.sources {
            match read_relation(&conn, relation) {
                Ok((records, columns)) => {
                    tracing::info!(
                        source = %relation,
                        rows = records.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Loaded trend snapshot"
                    );
                    return Ok(Snapshot::new(relation.clone(), columns, records));
                }
                Err(err) if self.policy.allows_fallback(&err) => {
                    tracing::warn!(
                        source = %relation,
                        error = %err,
                        "Trend source unavailable, trying next candidate"
                    );
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(StoreError::NoUsableSource {
            tried: self.sources.clone(),
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no candidate relations configured".to_string()),
        })
    }

    fn open(&self) -> StoreResult<Connection> {
        Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Open {
            path: self.db_path.clone(),
            source,
        })
    }
}

/// Quote a relation name as an SQL identifier
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn read_relation(
    conn: &Connection,
    relation: &str,
) -> StoreResult<(Vec<VideoTrendRecord>, SourceColumns)> {
    let query_err = |source: rusqlite::Error| StoreError::Query {
        relation: relation.to_string(),
        source,
    };

    let sql = format!("SELECT * FROM {}", quote_identifier(relation));
    let mut stmt = conn.prepare(&sql).map_err(query_err)?;
    let layout = ColumnLayout::resolve(relation, &stmt.column_names())?;

    let mut rows = stmt.query([]).map_err(query_err)?;
    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(query_err)? {
        records.push(layout.read(relation, row)?);
    }

    Ok((records, layout.columns()))
}

/// Column positions resolved by name for one relation
#[derive(Debug)]
struct ColumnLayout {
    video_id: usize,
    title: usize,
    channel: usize,
    view_velocity: usize,
    age_hours: usize,
    is_viral: Option<usize>,
    engagement_rate: Option<usize>,
}

impl ColumnLayout {
    fn resolve(relation: &str, names: &[&str]) -> StoreResult<Self> {
        let find = |column: &str| names.iter().position(|n| n.eq_ignore_ascii_case(column));
        let require = |column: &str| {
            find(column).ok_or_else(|| StoreError::MissingColumn {
                relation: relation.to_string(),
                column: column.to_string(),
            })
        };

        Ok(Self {
            video_id: require("video_id")?,
            title: require("title")?,
            channel: require("channel")?,
            view_velocity: require("view_velocity")?,
            age_hours: require("age_hours")?,
            is_viral: find("is_viral"),
            engagement_rate: find("engagement_rate"),
        })
    }

    fn columns(&self) -> SourceColumns {
        SourceColumns {
            has_is_viral: self.is_viral.is_some(),
            has_engagement_rate: self.engagement_rate.is_some(),
        }
    }

    fn read(&self, relation: &str, row: &Row<'_>) -> StoreResult<VideoTrendRecord> {
        let invalid = |reason: String| StoreError::InvalidRow {
            relation: relation.to_string(),
            reason,
        };

        let video_id = text(row.get_ref(self.video_id)?);
        if video_id.is_empty() {
            return Err(invalid("empty video_id".to_string()));
        }

        let view_velocity = number(row.get_ref(self.view_velocity)?)
            .ok_or_else(|| invalid(format!("non-numeric view_velocity for video '{}'", video_id)))?;
        let age_hours = number(row.get_ref(self.age_hours)?)
            .ok_or_else(|| invalid(format!("non-numeric age_hours for video '{}'", video_id)))?;

        let is_viral = match self.is_viral {
            Some(idx) => flag(row.get_ref(idx)?),
            None => false,
        };
        let engagement_rate = match self.engagement_rate {
            Some(idx) => number(row.get_ref(idx)?).unwrap_or(0.0),
            None => 0.0,
        };

        Ok(VideoTrendRecord::new(
            video_id,
            text(row.get_ref(self.title)?),
            text(row.get_ref(self.channel)?),
            view_velocity,
            age_hours,
        )
        .viral(is_viral)
        .engagement(engagement_rate))
    }
}

fn text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Finite numeric value; `NaN` and infinities count as non-numeric
fn number(value: ValueRef<'_>) -> Option<f64> {
    let parsed = match value {
        ValueRef::Integer(i) => Some(i as f64),
        ValueRef::Real(f) => Some(f),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        ValueRef::Null | ValueRef::Blob(_) => None,
    };
    parsed.filter(|v: &f64| v.is_finite())
}

/// Viral only when the stored flag equals 1
fn flag(value: ValueRef<'_>) -> bool {
    number(value) == Some(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    const PRIMARY: &str = "video_viral_status";
    const FALLBACK: &str = "video_trends";

    fn sources() -> Vec<String> {
        vec![PRIMARY.to_string(), FALLBACK.to_string()]
    }

    fn create_db(sql: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("youtube.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(sql).unwrap();
        (dir, path)
    }

    const TRENDS_ONLY: &str = "
        CREATE TABLE video_trends (
            video_id TEXT, title TEXT, channel TEXT, view_velocity REAL, age_hours REAL
        );
        INSERT INTO video_trends VALUES ('a', 'Alpha', 'Chan A', 100, 10);
        INSERT INTO video_trends VALUES ('b', 'Beta', 'Chan B', 500.5, 5);
        INSERT INTO video_trends VALUES ('c', 'Gamma', 'Chan C', 10, 48);
    ";

    #[test]
    fn test_falls_back_when_primary_missing() {
        let (_dir, path) = create_db(TRENDS_ONLY);
        let loader = SnapshotLoader::new(&path, sources(), FallbackPolicy::AnyError);

        let snapshot = loader.load().unwrap();
        assert_eq!(snapshot.source, FALLBACK);
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.columns, SourceColumns::default());
        assert_eq!(snapshot.records[1].view_velocity, 500.5);
        assert_eq!(snapshot.records[0].view_velocity, 100.0);
    }

    #[test]
    fn test_prefers_primary_relation() {
        let sql = format!(
            "{}
            CREATE TABLE video_viral_status (
                video_id TEXT, title TEXT, channel TEXT, view_velocity INTEGER,
                age_hours INTEGER, is_viral INTEGER, engagement_rate REAL
            );
            INSERT INTO video_viral_status VALUES ('z', 'Zeta', 'Chan Z', 42, 3, 1, 0.25);
            INSERT INTO video_viral_status VALUES ('y', 'Eta', 'Chan Y', 7, 30, 0, NULL);",
            TRENDS_ONLY
        );
        let (_dir, path) = create_db(&sql);
        let loader = SnapshotLoader::new(&path, sources(), FallbackPolicy::MissingRelation);

        let snapshot = loader.load().unwrap();
        assert_eq!(snapshot.source, PRIMARY);
        assert!(snapshot.columns.has_is_viral);
        assert!(snapshot.columns.has_engagement_rate);
        assert!(snapshot.records[0].is_viral);
        assert_eq!(snapshot.records[0].engagement_rate, 0.25);
        assert!(!snapshot.records[1].is_viral);
        assert_eq!(snapshot.records[1].engagement_rate, 0.0);
    }

    #[test]
    fn test_empty_relation_is_not_an_error() {
        let (_dir, path) = create_db(
            "CREATE TABLE video_trends (
                video_id TEXT, title TEXT, channel TEXT, view_velocity REAL, age_hours REAL
            );",
        );
        let loader = SnapshotLoader::new(&path, sources(), FallbackPolicy::AnyError);

        let snapshot = loader.load().unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_no_usable_source() {
        let (_dir, path) = create_db("CREATE TABLE unrelated (x INTEGER);");
        let loader = SnapshotLoader::new(&path, sources(), FallbackPolicy::AnyError);

        let err = loader.load().unwrap_err();
        match err {
            StoreError::NoUsableSource { tried, last } => {
                assert_eq!(tried, sources());
                assert!(last.contains(FALLBACK));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_database_file() {
        let dir = tempdir().unwrap();
        let loader = SnapshotLoader::new(
            dir.path().join("absent.db"),
            sources(),
            FallbackPolicy::AnyError,
        );

        assert!(matches!(loader.load(), Err(StoreError::Open { .. })));
        assert!(loader.probe().is_err());
    }

    #[test]
    fn test_strict_policy_surfaces_other_errors() {
        let sql = format!(
            "{}
            CREATE TABLE video_viral_status (video_id TEXT, title TEXT);",
            TRENDS_ONLY
        );
        let (_dir, path) = create_db(&sql);

        let strict = SnapshotLoader::new(&path, sources(), FallbackPolicy::MissingRelation);
        match strict.load() {
            Err(StoreError::MissingColumn { relation, column }) => {
                assert_eq!(relation, PRIMARY);
                assert_eq!(column, "channel");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let lenient = SnapshotLoader::new(&path, sources(), FallbackPolicy::AnyError);
        assert_eq!(lenient.load().unwrap().source, FALLBACK);
    }

    #[test]
    fn test_empty_video_id_rejected() {
        let (_dir, path) = create_db(
            "CREATE TABLE video_trends (
                video_id TEXT, title TEXT, channel TEXT, view_velocity REAL, age_hours REAL
            );
            INSERT INTO video_trends VALUES ('', 'Nameless', 'Chan', 1, 1);",
        );
        let loader = SnapshotLoader::new(&path, vec![FALLBACK.to_string()], FallbackPolicy::MissingRelation);

        assert!(matches!(loader.load(), Err(StoreError::InvalidRow { .. })));
    }

    #[test]
    fn test_non_finite_velocity_rejected() {
        for bad in ["'NaN'", "'inf'", "'-infinity'"] {
            let sql = format!(
                "CREATE TABLE video_trends (
                    video_id TEXT, title TEXT, channel TEXT, view_velocity, age_hours REAL
                );
                INSERT INTO video_trends VALUES ('ok', 'Fine', 'Chan', 100, 1);
                INSERT INTO video_trends VALUES ('bad', 'Broken', 'Chan', {bad}, 1);"
            );
            let (_dir, path) = create_db(&sql);
            let loader = SnapshotLoader::new(&path, vec![FALLBACK.to_string()], FallbackPolicy::MissingRelation);

            match loader.load() {
                Err(StoreError::InvalidRow { reason, .. }) => {
                    assert!(reason.contains("view_velocity"));
                    assert!(reason.contains("bad"));
                }
                other => panic!("unexpected result for {bad}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_numeric_text_is_accepted() {
        let (_dir, path) = create_db(
            "CREATE TABLE video_trends (
                video_id TEXT, title TEXT, channel TEXT, view_velocity, age_hours
            );
            INSERT INTO video_trends VALUES ('a', 'Alpha', 'Chan', ' 12.5 ', '3');",
        );
        let loader = SnapshotLoader::new(&path, vec![FALLBACK.to_string()], FallbackPolicy::MissingRelation);

        let snapshot = loader.load().unwrap();
        assert_eq!(snapshot.records[0].view_velocity, 12.5);
        assert_eq!(snapshot.records[0].age_hours, 3.0);
    }

    #[test]
    fn test_viral_flag_requires_one() {
        let (_dir, path) = create_db(
            "CREATE TABLE video_viral_status (
                video_id TEXT, title TEXT, channel TEXT, view_velocity REAL,
                age_hours REAL, is_viral
            );
            INSERT INTO video_viral_status VALUES ('one', 'T', 'C', 1, 1, 1);
            INSERT INTO video_viral_status VALUES ('real', 'T', 'C', 1, 1, 1.0);
            INSERT INTO video_viral_status VALUES ('text', 'T', 'C', 1, 1, '1');
            INSERT INTO video_viral_status VALUES ('two', 'T', 'C', 1, 1, 2);
            INSERT INTO video_viral_status VALUES ('neg', 'T', 'C', 1, 1, -1);
            INSERT INTO video_viral_status VALUES ('word', 'T', 'C', 1, 1, 'true');
            INSERT INTO video_viral_status VALUES ('null', 'T', 'C', 1, 1, NULL);",
        );
        let loader = SnapshotLoader::new(&path, sources(), FallbackPolicy::AnyError);

        let snapshot = loader.load().unwrap();
        let viral: Vec<&str> = snapshot
            .records
            .iter()
            .filter(|r| r.is_viral)
            .map(|r| r.video_id.as_str())
            .collect();
        assert_eq!(viral, vec!["one", "real", "text"]);
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("video_trends"), "\"video_trends\"");
        assert_eq!(quote_identifier("odd\"name"), "\"odd\"\"name\"");
    }
}
