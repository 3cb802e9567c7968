//! SQLite-backed video catalog implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::{CatalogError, CatalogStats, NewVideoRecord, VideoCatalog, VideoRecord, WriteSummary};

/// SQLite-backed video catalog.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Create a new SQLite catalog, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            -- Imported releases. The id is deliberately NOT unique:
            -- historical rows for the same release may coexist.
            CREATE TABLE IF NOT EXISTS videos (
                sn INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL,
                filename TEXT NOT NULL,
                size REAL NOT NULL,
                resolution TEXT NOT NULL,
                duration TEXT NOT NULL,
                codec TEXT NOT NULL,
                bitrate INTEGER NOT NULL,
                chs BOOLEAN NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_videos_id ON videos(id);
            "#,
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(())
    }

    /// Convert a row to a VideoRecord.
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<VideoRecord> {
        let created_str: String = row.get(9)?;
        let updated_str: String = row.get(10)?;

        let created_at = DateTime::parse_from_rfc3339(&created_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        let updated_at = DateTime::parse_from_rfc3339(&updated_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(VideoRecord {
            sn: row.get(0)?,
            canonical_id: row.get(1)?,
            filename: row.get(2)?,
            size_mb: row.get(3)?,
            resolution: row.get(4)?,
            duration: row.get(5)?,
            codec: row.get(6)?,
            bitrate: row.get(7)?,
            chs: row.get(8)?,
            created_at,
            updated_at,
        })
    }

    /// Clamp a bitrate to what the INTEGER column can hold.
    fn bitrate_column(bitrate: u64) -> i64 {
        i64::try_from(bitrate).unwrap_or(i64::MAX)
    }

    /// Upsert one record through an existing connection or transaction.
    fn upsert_with(conn: &Connection, record: &NewVideoRecord) -> Result<(), CatalogError> {
        let now_str = Utc::now().to_rfc3339();

        // An error here is a store failure, not "row absent".
        let exists = conn
            .query_row(
                "SELECT 1 FROM videos WHERE id = ? LIMIT 1",
                params![&record.canonical_id],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| CatalogError::Database(e.to_string()))?
            .is_some();

        if exists {
            conn.execute(
                "UPDATE videos SET filename = ?, size = ?, resolution = ?, duration = ?,
                        codec = ?, bitrate = ?, chs = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    &record.filename,
                    record.size_mb,
                    &record.resolution,
                    &record.duration,
                    &record.codec,
                    Self::bitrate_column(record.bitrate),
                    record.chs,
                    &now_str,
                    &record.canonical_id,
                ],
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;
        } else {
            conn.execute(
                "INSERT INTO videos (id, filename, size, resolution, duration, codec, bitrate, chs, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    &record.canonical_id,
                    &record.filename,
                    record.size_mb,
                    &record.resolution,
                    &record.duration,
                    &record.codec,
                    Self::bitrate_column(record.bitrate),
                    record.chs,
                    &now_str,
                    &now_str,
                ],
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;
        }

        Ok(())
    }
}

impl VideoCatalog for SqliteCatalog {
    fn lookup(&self, canonical_id: &str) -> Result<Vec<VideoRecord>, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT sn, id, filename, size, resolution, duration, codec, bitrate, chs,
                        created_at, updated_at
                 FROM videos WHERE id = ?",
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![canonical_id], Self::row_to_record)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }
        Ok(records)
    }

    fn upsert(&self, record: &NewVideoRecord) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();
        Self::upsert_with(&conn, record)
    }

    fn write_batch(&self, records: &[NewVideoRecord]) -> Result<WriteSummary, CatalogError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut written = 0;
        for record in records {
            match Self::upsert_with(&tx, record) {
                Ok(()) => written += 1,
                Err(e) => {
                    tracing::warn!(id = %record.canonical_id, error = %e, "catalog write failed for row");
                }
            }
        }

        tx.commit().map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(WriteSummary {
            considered: records.len(),
            written,
        })
    }

    fn stats(&self) -> Result<CatalogStats, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let total_records: u64 = conn
            .query_row("SELECT COUNT(*) FROM videos", [], |row| row.get(0))
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let distinct_ids: u64 = conn
            .query_row("SELECT COUNT(DISTINCT id) FROM videos", [], |row| {
                row.get(0)
            })
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(CatalogStats {
            total_records,
            distinct_ids,
        })
    }

    fn clear(&self) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();

        conn.execute("DELETE FROM videos", [])
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(())
    }
}
