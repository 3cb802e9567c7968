//! Video catalog - the persisted record of previously imported releases.
//!
//! The catalog is consulted during a scan to detect probable duplicates
//! before import. It carries no uniqueness constraint on the canonical id;
//! multiple historical rows may share an id and lookups return all of them.

mod reconciler;
mod sqlite;
mod types;

pub use reconciler::{reconcile, Reconciliation};
pub use sqlite::SqliteCatalog;
pub use types::*;

/// Trait for video catalog storage.
pub trait VideoCatalog: Send + Sync {
    /// Returns all records whose canonical id equals the given id, in the
    /// order the store keeps them (insertion order for the SQLite store).
    fn lookup(&self, canonical_id: &str) -> Result<Vec<VideoRecord>, CatalogError>;

    /// Inserts the record, or updates all non-key fields of existing rows
    /// that share its canonical id.
    fn upsert(&self, record: &NewVideoRecord) -> Result<(), CatalogError>;

    /// Upserts a batch of caller-selected records inside one transaction,
    /// committed at the end. Individual row failures are recorded and the
    /// batch continues.
    fn write_batch(&self, records: &[NewVideoRecord]) -> Result<WriteSummary, CatalogError>;

    /// Catalog statistics.
    fn stats(&self) -> Result<CatalogStats, CatalogError>;

    /// Removes all records.
    fn clear(&self) -> Result<(), CatalogError>;
}
