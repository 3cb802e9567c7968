//! Duplicate detection against the catalog.

use serde::{Deserialize, Serialize};

use super::{CatalogError, VideoCatalog, VideoRecord};

/// Outcome of reconciling one canonical id against the catalog.
///
/// `exists` drives default selection state downstream: ids that are not
/// found are proposed for import, ids that are found are flagged as
/// probable duplicates and excluded from default selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reconciliation {
    /// True iff at least one prior record carries this id.
    pub exists: bool,
    /// All prior records with this id, in store order.
    pub prior: Vec<VideoRecord>,
}

/// Checks whether a canonical id already exists in the catalog.
///
/// A store failure propagates as `Err` and must not be read as "not found";
/// conflating the two would silently re-import duplicates.
pub fn reconcile(
    canonical_id: &str,
    catalog: &dyn VideoCatalog,
) -> Result<Reconciliation, CatalogError> {
    let prior = catalog.lookup(canonical_id)?;
    Ok(Reconciliation {
        exists: !prior.is_empty(),
        prior,
    })
}
