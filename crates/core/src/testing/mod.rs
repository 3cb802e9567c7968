//! Testing utilities and mock implementations.
//!
//! Mock implementations of the prober and catalog traits, allowing
//! scan and reconciliation tests without ffprobe or a real database.

mod mock_catalog;
mod mock_prober;

pub use mock_catalog::MockCatalog;
pub use mock_prober::MockProber;
