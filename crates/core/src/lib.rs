//! Stocksnap core crate.
//!
//! Assembles company snapshots: provider orchestration (Yahoo primary,
//! FMP fallback), regulatory filings lookup, composite scoring and the
//! star rating. HTTP surface lives in the server app; this crate is the
//! business logic behind it.

pub mod filings;
pub mod snapshot;

pub use filings::SecFilingsClient;
pub use snapshot::{
    composite_score, stars_from_score, FilingLinks, Snapshot, SnapshotService,
};
