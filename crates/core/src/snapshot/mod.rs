//! Snapshot assembly: response model, scoring and the orchestration
//! service.

mod model;
mod scoring;
mod service;

pub use model::{FilingLinks, Snapshot};
pub use scoring::{composite_score, stars_from_score};
pub use service::SnapshotService;
