//! Canonical, provider-agnostic models.

mod company;
mod metrics;

pub use company::{CompanyData, DataSource};
pub use metrics::FundamentalMetrics;
