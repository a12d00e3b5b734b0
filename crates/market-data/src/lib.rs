//! Stocksnap market data crate.
//!
//! Provider-agnostic company data fetching for the snapshot service.
//!
//! # Overview
//!
//! Two providers are supported:
//! - Yahoo Finance (primary): one rich `quoteSummary` call per attempt,
//!   retried with exponential backoff on transient failures.
//! - Financial Modeling Prep (fallback): three smaller calls (profile,
//!   trailing ratios, growth), tolerating partial failure.
//!
//! Both payload shapes are reconciled into one canonical schema by the
//! [`normalize`] module, so downstream scoring never sees which provider
//! answered.
//!
//! # Core Types
//!
//! - [`CompanyData`] - Normalized company data with provider provenance
//! - [`FundamentalMetrics`] - Canonical, all-optional fundamental ratios
//! - [`MarketDataError`] - Error enum for all provider operations
//! - [`FailureClass`] - Retry classification of a provider failure

pub mod errors;
pub mod models;
pub mod normalize;
pub mod provider;

// Re-export the public interface
pub use errors::{FailureClass, MarketDataError};
pub use models::{CompanyData, DataSource, FundamentalMetrics};
pub use normalize::{normalize_fmp, normalize_yahoo};
pub use provider::fmp::{FmpCompanyInfo, FmpProvider};
pub use provider::yahoo::{RetryPolicy, YahooCompanyInfo, YahooProvider};
