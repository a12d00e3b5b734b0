//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all provider operations
//! - [`FailureClass`]: Classification for determining retry behavior

mod classify;

pub use classify::{classify_message, FailureClass};

use thiserror::Error;

/// Errors surfaced by market data providers.
///
/// These are the errors the orchestrator sees; transient failures are
/// retried inside the primary client and never reach this enum unless the
/// retry budget is spent.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider is blocking the caller (rate limit or auth crumb
    /// rejection) and the retry budget is spent.
    /// Maps to HTTP 429 at the boundary.
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that blocked the request
        provider: String,
    },

    /// The provider failed in a way retrying will not fix, or retries on
    /// a non-blocking failure were exhausted.
    /// Maps to HTTP 502 at the boundary.
    #[error("Upstream failed: {provider} - {message}")]
    UpstreamFailed {
        /// The provider that failed
        provider: String,
        /// The failure message from the provider
        message: String,
    },

    /// The fallback provider has no API key configured. Raised only when
    /// the fallback path actually runs.
    /// Maps to HTTP 503 at the boundary.
    #[error("API key not configured for {provider}")]
    MissingApiKey {
        /// The provider missing its credential
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
