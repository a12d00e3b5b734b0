use serde::{Deserialize, Serialize};

use stocksnap_market_data::FundamentalMetrics;

/// Regulatory filing references for a company.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilingLinks {
    /// Index page of the most recent 10-Q or 10-K, if one was found.
    pub latest_10q_or_10k: Option<String>,
}

/// The company snapshot returned to API callers.
///
/// Built once per request and never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Requested ticker, uppercased.
    pub ticker: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub metrics: FundamentalMetrics,
    /// Composite quality score in [0, 100].
    pub composite_score: u8,
    /// Star rating in [1, 5].
    pub stars: u8,
    /// Rendered rating, always five glyphs.
    pub stars_text: String,
    pub filings: FilingLinks,
    /// Provenance note: which provider answered, plus the cache hint.
    pub notes: Option<String>,
}
