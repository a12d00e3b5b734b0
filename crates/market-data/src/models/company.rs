use serde::{Deserialize, Serialize};

use super::metrics::FundamentalMetrics;

/// Which provider answered the request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DataSource {
    Yahoo,
    Fmp,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Yahoo => "YAHOO",
            DataSource::Fmp => "FMP",
        }
    }
}

/// Normalized company data, the single schema both providers map into.
///
/// Request-scoped value object: built once per lookup, never shared or
/// persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompanyData {
    /// Provider that supplied the data.
    pub source: DataSource,

    /// Display name, long name preferred over short name over ticker.
    pub name: Option<String>,

    /// Current share price.
    pub price: Option<f64>,

    /// Market capitalization.
    pub market_cap: Option<f64>,

    /// Regulator-assigned company identifier used for filings lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cik: Option<String>,

    /// Canonical fundamental metrics.
    pub metrics: FundamentalMetrics,
}
