//! Yahoo Finance API response models.
//!
//! These models parse the `quoteSummary` responses (rich company data)
//! and the `chart` responses used for the last-traded-price fallback.

use serde::Deserialize;

/// Yahoo wraps numbers as `{"raw": 1.23, "fmt": "1.23"}`, or `{}` when
/// no data is available.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawNumber {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// Main response wrapper for the quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummaryEnvelope,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct QuoteSummaryEnvelope {
    /// Null for unknown symbols; empty for known symbols with no modules.
    pub result: Option<Vec<QuoteSummaryResult>>,
}

/// Individual result from the quoteSummary API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
    pub summary_detail: Option<SummaryDetailModule>,
    pub financial_data: Option<FinancialDataModule>,
    pub default_key_statistics: Option<KeyStatisticsModule>,
}

impl QuoteSummaryResult {
    /// An empty-but-successful payload: the symbol resolved, but Yahoo
    /// returned none of the requested modules.
    pub fn is_empty(&self) -> bool {
        self.price.is_none()
            && self.summary_detail.is_none()
            && self.financial_data.is_none()
            && self.default_key_statistics.is_none()
    }
}

/// `price` module: names and the regular-market quote.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceModule {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<RawNumber>,
    pub market_cap: Option<RawNumber>,
}

/// `summaryDetail` module: valuation ratios.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryDetailModule {
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawNumber>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<RawNumber>,
    pub market_cap: Option<RawNumber>,
}

/// `financialData` module: margins, growth and return ratios.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialDataModule {
    pub current_price: Option<RawNumber>,
    pub gross_margins: Option<RawNumber>,
    pub operating_margins: Option<RawNumber>,
    pub revenue_growth: Option<RawNumber>,
    pub earnings_growth: Option<RawNumber>,
    pub return_on_capital_employed: Option<RawNumber>,
    pub return_on_invested_capital: Option<RawNumber>,
    pub return_on_equity: Option<RawNumber>,
    pub debt_to_equity: Option<RawNumber>,
}

/// `defaultKeyStatistics` module: PEG and the SEC identifier (present for
/// US equities).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyStatisticsModule {
    pub peg_ratio: Option<RawNumber>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<RawNumber>,
    pub cik: Option<String>,
}

/// Response wrapper for the chart API (last-price fallback).
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartMeta {
    pub regular_market_price: Option<f64>,
}
