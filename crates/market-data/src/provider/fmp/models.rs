//! Financial Modeling Prep API response models.
//!
//! Every endpoint returns a JSON array; only the first element is used.
//! Fields default so a missing or empty record degrades to all-`None`.

use serde::Deserialize;

/// `/profile/{symbol}`: identity, price and market cap.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FmpProfile {
    pub symbol: Option<String>,
    pub company_name: Option<String>,
    pub price: Option<f64>,
    pub mkt_cap: Option<f64>,
    pub cik: Option<String>,
}

/// `/ratios-ttm/{symbol}`: trailing-twelve-month ratios.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FmpRatiosTtm {
    #[serde(rename = "priceEarningsRatioTTM")]
    pub price_earnings_ratio: Option<f64>,
    #[serde(rename = "grossProfitMarginTTM")]
    pub gross_profit_margin: Option<f64>,
    #[serde(rename = "operatingProfitMarginTTM")]
    pub operating_profit_margin: Option<f64>,
    #[serde(rename = "returnOnCapitalEmployedTTM")]
    pub return_on_capital_employed: Option<f64>,
    #[serde(rename = "returnOnInvestedCapitalTTM")]
    pub return_on_invested_capital: Option<f64>,
    #[serde(rename = "returnOnEquityTTM")]
    pub return_on_equity: Option<f64>,
    #[serde(rename = "debtEquityRatioTTM")]
    pub debt_equity_ratio: Option<f64>,
}

/// `/financial-growth/{symbol}`: growth rates.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FmpFinancialGrowth {
    #[serde(rename = "revenueGrowthTTM")]
    pub revenue_growth: Option<f64>,
    // FMP spells this one lowercase.
    #[serde(rename = "epsgrowthTTM")]
    pub eps_growth: Option<f64>,
}
