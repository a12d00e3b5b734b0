//! Financial Modeling Prep company data provider (fallback source).
//!
//! Assembles one payload from three sub-requests: profile, trailing
//! ratios and growth. The profile request is fatal on error; the other
//! two degrade to empty records so a partially answering upstream still
//! yields a usable payload.

mod models;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;
use urlencoding::encode;

use crate::errors::MarketDataError;

use models::{FmpFinancialGrowth, FmpProfile, FmpRatiosTtm};

pub const PROVIDER_ID: &str = "FMP";

const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Company data assembled from the three FMP endpoints.
///
/// PEG is never populated: FMP does not supply a forward PEG and no
/// derivation from growth data is attempted.
#[derive(Clone, Debug, Default)]
pub struct FmpCompanyInfo {
    pub company_name: Option<String>,
    pub symbol: Option<String>,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub price_earnings_ratio: Option<f64>,
    pub gross_margin: Option<f64>,
    pub operating_margin: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub eps_growth: Option<f64>,
    pub return_on_capital_employed: Option<f64>,
    pub return_on_invested_capital: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub cik: Option<String>,
}

/// Financial Modeling Prep provider.
pub struct FmpProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FmpProvider {
    /// Create a provider against the production FMP host. A `None` key is
    /// allowed at construction; the error surfaces when a fetch is
    /// actually attempted.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a provider against an alternate host.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch company data from the three FMP endpoints.
    ///
    /// Fails with [`MarketDataError::MissingApiKey`] when no credential is
    /// configured and with [`MarketDataError::UpstreamFailed`] when the
    /// profile request fails. Ratios and growth failures are absorbed.
    pub async fn fetch_company(&self, symbol: &str) -> Result<FmpCompanyInfo, MarketDataError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MarketDataError::MissingApiKey {
                provider: PROVIDER_ID.to_string(),
            })?;

        let profile: FmpProfile = self
            .get_first(&format!("/profile/{}", encode(symbol)), api_key)
            .await
            .map_err(|message| MarketDataError::UpstreamFailed {
                provider: PROVIDER_ID.to_string(),
                message: format!("profile request failed: {}", message),
            })?
            .unwrap_or_default();

        let ratios: FmpRatiosTtm = self
            .get_first(&format!("/ratios-ttm/{}", encode(symbol)), api_key)
            .await
            .unwrap_or_else(|message| {
                warn!(symbol, "FMP ratios-ttm request failed: {}", message);
                None
            })
            .unwrap_or_default();

        let growth: FmpFinancialGrowth = self
            .get_first(&format!("/financial-growth/{}", encode(symbol)), api_key)
            .await
            .unwrap_or_else(|message| {
                warn!(symbol, "FMP financial-growth request failed: {}", message);
                None
            })
            .unwrap_or_default();

        Ok(FmpCompanyInfo {
            company_name: profile.company_name,
            symbol: profile.symbol,
            price: profile.price,
            market_cap: profile.mkt_cap,
            price_earnings_ratio: ratios.price_earnings_ratio,
            gross_margin: ratios.gross_profit_margin,
            operating_margin: ratios.operating_profit_margin,
            revenue_growth: growth.revenue_growth,
            eps_growth: growth.eps_growth,
            return_on_capital_employed: ratios.return_on_capital_employed,
            return_on_invested_capital: ratios.return_on_invested_capital,
            return_on_equity: ratios.return_on_equity,
            debt_to_equity: ratios.debt_equity_ratio,
            cik: profile.cik,
        })
    }

    /// GET an endpoint and take the first element of the returned array.
    /// `Ok(None)` when the array is empty.
    async fn get_first<T: DeserializeOwned>(
        &self,
        path: &str,
        api_key: &str,
    ) -> Result<Option<T>, String> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("apikey", api_key)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        let mut records: Vec<T> = response.json().await.map_err(|e| e.to_string())?;
        if records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(records.swap_remove(0)))
        }
    }
}
