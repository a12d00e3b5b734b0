//! Yahoo Finance company data provider (primary source).
//!
//! One `quoteSummary` request per attempt, retried with exponential
//! backoff while the failure is classified as transient. An
//! empty-but-successful payload counts as a transient failure. When the
//! rich payload carries no usable price, a lighter-weight chart-meta call
//! supplies a last-traded-price candidate.

mod models;

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::{classify_message, FailureClass, MarketDataError};

use models::{ChartResponse, QuoteSummaryResponse, QuoteSummaryResult, RawNumber};

pub const PROVIDER_ID: &str = "YAHOO";

/// Default Yahoo Finance API host.
const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Modules requested from the quoteSummary endpoint.
const QUOTE_SUMMARY_MODULES: &str = "price,summaryDetail,financialData,defaultKeyStatistics";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

// ============================================================================
// Retry Policy
// ============================================================================

/// Retry policy for the primary provider.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Total attempt budget, the first try included.
    pub max_attempts: u32,
    /// Backoff base; the sleep after attempt `n` (0-based) is
    /// `base_delay * 2^n`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(1500),
        }
    }
}

impl RetryPolicy {
    /// Sleep duration before the retry following attempt `attempt`:
    /// 1.5s, 3s, 6s, 12s ... with the default base.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Company data assembled from one quoteSummary result.
///
/// Field semantics mirror Yahoo's own: prices in quote currency, margins
/// and growth rates as decimal fractions.
#[derive(Clone, Debug, Default)]
pub struct YahooCompanyInfo {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    /// `financialData.currentPrice`.
    pub current_price: Option<f64>,
    /// `price.regularMarketPrice`.
    pub regular_market_price: Option<f64>,
    /// Chart-meta price, fetched only when the two above are absent.
    pub last_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub forward_pe: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub gross_margins: Option<f64>,
    pub operating_margins: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub earnings_growth: Option<f64>,
    pub return_on_capital_employed: Option<f64>,
    pub return_on_invested_capital: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub cik: Option<String>,
}

fn raw(value: &Option<RawNumber>) -> Option<f64> {
    value.as_ref().and_then(|n| n.raw)
}

impl From<QuoteSummaryResult> for YahooCompanyInfo {
    fn from(result: QuoteSummaryResult) -> Self {
        let price = result.price.unwrap_or_default();
        let detail = result.summary_detail.unwrap_or_default();
        let financial = result.financial_data.unwrap_or_default();
        let stats = result.default_key_statistics.unwrap_or_default();

        Self {
            long_name: price.long_name,
            short_name: price.short_name,
            current_price: raw(&financial.current_price),
            regular_market_price: raw(&price.regular_market_price),
            last_price: None,
            market_cap: raw(&price.market_cap).or(raw(&detail.market_cap)),
            forward_pe: raw(&detail.forward_pe).or(raw(&stats.forward_pe)),
            trailing_pe: raw(&detail.trailing_pe),
            peg_ratio: raw(&stats.peg_ratio),
            gross_margins: raw(&financial.gross_margins),
            operating_margins: raw(&financial.operating_margins),
            revenue_growth: raw(&financial.revenue_growth),
            earnings_growth: raw(&financial.earnings_growth),
            return_on_capital_employed: raw(&financial.return_on_capital_employed),
            return_on_invested_capital: raw(&financial.return_on_invested_capital),
            return_on_equity: raw(&financial.return_on_equity),
            debt_to_equity: raw(&financial.debt_to_equity),
            cik: stats.cik,
        }
    }
}

// ============================================================================
// Classified fetch failure
// ============================================================================

/// A single-attempt failure, classified where it is constructed.
struct FetchFailure {
    class: FailureClass,
    message: String,
}

impl FetchFailure {
    fn new(message: String) -> Self {
        let class = classify_message(&message);
        Self { class, message }
    }

    fn empty_payload() -> Self {
        Self {
            class: FailureClass::Transient,
            message: "Empty info payload".to_string(),
        }
    }

    fn from_status(status: StatusCode, body: &str) -> Self {
        let snippet: String = body.chars().take(200).collect();
        Self::new(format!(
            "HTTP {} {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            snippet.trim()
        ))
    }

    fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            // reqwest's own message wording varies; pin the signature.
            Self {
                class: FailureClass::Transient,
                message: format!("Request timed out: {}", error),
            }
        } else {
            Self::new(error.to_string())
        }
    }
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance provider with retry and failure classification.
pub struct YahooProvider {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl YahooProvider {
    /// Create a provider against the production Yahoo host.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against an alternate host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch rich company data with retry and exponential backoff.
    ///
    /// Transient failures (rate limiting, crumb rejection, timeouts,
    /// truncated or empty responses) sleep the backoff and retry while
    /// attempts remain. Permanent failures stop after the single attempt.
    /// After the budget is spent, the error kind follows the last
    /// failure's classification: blocking signatures surface as
    /// [`MarketDataError::RateLimited`], everything else as
    /// [`MarketDataError::UpstreamFailed`].
    pub async fn fetch_company(&self, symbol: &str) -> Result<YahooCompanyInfo, MarketDataError> {
        let mut last = FetchFailure::empty_payload();

        for attempt in 0..self.retry.max_attempts {
            match self.fetch_info_once(symbol).await {
                Ok(Some(mut info)) => {
                    if info.current_price.is_none() && info.regular_market_price.is_none() {
                        info.last_price = self.fetch_last_price(symbol).await;
                    }
                    return Ok(info);
                }
                Ok(None) => last = FetchFailure::empty_payload(),
                Err(failure) => last = failure,
            }

            if attempt + 1 < self.retry.max_attempts && last.class.is_transient() {
                let delay = self.retry.backoff_delay(attempt);
                debug!(
                    symbol,
                    attempt,
                    ?delay,
                    "transient Yahoo failure, backing off: {}",
                    last.message
                );
                tokio::time::sleep(delay).await;
                continue;
            }
            break;
        }

        warn!(symbol, "Yahoo lookup failed: {}", last.message);
        match last.class {
            FailureClass::RateLimited => Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            }),
            _ => Err(MarketDataError::UpstreamFailed {
                provider: PROVIDER_ID.to_string(),
                message: last.message,
            }),
        }
    }

    /// One quoteSummary attempt. `Ok(None)` is the empty-but-successful
    /// payload case.
    async fn fetch_info_once(&self, symbol: &str) -> Result<Option<YahooCompanyInfo>, FetchFailure> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url,
            encode(symbol),
            QUOTE_SUMMARY_MODULES
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(FetchFailure::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchFailure::from_status(status, &body));
        }

        let body = response.text().await.map_err(FetchFailure::from_reqwest)?;
        let parsed: QuoteSummaryResponse = serde_json::from_str(&body)
            .map_err(|e| FetchFailure::new(format!("Failed to parse quoteSummary response: {}", e)))?;

        let result = parsed
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .next();

        match result {
            Some(r) if !r.is_empty() => Ok(Some(YahooCompanyInfo::from(r))),
            _ => Ok(None),
        }
    }

    /// Last-traded-price fallback from the chart endpoint. Best effort:
    /// any failure leaves the price absent.
    async fn fetch_last_price(&self, symbol: &str) -> Option<f64> {
        let url = format!(
            "{}/v8/finance/chart/{}?range=1d&interval=1d",
            self.base_url,
            encode(symbol)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;

        let parsed: ChartResponse = response.json().await.ok()?;
        parsed
            .chart
            .result?
            .into_iter()
            .next()?
            .meta
            .regular_market_price
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}
