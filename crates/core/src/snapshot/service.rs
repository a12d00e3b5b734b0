//! Snapshot orchestration.
//!
//! One provider answers each request in full: Yahoo first, FMP on any
//! Yahoo failure. Results from the two are never merged. The filings
//! lookup runs off the normalized identifier and cannot fail a request.

use tracing::{info, warn};

use stocksnap_market_data::{
    normalize_fmp, normalize_yahoo, CompanyData, FmpProvider, MarketDataError, YahooProvider,
};

use crate::filings::SecFilingsClient;
use crate::snapshot::model::{FilingLinks, Snapshot};
use crate::snapshot::scoring::{composite_score, stars_from_score};

const NOTE_YAHOO: &str = "Yahoo primary";
const NOTE_FMP: &str = "FMP fallback (Yahoo blocked/crumb/rate limit)";

/// Builds company snapshots from providers, filings and the scorer.
pub struct SnapshotService {
    yahoo: YahooProvider,
    fmp: FmpProvider,
    filings: SecFilingsClient,
}

impl SnapshotService {
    pub fn new(yahoo: YahooProvider, fmp: FmpProvider, filings: SecFilingsClient) -> Self {
        Self {
            yahoo,
            fmp,
            filings,
        }
    }

    /// Build a snapshot for a ticker.
    ///
    /// Errors carry the failing provider's boundary semantics: a Yahoo
    /// failure only surfaces if the FMP fallback also fails.
    pub async fn get_snapshot(&self, ticker: &str) -> Result<Snapshot, MarketDataError> {
        let ticker = ticker.trim().to_uppercase();

        let (data, provider_note) = self.fetch_company(&ticker).await?;

        let latest = match data.cik.as_deref() {
            Some(cik) => self.filings.latest_filing(cik).await,
            None => None,
        };

        let score = composite_score(&data.metrics);
        let (stars, stars_text) = stars_from_score(score);

        info!(
            ticker,
            source = data.source.as_str(),
            score,
            stars,
            "snapshot assembled"
        );

        Ok(Snapshot {
            ticker,
            name: data.name,
            price: data.price,
            market_cap: data.market_cap,
            metrics: data.metrics,
            composite_score: score,
            stars,
            stars_text,
            filings: FilingLinks {
                latest_10q_or_10k: latest,
            },
            notes: Some(format!("{}. Data cached 1h.", provider_note)),
        })
    }

    /// Primary-then-fallback provider selection. The switch is total: no
    /// field-level merge between the two sources.
    async fn fetch_company(
        &self,
        ticker: &str,
    ) -> Result<(CompanyData, &'static str), MarketDataError> {
        match self.yahoo.fetch_company(ticker).await {
            Ok(info) => Ok((normalize_yahoo(ticker, info), NOTE_YAHOO)),
            Err(err) => {
                warn!(ticker, "Yahoo failed, switching to FMP: {}", err);
                let info = self.fmp.fetch_company(ticker).await?;
                Ok((normalize_fmp(ticker, info), NOTE_FMP))
            }
        }
    }
}
