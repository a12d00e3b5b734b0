//! SEC EDGAR filings lookup.
//!
//! Best effort by contract: every failure mode (malformed identifier,
//! network error, unexpected payload, no matching filing) yields `None`.
//! A missing filing link never fails a snapshot.

use std::time::Duration;

use reqwest::{header, Client};
use serde::Deserialize;
use tracing::debug;

/// Submissions API host.
const DEFAULT_BASE_URL: &str = "https://data.sec.gov";

/// Document archive host, distinct from the submissions API.
const ARCHIVE_BASE_URL: &str = "https://www.sec.gov/Archives/edgar/data";

/// SEC requires a descriptive User-Agent with a contact address.
const USER_AGENT: &str = "stocksnap/0.3 (contact: ops@stocksnap.example)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Periodic report forms worth linking.
const PERIODIC_FORMS: [&str; 2] = ["10-Q", "10-K"];

#[derive(Debug, Default, Deserialize)]
struct SubmissionsResponse {
    #[serde(default)]
    filings: Filings,
}

#[derive(Debug, Default, Deserialize)]
struct Filings {
    #[serde(default)]
    recent: RecentFilings,
}

/// Column-oriented filing history: index `i` of each vector describes the
/// same filing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentFilings {
    #[serde(default)]
    form: Vec<String>,
    #[serde(default)]
    accession_number: Vec<String>,
}

/// Client for the SEC EDGAR submissions API.
pub struct SecFilingsClient {
    client: Client,
    base_url: String,
}

impl SecFilingsClient {
    /// Create a client against the production SEC host.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Link to the company's most recent 10-Q or 10-K, if any.
    ///
    /// The identifier must be numeric (leading zeros tolerated); anything
    /// else is treated as absent.
    pub async fn latest_filing(&self, cik: &str) -> Option<String> {
        let cik_number: u64 = cik.trim().parse().ok()?;

        let url = format!("{}/submissions/CIK{:010}.json", self.base_url, cik_number);
        let recent = match self.fetch_submissions(&url).await {
            Ok(response) => response.filings.recent,
            Err(message) => {
                debug!(cik = cik_number, "filings lookup failed: {}", message);
                return None;
            }
        };

        recent
            .form
            .iter()
            .zip(recent.accession_number.iter())
            .find(|(form, _)| PERIODIC_FORMS.contains(&form.as_str()))
            .map(|(_, accession)| {
                let accession = accession.replace('-', "");
                format!("{}/{}/{}-index.html", ARCHIVE_BASE_URL, cik_number, accession)
            })
    }

    async fn fetch_submissions(&self, url: &str) -> Result<SubmissionsResponse, String> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        response.json().await.map_err(|e| e.to_string())
    }
}

impl Default for SecFilingsClient {
    fn default() -> Self {
        Self::new()
    }
}
