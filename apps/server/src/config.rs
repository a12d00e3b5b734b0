use std::{net::SocketAddr, time::Duration};

/// Server configuration, sourced from the environment.
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Credential for the FMP fallback provider. Absence is not an error
    /// until the fallback path actually runs.
    pub fmp_api_key: Option<String>,
    /// Host overrides, mainly for tests against local mocks.
    pub yahoo_base_url: Option<String>,
    pub fmp_base_url: Option<String>,
    pub sec_base_url: Option<String>,
    pub retry_max_attempts: u32,
    pub retry_base_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SNAP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid SNAP_LISTEN_ADDR");
        let cors_allow = std::env::var("SNAP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SNAP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "60000".into())
            .parse()
            .unwrap_or(60000);
        let fmp_api_key = std::env::var("FMP_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let retry_max_attempts: u32 = std::env::var("SNAP_RETRY_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "4".into())
            .parse()
            .unwrap_or(4);
        let retry_base_ms: u64 = std::env::var("SNAP_RETRY_BASE_MS")
            .unwrap_or_else(|_| "1500".into())
            .parse()
            .unwrap_or(1500);
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            fmp_api_key,
            yahoo_base_url: std::env::var("SNAP_YAHOO_BASE_URL").ok(),
            fmp_base_url: std::env::var("SNAP_FMP_BASE_URL").ok(),
            sec_base_url: std::env::var("SNAP_SEC_BASE_URL").ok(),
            retry_max_attempts,
            retry_base_delay: Duration::from_millis(retry_base_ms),
        }
    }
}
