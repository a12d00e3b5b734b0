use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use stocksnap_core::{SecFilingsClient, SnapshotService};
use stocksnap_market_data::{FmpProvider, RetryPolicy, YahooProvider};

use crate::config::Config;

pub struct AppState {
    pub snapshot_service: SnapshotService,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let retry = RetryPolicy {
        max_attempts: config.retry_max_attempts,
        base_delay: config.retry_base_delay,
    };
    let yahoo = match &config.yahoo_base_url {
        Some(url) => YahooProvider::with_base_url(url.clone()),
        None => YahooProvider::new(),
    }
    .with_retry(retry);
    let fmp = match &config.fmp_base_url {
        Some(url) => FmpProvider::with_base_url(url.clone(), config.fmp_api_key.clone()),
        None => FmpProvider::new(config.fmp_api_key.clone()),
    };
    let filings = match &config.sec_base_url {
        Some(url) => SecFilingsClient::with_base_url(url.clone()),
        None => SecFilingsClient::new(),
    };

    Arc::new(AppState {
        snapshot_service: SnapshotService::new(yahoo, fmp, filings),
    })
}
