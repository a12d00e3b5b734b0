//! Integration tests for the FMP fallback provider against a local mock
//! server.

use mockito::Matcher;

use stocksnap_market_data::{FmpProvider, MarketDataError};

const API_KEY: &str = "test-key";

fn key_matcher() -> Matcher {
    Matcher::UrlEncoded("apikey".into(), API_KEY.into())
}

#[tokio::test]
async fn test_missing_api_key_fails_without_network() {
    // No server at all: the credential check fires first.
    let provider = FmpProvider::with_base_url("http://127.0.0.1:9", None);
    let err = provider.fetch_company("ACME").await.unwrap_err();
    assert!(matches!(err, MarketDataError::MissingApiKey { ref provider } if provider == "FMP"));
}

#[tokio::test]
async fn test_fetch_company_happy_path() {
    let mut server = mockito::Server::new_async().await;
    let profile = server
        .mock("GET", "/profile/ACME")
        .match_query(key_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"symbol":"ACME","companyName":"Acme Corp","price":50.0,"mktCap":1000000000,"cik":"0000123456"}]"#,
        )
        .create_async()
        .await;
    let ratios = server
        .mock("GET", "/ratios-ttm/ACME")
        .match_query(key_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"priceEarningsRatioTTM":17.2,"grossProfitMarginTTM":0.55,"operatingProfitMarginTTM":0.18,"returnOnEquityTTM":0.21,"debtEquityRatioTTM":0.4}]"#,
        )
        .create_async()
        .await;
    let growth = server
        .mock("GET", "/financial-growth/ACME")
        .match_query(key_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"revenueGrowthTTM":0.25,"epsgrowthTTM":0.3}]"#)
        .create_async()
        .await;

    let provider = FmpProvider::with_base_url(server.url(), Some(API_KEY.to_string()));
    let info = provider.fetch_company("ACME").await.unwrap();

    profile.assert_async().await;
    ratios.assert_async().await;
    growth.assert_async().await;

    assert_eq!(info.company_name.as_deref(), Some("Acme Corp"));
    assert_eq!(info.price, Some(50.0));
    assert_eq!(info.market_cap, Some(1_000_000_000.0));
    assert_eq!(info.price_earnings_ratio, Some(17.2));
    assert_eq!(info.operating_margin, Some(0.18));
    assert_eq!(info.revenue_growth, Some(0.25));
    assert_eq!(info.eps_growth, Some(0.3));
    assert_eq!(info.return_on_equity, Some(0.21));
    assert_eq!(info.debt_to_equity, Some(0.4));
    assert_eq!(info.cik.as_deref(), Some("0000123456"));
}

#[tokio::test]
async fn test_profile_failure_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/profile/ACME")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let provider = FmpProvider::with_base_url(server.url(), Some(API_KEY.to_string()));
    let err = provider.fetch_company("ACME").await.unwrap_err();

    match err {
        MarketDataError::UpstreamFailed { provider, message } => {
            assert_eq!(provider, "FMP");
            assert!(message.contains("profile"), "message: {}", message);
        }
        other => panic!("expected UpstreamFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ratios_and_growth_failures_are_absorbed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/profile/ACME")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"companyName":"Acme Corp","price":50.0,"mktCap":1000000000}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/ratios-ttm/ACME")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/financial-growth/ACME")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let provider = FmpProvider::with_base_url(server.url(), Some(API_KEY.to_string()));
    let info = provider.fetch_company("ACME").await.unwrap();

    // Profile fields intact, degraded sub-requests leave their fields out.
    assert_eq!(info.company_name.as_deref(), Some("Acme Corp"));
    assert_eq!(info.price, Some(50.0));
    assert_eq!(info.operating_margin, None);
    assert_eq!(info.debt_to_equity, None);
    assert_eq!(info.revenue_growth, None);
    assert_eq!(info.eps_growth, None);
}

#[tokio::test]
async fn test_requests_carry_api_key_query_parameter() {
    let mut server = mockito::Server::new_async().await;
    // Strict key matchers: a request without the credential matches no
    // mock and yields 501, which would fail the fetch.
    let profile = server
        .mock("GET", "/profile/ACME")
        .match_query(key_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"companyName":"Acme Corp"}]"#)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/ratios-ttm/ACME")
        .match_query(key_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("GET", "/financial-growth/ACME")
        .match_query(key_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let provider = FmpProvider::with_base_url(server.url(), Some(API_KEY.to_string()));
    let info = provider.fetch_company("ACME").await.unwrap();

    profile.assert_async().await;
    assert_eq!(info.company_name.as_deref(), Some("Acme Corp"));
}
