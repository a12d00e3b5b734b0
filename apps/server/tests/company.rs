//! End-to-end tests for GET /company/{ticker} against mock upstreams.

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use mockito::Matcher;
use serde_json::Value;
use tower::ServiceExt;

use stocksnap_server::{api::app_router, build_state, config::Config};

fn test_config(yahoo_url: String, fmp_url: String, fmp_key: Option<String>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        fmp_api_key: fmp_key,
        yahoo_base_url: Some(yahoo_url),
        fmp_base_url: Some(fmp_url),
        // Unroutable SEC host: filings degrade to absent.
        sec_base_url: Some("http://127.0.0.1:9".to_string()),
        retry_max_attempts: 2,
        retry_base_delay: Duration::from_millis(1),
    }
}

async fn get_company(config: &Config, ticker: &str) -> (u16, Value) {
    let state = build_state(config);
    let app = app_router(state, config);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/company/{}", ticker))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn company_snapshot_from_primary() {
    let mut yahoo = mockito::Server::new_async().await;
    yahoo
        .mock("GET", "/v10/finance/quoteSummary/ACME")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "quoteSummary": {
                    "result": [{
                        "price": {"longName": "Acme Corp", "regularMarketPrice": {"raw": 49.5}},
                        "summaryDetail": {"forwardPE": {"raw": 15.0}},
                        "financialData": {
                            "currentPrice": {"raw": 50.0},
                            "operatingMargins": {"raw": 0.18},
                            "revenueGrowth": {"raw": 0.25},
                            "earningsGrowth": {"raw": 0.22},
                            "returnOnEquity": {"raw": 0.21},
                            "debtToEquity": {"raw": 0.3}
                        },
                        "defaultKeyStatistics": {"pegRatio": {"raw": 0.9}}
                    }]
                }
            }"#,
        )
        .create_async()
        .await;

    let config = test_config(yahoo.url(), "http://127.0.0.1:9".to_string(), None);
    let (status, body) = get_company(&config, "acme").await;

    assert_eq!(status, 200);
    assert_eq!(body["ticker"], "ACME");
    assert_eq!(body["name"], "Acme Corp");
    assert_eq!(body["price"], 50.0);
    assert_eq!(body["metrics"]["pe_fwd"], 15.0);
    assert_eq!(body["metrics"]["peg_fwd"], 0.9);
    assert_eq!(body["metrics"]["op_margin"], 0.18);
    assert_eq!(body["composite_score"], 100);
    assert_eq!(body["stars"], 5);
    assert_eq!(body["stars_text"], "★★★★★");
    assert_eq!(body["filings"]["latest_10q_or_10k"], Value::Null);
    assert!(body["notes"].as_str().unwrap().contains("Yahoo primary"));
}

#[tokio::test]
async fn rate_limited_primary_without_fallback_key_returns_503() {
    let mut yahoo = mockito::Server::new_async().await;
    yahoo
        .mock("GET", "/v10/finance/quoteSummary/ACME")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("Too Many Requests")
        .expect(2)
        .create_async()
        .await;

    let config = test_config(yahoo.url(), "http://127.0.0.1:9".to_string(), None);
    let (status, body) = get_company(&config, "ACME").await;

    assert_eq!(status, 503);
    assert_eq!(body["code"], 503);
    assert!(body["message"].as_str().unwrap().contains("FMP"));
}

#[tokio::test]
async fn both_providers_failing_returns_502() {
    let mut yahoo = mockito::Server::new_async().await;
    yahoo
        .mock("GET", "/v10/finance/quoteSummary/ACME")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let mut fmp = mockito::Server::new_async().await;
    fmp.mock("GET", "/profile/ACME")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let config = test_config(yahoo.url(), fmp.url(), Some("test-key".to_string()));
    let (status, body) = get_company(&config, "ACME").await;

    assert_eq!(status, 502);
    assert_eq!(body["code"], 502);
}

#[tokio::test]
async fn fallback_provider_serves_snapshot() {
    let mut yahoo = mockito::Server::new_async().await;
    yahoo
        .mock("GET", "/v10/finance/quoteSummary/ACME")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let mut fmp = mockito::Server::new_async().await;
    fmp.mock("GET", "/profile/ACME")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"companyName":"Acme Corp","price":48.0,"mktCap":900000000}]"#)
        .create_async()
        .await;
    fmp.mock("GET", "/ratios-ttm/ACME")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    fmp.mock("GET", "/financial-growth/ACME")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let config = test_config(yahoo.url(), fmp.url(), Some("test-key".to_string()));
    let (status, body) = get_company(&config, "ACME").await;

    assert_eq!(status, 200);
    assert_eq!(body["name"], "Acme Corp");
    assert_eq!(body["price"], 48.0);
    assert_eq!(body["metrics"]["peg_fwd"], Value::Null);
    assert!(body["notes"].as_str().unwrap().contains("FMP fallback"));
}
