use std::time::Duration;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

use stocksnap_server::{api::app_router, build_state, config::Config};

fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        fmp_api_key: None,
        yahoo_base_url: None,
        fmp_base_url: None,
        sec_base_url: None,
        retry_max_attempts: 1,
        retry_base_delay: Duration::from_millis(1),
    }
}

#[tokio::test]
async fn healthz_works() {
    let config = test_config();
    let state = build_state(&config);
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
