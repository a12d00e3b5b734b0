use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use stocksnap_market_data::MarketDataError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::MarketData(e) => match e {
                MarketDataError::RateLimited { .. } => {
                    (StatusCode::TOO_MANY_REQUESTS, e.to_string())
                }
                MarketDataError::MissingApiKey { .. } => {
                    (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
                }
                MarketDataError::UpstreamFailed { .. } | MarketDataError::Network(_) => {
                    (StatusCode::BAD_GATEWAY, e.to_string())
                }
            },
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
