use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use stocksnap_core::Snapshot;

use crate::{error::ApiResult, main_lib::AppState};

/// GET /company/{ticker}
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> ApiResult<Json<Snapshot>> {
    let snapshot = state.snapshot_service.get_snapshot(&ticker).await?;
    Ok(Json(snapshot))
}
