use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use nutriscan_sdk::ScanOutcome;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/scan
///
/// Simulates a barcode scan: waits the configured delay, then returns a
/// random catalog product. Responds 409 while another scan is pending.
pub async fn scan(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    match state.sdk.scan().await? {
        ScanOutcome::Scanned(product) => Ok(Json(json!({ "data": product }))),
        ScanOutcome::Ignored => Err(AppError::conflict("A scan is already in progress")),
    }
}
