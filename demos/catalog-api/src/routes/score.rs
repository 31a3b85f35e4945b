use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use nutriscan_sdk::{Product, ScoreBreakdown, UserPreferences};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// Score either a catalog product (by barcode) or an inline product record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub barcode: Option<String>,
    pub product: Option<Product>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// POST /api/score
///
/// Body: `{"barcode": "...", "preferences": {...}}` or
/// `{"product": {...}, "preferences": {...}}`.
pub async fn score(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<Value>, AppError> {
    let sdk = state.sdk.sdk();

    let breakdown = match (&req.product, &req.barcode) {
        (Some(product), _) => {
            product.validate()?;
            ScoreBreakdown::compute(product, &req.preferences)
        }
        (None, Some(barcode)) => sdk
            .score_barcode(barcode, &req.preferences)
            .ok_or_else(|| AppError::not_found(format!("No product with barcode '{barcode}'")))?,
        (None, None) => {
            return Err(AppError::bad_request(
                "Request body needs either 'barcode' or 'product'",
            ))
        }
    };

    Ok(Json(json!({
        "score": breakdown.score,
        "display": breakdown.display(),
        "personalized": breakdown.is_personalized(),
        "band": breakdown.band(),
        "barClass": breakdown.band().bar_class(),
        "percent": breakdown.percent_of_max(),
        "breakdown": breakdown,
    })))
}
