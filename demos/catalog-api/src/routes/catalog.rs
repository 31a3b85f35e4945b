use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/catalog
///
/// Quick access list for the home screen, with category badge attributes.
pub async fn quick_access(State(state): State<Arc<AppState>>) -> Json<Value> {
    let products: Vec<Value> = state
        .sdk
        .sdk()
        .products()
        .quick_access()
        .into_iter()
        .map(|p| {
            json!({
                "barcode": p.barcode,
                "name": p.name,
                "brand": p.brand,
                "category": p.category,
                "categoryLabel": p.category.label(),
                "categoryClasses": p.category.color_classes(),
                "categoryIcon": p.category.icon(),
            })
        })
        .collect();

    let count = products.len();
    Json(json!({ "data": products, "count": count }))
}

/// GET /api/catalog/search?q=whole
///
/// Case-insensitive substring search over product names and brands. A
/// missing or empty `q` yields an empty result list.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Value> {
    let query = params.q.unwrap_or_default();
    let results = state.sdk.sdk().products().search(&query);

    let count = results.len();
    Json(json!({ "data": results, "count": count }))
}

/// GET /api/catalog/:barcode
///
/// Full product record for a barcode.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(barcode): Path<String>,
) -> Result<Json<Value>, AppError> {
    match state.sdk.sdk().products().get(&barcode) {
        Some(p) => Ok(Json(json!({ "data": p }))),
        None => Err(AppError::not_found(format!(
            "No product with barcode '{barcode}'"
        ))),
    }
}
