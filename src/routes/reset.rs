use axum::{extract::State, Json};
use serde_json::json;

use crate::{error::Result, queries::product_queries, AppState};

/// Wipes the products table and reloads the seed catalog. Destructive; there
/// is no confirmation step and no backup of prior rows.
pub async fn reset_products(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let count = product_queries::reset_catalog(&state.db).await?;

    tracing::info!("Product catalog reseeded with {} rows", count);

    Ok(Json(json!({
        "success": true,
        "message": format!("Catalog reseeded with {} products", count),
        "count": count,
    })))
}
