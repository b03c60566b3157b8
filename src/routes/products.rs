use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    error::{AppError, Result},
    models::ProductRequest,
    queries::product_queries,
    AppState,
};

use super::IdParams;

pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Response> {
    let response = match params.id {
        Some(id) => {
            let product = product_queries::find_by_id(&state.db, id)
                .await?
                .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
            Json(product).into_response()
        }
        // Unlike news and videos, the catalog list is unfiltered; the
        // storefront greys out unavailable items itself.
        None => Json(product_queries::list_all(&state.db).await?).into_response(),
    };

    Ok(response)
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Response> {
    let product = payload.validate()?;
    let created = product_queries::insert(&state.db, &product).await?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

pub async fn update_product(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    Json(payload): Json<ProductRequest>,
) -> Result<Response> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Product ID is required".to_string()))?;
    let product = payload.validate()?;

    let updated = product_queries::update(&state.db, id, &product)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(updated).into_response())
}

pub async fn delete_product(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Response> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Product ID is required".to_string()))?;

    let deleted = product_queries::delete(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(json!({ "success": true, "id": deleted })).into_response())
}
