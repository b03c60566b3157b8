use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    error::{AppError, Result},
    models::NewsRequest,
    queries::news_queries,
    AppState,
};

use super::IdParams;

pub async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Response> {
    fetch(&state, params.id).await
}

pub async fn create_news(
    State(state): State<AppState>,
    Json(payload): Json<NewsRequest>,
) -> Result<Response> {
    create(&state, payload).await
}

pub async fn update_news(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    Json(payload): Json<NewsRequest>,
) -> Result<Response> {
    update(&state, params.id, payload).await
}

pub async fn delete_news(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Response> {
    remove(&state, params.id).await
}

// The functions below also back the /content dispatcher.

pub(super) async fn fetch(state: &AppState, id: Option<i32>) -> Result<Response> {
    let response = match id {
        Some(id) => {
            // Fetched by id, unpublished items are visible too.
            let item = news_queries::find_by_id(&state.db, id)
                .await?
                .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;
            Json(item).into_response()
        }
        None => Json(news_queries::list_published(&state.db).await?).into_response(),
    };

    Ok(response)
}

pub(super) async fn create(state: &AppState, payload: NewsRequest) -> Result<Response> {
    let news = payload.validate()?;
    let created = news_queries::insert(&state.db, &news).await?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

pub(super) async fn update(
    state: &AppState,
    id: Option<i32>,
    payload: NewsRequest,
) -> Result<Response> {
    let id = id.ok_or_else(|| AppError::BadRequest("News ID is required".to_string()))?;
    let news = payload.validate()?;

    let updated = news_queries::update(&state.db, id, &news)
        .await?
        .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

    Ok(Json(updated).into_response())
}

pub(super) async fn remove(state: &AppState, id: Option<i32>) -> Result<Response> {
    let id = id.ok_or_else(|| AppError::BadRequest("News ID is required".to_string()))?;

    let deleted = news_queries::delete(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

    Ok(Json(json!({ "success": true, "id": deleted })).into_response())
}
