use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{CreateVideoRequest, UpdateVideoRequest, VideoSource},
    queries::video_queries,
    services::storage_service,
    AppState,
};

use super::IdParams;

pub async fn get_videos(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Response> {
    fetch(&state, params.id).await
}

pub async fn create_video(
    State(state): State<AppState>,
    Json(payload): Json<CreateVideoRequest>,
) -> Result<Response> {
    create(&state, payload).await
}

pub async fn update_video(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    Json(payload): Json<UpdateVideoRequest>,
) -> Result<Response> {
    update(&state, params.id, payload).await
}

pub async fn delete_video(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Response> {
    remove(&state, params.id).await
}

// The functions below also back the /content dispatcher.

pub(super) async fn fetch(state: &AppState, id: Option<i32>) -> Result<Response> {
    let response = match id {
        Some(id) => {
            let video = video_queries::find_by_id(&state.db, id)
                .await?
                .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;
            Json(video).into_response()
        }
        None => Json(video_queries::list_published(&state.db).await?).into_response(),
    };

    Ok(response)
}

/// Creates a video row, pushing an inline payload (and optional thumbnail) to
/// object storage first. If the insert fails after the upload succeeded, the
/// stored objects are not removed.
pub(super) async fn create(state: &AppState, payload: CreateVideoRequest) -> Result<Response> {
    let video = payload.validate()?;

    let asset_id = Uuid::new_v4();

    let video_url = match &video.source {
        VideoSource::Upload(data) => {
            let bytes = storage_service::decode_payload(data)?;
            let key = storage_service::video_key(asset_id);

            storage_service::put_object(
                &state.s3_client,
                &state.storage.bucket,
                &key,
                bytes,
                "video/mp4",
            )
            .await?;

            state.storage.public_url(&key)
        }
        VideoSource::Url(url) => url.clone(),
    };

    let thumbnail_url = match &video.thumbnail_data {
        Some(data) => {
            let bytes = storage_service::decode_payload(data)?;
            let key = storage_service::thumbnail_key(asset_id);

            storage_service::put_object(
                &state.s3_client,
                &state.storage.bucket,
                &key,
                bytes,
                "image/jpeg",
            )
            .await?;

            Some(state.storage.public_url(&key))
        }
        None => None,
    };

    let created = video_queries::insert(
        &state.db,
        &video.title,
        video.description.as_deref(),
        &video_url,
        thumbnail_url.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

pub(super) async fn update(
    state: &AppState,
    id: Option<i32>,
    payload: UpdateVideoRequest,
) -> Result<Response> {
    let id = id.ok_or_else(|| AppError::BadRequest("Video ID is required".to_string()))?;
    let video = payload.validate()?;

    let updated = video_queries::update(&state.db, id, &video)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    Ok(Json(updated).into_response())
}

pub(super) async fn remove(state: &AppState, id: Option<i32>) -> Result<Response> {
    let id = id.ok_or_else(|| AppError::BadRequest("Video ID is required".to_string()))?;

    let deleted = video_queries::delete(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    Ok(Json(json!({ "success": true, "id": deleted })).into_response())
}
