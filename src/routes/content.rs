use axum::{
    extract::{Query, State},
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    AppState,
};

use super::{news, videos};

/// Single entry point for the admin frontend: `?type=news` or `?type=videos`
/// selects the entity, then the shared per-entity functions do the work.
#[derive(Debug, Deserialize)]
pub(super) struct ContentParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    News,
    Videos,
}

fn kind_of(params: &ContentParams) -> Result<ContentKind> {
    match params.kind.as_deref().unwrap_or("news") {
        "news" => Ok(ContentKind::News),
        "videos" => Ok(ContentKind::Videos),
        _ => Err(AppError::BadRequest(
            "Invalid type parameter. Use ?type=news or ?type=videos".to_string(),
        )),
    }
}

fn parse_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}

pub async fn get_content(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
) -> Result<Response> {
    match kind_of(&params)? {
        ContentKind::News => news::fetch(&state, params.id).await,
        ContentKind::Videos => videos::fetch(&state, params.id).await,
    }
}

pub async fn create_content(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response> {
    match kind_of(&params)? {
        ContentKind::News => news::create(&state, parse_body(body)?).await,
        ContentKind::Videos => videos::create(&state, parse_body(body)?).await,
    }
}

pub async fn update_content(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response> {
    match kind_of(&params)? {
        ContentKind::News => news::update(&state, params.id, parse_body(body)?).await,
        ContentKind::Videos => videos::update(&state, params.id, parse_body(body)?).await,
    }
}

pub async fn delete_content(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
) -> Result<Response> {
    match kind_of(&params)? {
        ContentKind::News => news::remove(&state, params.id).await,
        ContentKind::Videos => videos::remove(&state, params.id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_to_news() {
        let params = ContentParams {
            kind: None,
            id: None,
        };
        assert_eq!(kind_of(&params).unwrap(), ContentKind::News);
    }

    #[test]
    fn kind_rejects_unknown_type() {
        let params = ContentParams {
            kind: Some("pages".to_string()),
            id: None,
        };

        match kind_of(&params) {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "Invalid type parameter. Use ?type=news or ?type=videos")
            }
            other => panic!("expected BadRequest, got {:?}", other.map(|_| ())),
        }
    }
}
