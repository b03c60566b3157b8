use serde::{Deserialize, Serialize};
use sqlx::types::chrono::NaiveDateTime;

use crate::error::{AppError, Result};

use super::{default_true, non_empty};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub is_published: bool,
}

/// Body for POST on `/videos`. The caller supplies either a ready `video_url`
/// or a base64 `video_data` payload to be pushed to object storage, with an
/// optional base64 thumbnail alongside.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub video_data: String,
    #[serde(default)]
    pub thumbnail_data: String,
}

/// Where the video content comes from. An inline payload wins over a URL when
/// both are present.
#[derive(Debug, Clone)]
pub enum VideoSource {
    Url(String),
    Upload(String),
}

#[derive(Debug, Clone)]
pub struct ValidatedVideoCreate {
    pub title: String,
    pub description: Option<String>,
    pub source: VideoSource,
    pub thumbnail_data: Option<String>,
}

impl CreateVideoRequest {
    pub fn validate(self) -> Result<ValidatedVideoCreate> {
        let title = self.title.trim().to_string();

        let source = match (non_empty(&self.video_data), non_empty(&self.video_url)) {
            (Some(data), _) => Some(VideoSource::Upload(data)),
            (None, Some(url)) => Some(VideoSource::Url(url)),
            (None, None) => None,
        };

        match (title.is_empty(), source) {
            (false, Some(source)) => Ok(ValidatedVideoCreate {
                title,
                description: non_empty(&self.description),
                source,
                thumbnail_data: non_empty(&self.thumbnail_data),
            }),
            _ => Err(AppError::BadRequest(
                "Title and video_data or video_url are required".to_string(),
            )),
        }
    }
}

/// Body for PUT on `/videos`; a full replacement, URLs only.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVideoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

#[derive(Debug, Clone)]
pub struct ValidatedVideoUpdate {
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
}

impl UpdateVideoRequest {
    pub fn validate(self) -> Result<ValidatedVideoUpdate> {
        let title = self.title.trim().to_string();
        let video_url = self.video_url.trim().to_string();

        if title.is_empty() || video_url.is_empty() {
            return Err(AppError::BadRequest(
                "Title and video_url are required".to_string(),
            ));
        }

        Ok(ValidatedVideoUpdate {
            title,
            description: non_empty(&self.description),
            video_url,
            thumbnail_url: non_empty(&self.thumbnail_url),
            is_published: self.is_published,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_url_without_binary() {
        let req: CreateVideoRequest = serde_json::from_str(
            r#"{"title": "Мастер-класс", "video_url": "https://example.com/v.mp4"}"#,
        )
        .unwrap();

        let video = req.validate().unwrap();
        match video.source {
            VideoSource::Url(url) => assert_eq!(url, "https://example.com/v.mp4"),
            VideoSource::Upload(_) => panic!("expected URL source"),
        }
    }

    #[test]
    fn create_prefers_inline_payload() {
        let req: CreateVideoRequest = serde_json::from_str(
            r#"{"title": "t", "video_data": "AAAA", "video_url": "https://example.com/v.mp4"}"#,
        )
        .unwrap();

        assert!(matches!(
            req.validate().unwrap().source,
            VideoSource::Upload(_)
        ));
    }

    #[test]
    fn create_rejects_missing_source() {
        let req: CreateVideoRequest = serde_json::from_str(r#"{"title": "t"}"#).unwrap();

        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn update_requires_url() {
        let req: UpdateVideoRequest =
            serde_json::from_str(r#"{"title": "t", "video_url": " "}"#).unwrap();

        assert!(req.validate().is_err());
    }
}
