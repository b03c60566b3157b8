use serde::{Deserialize, Serialize};
use sqlx::types::chrono::NaiveDateTime;

use crate::error::{AppError, Result};

use super::{default_true, non_empty};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NewsItem {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub is_published: bool,
}

/// Body for POST and PUT on `/news`. PUT is a full replacement; omitting
/// `is_published` republishes the item.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

#[derive(Debug, Clone)]
pub struct ValidatedNews {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl NewsRequest {
    pub fn validate(self) -> Result<ValidatedNews> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();

        if title.is_empty() || content.is_empty() {
            return Err(AppError::BadRequest(
                "Title and content are required".to_string(),
            ));
        }

        Ok(ValidatedNews {
            title,
            content,
            image_url: non_empty(&self.image_url),
            is_published: self.is_published,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_and_keeps_fields() {
        let req: NewsRequest = serde_json::from_str(
            r#"{"title": "  Выставка  ", "content": "Открытие в субботу", "image_url": ""}"#,
        )
        .unwrap();

        let news = req.validate().unwrap();
        assert_eq!(news.title, "Выставка");
        assert_eq!(news.content, "Открытие в субботу");
        assert_eq!(news.image_url, None);
        assert!(news.is_published);
    }

    #[test]
    fn validate_rejects_whitespace_only_content() {
        let req: NewsRequest =
            serde_json::from_str(r#"{"title": "x", "content": "   "}"#).unwrap();

        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn missing_body_fields_default_to_empty() {
        let req: NewsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }
}
