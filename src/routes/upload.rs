use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, Result},
    services::storage_service,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UploadImageRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_filename() -> String {
    "image.jpg".to_string()
}

/// Stores a base64 image under `products/` and returns its public CDN URL.
/// No size or content checks beyond base64 validity.
pub async fn upload_image(
    State(state): State<AppState>,
    Json(payload): Json<UploadImageRequest>,
) -> Result<Json<serde_json::Value>> {
    if payload.image.trim().is_empty() {
        return Err(AppError::BadRequest("Image data is required".to_string()));
    }

    let bytes = storage_service::decode_payload(&payload.image)?;
    let key = storage_service::image_key(&payload.filename);
    let content_type = storage_service::content_type_for(&payload.filename);

    storage_service::put_object(&state.s3_client, &state.storage.bucket, &key, bytes, content_type)
        .await?;

    Ok(Json(json!({ "url": state.storage.public_url(&key) })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_defaults_to_jpg() {
        let req: UploadImageRequest = serde_json::from_str(r#"{"image": "aGVsbG8="}"#).unwrap();
        assert_eq!(req.filename, "image.jpg");
    }
}
