use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use uuid::Uuid;

use crate::error::{AppError, Result};

pub async fn put_object(
    client: &S3Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: &str,
) -> Result<()> {
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .content_type(content_type)
        .send()
        .await
        .map_err(|e| AppError::StorageError(format!("Failed to upload {}: {}", key, e)))?;

    Ok(())
}

/// Decodes a base64 upload, stripping the `data:...;base64,` header browsers
/// prepend to data URLs.
pub fn decode_payload(data: &str) -> Result<Vec<u8>> {
    let raw = match data.split_once(',') {
        Some((_, rest)) => rest,
        None => data,
    };

    STANDARD
        .decode(raw)
        .map_err(|e| AppError::InternalError(format!("Invalid base64 payload: {}", e)))
}

pub fn video_key(asset_id: Uuid) -> String {
    format!("videos/{}.mp4", asset_id)
}

/// A thumbnail shares its asset id with the video it belongs to.
pub fn thumbnail_key(asset_id: Uuid) -> String {
    format!("videos/thumbnails/{}.jpg", asset_id)
}

/// Object key for a product image, keeping the caller-supplied extension.
pub fn image_key(filename: &str) -> String {
    let ext = filename.rsplit_once('.').map(|(_, e)| e).unwrap_or("jpg");
    format!("products/{}.{}", Uuid::new_v4(), ext)
}

pub fn content_type_for(filename: &str) -> &'static str {
    let ext = filename.rsplit_once('.').map(|(_, e)| e).unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_strips_data_url_header() {
        let decoded = decode_payload("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn decode_accepts_bare_base64() {
        assert_eq!(decode_payload("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_payload("not base64 at all!").is_err());
    }

    #[test]
    fn video_and_thumbnail_keys_share_asset_id() {
        let id = Uuid::new_v4();
        assert_eq!(video_key(id), format!("videos/{}.mp4", id));
        assert_eq!(thumbnail_key(id), format!("videos/thumbnails/{}.jpg", id));
    }

    #[test]
    fn image_key_keeps_extension() {
        let key = image_key("photo.webp");
        assert!(key.starts_with("products/"));
        assert!(key.ends_with(".webp"));
    }

    #[test]
    fn image_key_defaults_to_jpg() {
        assert!(image_key("noextension").ends_with(".jpg"));
    }

    #[test]
    fn content_type_inference() {
        assert_eq!(content_type_for("a.PNG"), "image/png");
        assert_eq!(content_type_for("a.gif"), "image/gif");
        assert_eq!(content_type_for("a.webp"), "image/webp");
        assert_eq!(content_type_for("a.jpg"), "image/jpeg");
        assert_eq!(content_type_for("weird.bin"), "image/jpeg");
        assert_eq!(content_type_for("noext"), "image/jpeg");
    }
}
