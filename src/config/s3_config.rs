use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{config::Credentials, Client as S3Client};

use crate::error::{AppError, Result};

/// Object storage settings. The store is S3-compatible but lives behind a
/// fixed endpoint, and public reads go through a CDN host instead of the
/// bucket itself.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub access_key: String,
    pub secret_key: String,
    pub endpoint: String,
    pub bucket: String,
    pub cdn_host: String,
    pub region: String,
}

impl S3Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            access_key: std::env::var("AWS_ACCESS_KEY_ID")
                .map_err(|_| AppError::ConfigError("AWS_ACCESS_KEY_ID not set".to_string()))?,
            secret_key: std::env::var("AWS_SECRET_ACCESS_KEY")
                .map_err(|_| AppError::ConfigError("AWS_SECRET_ACCESS_KEY not set".to_string()))?,
            endpoint: std::env::var("S3_ENDPOINT")
                .unwrap_or_else(|_| "https://bucket.poehali.dev".to_string()),
            bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "files".to_string()),
            cdn_host: std::env::var("CDN_HOST").unwrap_or_else(|_| "cdn.poehali.dev".to_string()),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        })
    }

    /// Public CDN URL for an uploaded object. The CDN namespaces buckets by
    /// project, keyed on the storage access key.
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}/projects/{}/bucket/{}",
            self.cdn_host, self.access_key, key
        )
    }
}

pub async fn load_s3_client(config: &S3Config) -> Result<S3Client> {
    let credentials = Credentials::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        None,
        None,
        "env-credentials",
    );

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .endpoint_url(&config.endpoint)
        .credentials_provider(credentials)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(true)
        .build();

    let s3_client = S3Client::from_conf(s3_config);

    tracing::info!("S3 client initialized for {}", config.endpoint);

    Ok(s3_client)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> S3Config {
        S3Config {
            access_key: "key123".to_string(),
            secret_key: "secret".to_string(),
            endpoint: "https://bucket.poehali.dev".to_string(),
            bucket: "files".to_string(),
            cdn_host: "cdn.poehali.dev".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn public_url_includes_project_and_key() {
        let url = test_config().public_url("products/abc.jpg");
        assert_eq!(
            url,
            "https://cdn.poehali.dev/projects/key123/bucket/products/abc.jpg"
        );
    }
}
