use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, Method},
    Router,
};
use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::{load_s3_client, AppConfig, S3Config},
    database,
    error::Result,
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3_client: S3Client,
    pub storage: S3Config,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let s3_client = load_s3_client(&config.storage).await?;

    let state = AppState {
        db: pool,
        s3_client,
        storage: config.storage.clone(),
    };

    // The admin frontend is served from arbitrary origins, so the original
    // wide-open CORS policy is kept. X-Admin-Token is allowed through but not
    // validated anywhere; see DESIGN.md.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            http::header::CONTENT_TYPE,
            HeaderName::from_static("x-admin-token"),
        ])
        .max_age(Duration::from_secs(86_400));

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
