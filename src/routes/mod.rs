mod content;
mod health;
mod news;
mod products;
mod reset;
mod upload;
mod videos;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{error::AppError, AppState};

/// Record ids travel in the query string (`?id=123`), matching the contract
/// the admin frontend already speaks.
#[derive(Debug, Deserialize)]
pub(crate) struct IdParams {
    pub id: Option<i32>,
}

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/news",
            get(news::get_news)
                .post(news::create_news)
                .put(news::update_news)
                .delete(news::delete_news)
                .fallback(method_not_allowed),
        )
        .route(
            "/videos",
            get(videos::get_videos)
                .post(videos::create_video)
                .put(videos::update_video)
                .delete(videos::delete_video)
                .fallback(method_not_allowed),
        )
        .route(
            "/products",
            get(products::get_products)
                .post(products::create_product)
                .put(products::update_product)
                .delete(products::delete_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/content",
            get(content::get_content)
                .post(content::create_content)
                .put(content::update_content)
                .delete(content::delete_content)
                .fallback(method_not_allowed),
        )
        .route(
            "/reset-products",
            post(reset::reset_products).fallback(method_not_allowed),
        )
        .route(
            "/upload-image",
            post(upload::upload_image).fallback(method_not_allowed),
        )
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
