use sqlx::PgPool;

use crate::{
    error::Result,
    models::{ValidatedVideoUpdate, Video},
};

pub async fn list_published(pool: &PgPool) -> Result<Vec<Video>> {
    let videos = sqlx::query_as::<_, Video>(
        "SELECT * FROM videos WHERE is_published = true ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(videos)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Video>> {
    let video = sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(video)
}

pub async fn insert(
    pool: &PgPool,
    title: &str,
    description: Option<&str>,
    video_url: &str,
    thumbnail_url: Option<&str>,
) -> Result<Video> {
    let video = sqlx::query_as::<_, Video>(
        r#"
        INSERT INTO videos (title, description, video_url, thumbnail_url)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(video_url)
    .bind(thumbnail_url)
    .fetch_one(pool)
    .await?;

    Ok(video)
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    video: &ValidatedVideoUpdate,
) -> Result<Option<Video>> {
    let updated = sqlx::query_as::<_, Video>(
        r#"
        UPDATE videos
        SET title = $1, description = $2, video_url = $3, thumbnail_url = $4,
            is_published = $5, updated_at = CURRENT_TIMESTAMP
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&video.title)
    .bind(&video.description)
    .bind(&video.video_url)
    .bind(&video.thumbnail_url)
    .bind(video.is_published)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<i32>> {
    let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM videos WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(deleted)
}
