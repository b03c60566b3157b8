use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewsItem, ValidatedNews},
};

pub async fn list_published(pool: &PgPool) -> Result<Vec<NewsItem>> {
    let news = sqlx::query_as::<_, NewsItem>(
        "SELECT * FROM news WHERE is_published = true ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(news)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<NewsItem>> {
    let item = sqlx::query_as::<_, NewsItem>("SELECT * FROM news WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(item)
}

pub async fn insert(pool: &PgPool, news: &ValidatedNews) -> Result<NewsItem> {
    let item = sqlx::query_as::<_, NewsItem>(
        r#"
        INSERT INTO news (title, content, image_url)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&news.title)
    .bind(&news.content)
    .bind(&news.image_url)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

pub async fn update(pool: &PgPool, id: i32, news: &ValidatedNews) -> Result<Option<NewsItem>> {
    let item = sqlx::query_as::<_, NewsItem>(
        r#"
        UPDATE news
        SET title = $1, content = $2, image_url = $3, is_published = $4,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&news.title)
    .bind(&news.content)
    .bind(&news.image_url)
    .bind(news.is_published)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<i32>> {
    let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM news WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(deleted)
}
