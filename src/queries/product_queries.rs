use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{Product, SeedProduct, ValidatedProduct},
};

/// Initial catalog dataset for the reseed endpoint, versioned alongside the
/// code instead of living inline in it.
const SEED_PRODUCTS: &str = include_str!("../../data/seed_products.json");

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn insert(pool: &PgPool, product: &ValidatedProduct) -> Result<Product> {
    let created = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, description, price_text, price_num, category, image_url, is_available)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.price_text)
    .bind(product.price_num)
    .bind(&product.category)
    .bind(&product.image_url)
    .bind(product.is_available)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    product: &ValidatedProduct,
) -> Result<Option<Product>> {
    let updated = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = $1, description = $2, price_text = $3, price_num = $4,
            category = $5, image_url = $6, is_available = $7,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.price_text)
    .bind(product.price_num)
    .bind(&product.category)
    .bind(&product.image_url)
    .bind(product.is_available)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<i32>> {
    let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM products WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(deleted)
}

pub fn load_seed_products() -> Result<Vec<SeedProduct>> {
    serde_json::from_str(SEED_PRODUCTS)
        .map_err(|e| AppError::InternalError(format!("Invalid seed data: {}", e)))
}

/// Drops every product row and reloads the seed dataset in one transaction.
/// Destructive and unconditional; returns the resulting row count.
pub async fn reset_catalog(pool: &PgPool) -> Result<i64> {
    let seed = load_seed_products()?;

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM products").execute(&mut *tx).await?;

    for product in &seed {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, price_text, price_num, category, image_url, is_available)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price_text)
        .bind(product.price_num)
        .bind(&product.category)
        .bind(&product.image_url)
        .bind(true)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_file_parses() {
        let seed = load_seed_products().unwrap();
        assert_eq!(seed.len(), 22);
    }

    #[test]
    fn seed_entries_are_complete() {
        for product in load_seed_products().unwrap() {
            assert!(!product.name.trim().is_empty());
            assert!(!product.price_text.trim().is_empty());
            assert!(!product.category.trim().is_empty());
        }
    }
}
