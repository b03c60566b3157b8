use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::NaiveDateTime;

use crate::error::{AppError, Result};

use super::{default_true, non_empty};

/// Catalog product. JSON keys follow the wire format the storefront consumes:
/// `price` carries the display string, `priceNum` the numeric value.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "price")]
    pub price_text: String,
    #[serde(rename = "priceNum")]
    pub price_num: Decimal,
    pub category: String,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    #[serde(rename = "available")]
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body for POST and PUT on `/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_text: String,
    #[serde(default)]
    pub price_num: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub struct ValidatedProduct {
    pub name: String,
    pub description: Option<String>,
    pub price_text: String,
    pub price_num: Decimal,
    pub category: String,
    pub image_url: Option<String>,
    pub is_available: bool,
}

impl ProductRequest {
    pub fn validate(self) -> Result<ValidatedProduct> {
        let name = self.name.trim().to_string();
        let price_text = self.price_text.trim().to_string();
        let category = self.category.trim().to_string();

        if name.is_empty() || price_text.is_empty() || category.is_empty() {
            return Err(AppError::BadRequest(
                "Name, price_text and category are required".to_string(),
            ));
        }

        Ok(ValidatedProduct {
            name,
            description: non_empty(&self.description),
            price_text,
            price_num: self.price_num,
            category,
            image_url: non_empty(&self.image_url),
            is_available: self.is_available,
        })
    }
}

/// One entry of `data/seed_products.json`, the versioned dataset the reseed
/// endpoint loads.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub description: String,
    pub price_text: String,
    pub price_num: Decimal,
    pub category: String,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::chrono::NaiveDate;

    #[test]
    fn serializes_with_storefront_keys() {
        let product = Product {
            id: 7,
            name: "Ваза из осины №111".to_string(),
            description: None,
            price_text: "2 500 ₽".to_string(),
            price_num: Decimal::from(2500),
            category: "Вазы".to_string(),
            image_url: Some("https://cdn.example/v.jpg".to_string()),
            is_available: true,
            created_at: NaiveDate::from_ymd_opt(2024, 10, 19)
                .unwrap()
                .and_hms_opt(10, 13, 44)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2024, 10, 19)
                .unwrap()
                .and_hms_opt(10, 13, 44)
                .unwrap(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "2 500 ₽");
        assert_eq!(json["priceNum"], "2500");
        assert_eq!(json["image"], "https://cdn.example/v.jpg");
        assert_eq!(json["available"], true);
        assert!(json.get("price_text").is_none());
    }

    #[test]
    fn validate_requires_name_price_category() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"name": "Ваза", "price_text": "100 ₽"}"#).unwrap();

        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn validate_defaults_availability() {
        let req: ProductRequest = serde_json::from_str(
            r#"{"name": "Стул", "price_text": "100 ₽", "category": "Мебель", "description": " "}"#,
        )
        .unwrap();

        let product = req.validate().unwrap();
        assert!(product.is_available);
        assert_eq!(product.description, None);
        assert_eq!(product.price_num, Decimal::ZERO);
    }
}
