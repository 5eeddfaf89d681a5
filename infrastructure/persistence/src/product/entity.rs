use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.quantity,
            self.description,
            self.created_at,
            self.updated_at,
        )
    }
}
