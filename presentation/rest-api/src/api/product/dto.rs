use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price (cannot be negative)
    pub price: f64,
    /// Units in stock (cannot be negative)
    pub quantity: i32,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price (cannot be negative)
    pub price: f64,
    /// Units in stock (cannot be negative)
    pub quantity: i32,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Confirmation returned after a successful deletion.
#[derive(Debug, Clone, Object)]
pub struct DeleteConfirmationResponse {
    /// Human-readable confirmation message
    pub message: String,
}
