use chrono::{DateTime, Utc};

use super::errors::ProductError;

/// A product persisted in the catalog. The identifier is assigned by the
/// repository, never by the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
}

/// A product that has not been persisted yet, so it carries no identifier.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductDraft {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        if props.quantity < 0 {
            return Err(ProductError::QuantityNegative);
        }

        let now = Utc::now();
        Ok(Self {
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            description: props.description,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        price: f64,
        quantity: i32,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
            description,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_draft_when_fields_are_valid() {
        let draft = ProductDraft::new(NewProductProps {
            name: "Pen".to_string(),
            price: 1.50,
            quantity: 10,
            description: Some("Blue ballpoint".to_string()),
        });

        assert!(draft.is_ok());
        let draft = draft.unwrap();
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.created_at, draft.updated_at);
    }

    #[test]
    fn should_reject_draft_when_name_is_blank() {
        let draft = ProductDraft::new(NewProductProps {
            name: "   ".to_string(),
            price: 1.0,
            quantity: 1,
            description: None,
        });

        assert!(matches!(draft.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_draft_when_price_is_negative() {
        let draft = ProductDraft::new(NewProductProps {
            name: "Pen".to_string(),
            price: -0.01,
            quantity: 1,
            description: None,
        });

        assert!(matches!(draft.unwrap_err(), ProductError::PriceNegative));
    }

    #[test]
    fn should_reject_draft_when_quantity_is_negative() {
        let draft = ProductDraft::new(NewProductProps {
            name: "Pen".to_string(),
            price: 1.0,
            quantity: -1,
            description: None,
        });

        assert!(matches!(draft.unwrap_err(), ProductError::QuantityNegative));
    }
}
