use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if params.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        if params.quantity < 0 {
            return Err(ProductError::QuantityNegative);
        }

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated_product = Product::from_repository(
            existing.id,
            params.name,
            params.price,
            params.quantity,
            params.description,
            existing.created_at,
            chrono::Utc::now(),
        );

        // The row may vanish between the existence check and the write
        self.repository
            .update(&updated_product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
