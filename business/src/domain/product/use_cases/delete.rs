use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns a human-readable confirmation of the removal.
    async fn execute(&self, params: DeleteProductParams) -> Result<String, ProductError>;
}
