use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;

/// In-memory product store for tests and local development without a
/// database. Ids come from a monotonic counter, so deleted ids are never
/// reused.
pub struct ProductRepositoryInMemory {
    products: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::from_repository(
            id,
            draft.name.clone(),
            draft.price,
            draft.quantity,
            draft.description.clone(),
            draft.created_at,
            draft.updated_at,
        );

        self.products.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        match products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        products.remove(&id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}
