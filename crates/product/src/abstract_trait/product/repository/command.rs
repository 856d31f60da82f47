use crate::model::Product as ProductModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Inserts when `product.id` is `None`, otherwise updates the row with that id.
    async fn save(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError>;
}
