use crate::domain::{
    requests::FindAllProducts,
    response::{PageResponse, ProductResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<PageResponse<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError>;
}
