use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::PageRequest, model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &PageRequest,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching products | Page: {}, Size: {}",
            req.page, req.size
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, category, amount
            FROM products
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(req.size)
        .bind(req.offset())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} products (total: {total})", products.len());
        Ok((products, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, category, amount
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product ID {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        match &result {
            Some(_) => info!("✅ Found product with ID: {id}"),
            None => info!("⚠️ Product with ID {id} not found"),
        }

        Ok(result)
    }
}
