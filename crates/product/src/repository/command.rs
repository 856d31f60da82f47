use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn insert(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, description, price, category, amount)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, category, amount
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category)
        .bind(product.amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {:?} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update(&self, id: i64, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                category = $5,
                amount = $6
            WHERE id = $1
            RETURNING id, name, description, price, category, amount
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category)
        .bind(product.amount)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        match result {
            Some(product) => {
                info!("🔄 Updated product ID {id}");
                Ok(product)
            }
            None => {
                error!("❌ Product ID {id} not found for update");
                Err(RepositoryError::NotFound)
            }
        }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn save(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        match product.id {
            None => self.insert(product).await,
            Some(id) => self.update(id, product).await,
        }
    }
}
