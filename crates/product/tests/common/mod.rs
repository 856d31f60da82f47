#![allow(dead_code)]

use async_trait::async_trait;
use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::{CreateProductRequest, PageRequest},
    model::{Category, Product},
    state::AppState,
};
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::sync::{Arc, Mutex};

/// Table stand-in with a serial id and a unique name index.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        let name_taken = rows
            .iter()
            .any(|row| row.name == product.name && row.id != product.id);
        if name_taken {
            return Err(RepositoryError::AlreadyExists("products_name_key".into()));
        }

        match product.id {
            None => {
                let id = rows.iter().filter_map(|row| row.id).max().unwrap_or(0) + 1;
                let stored = Product {
                    id: Some(id),
                    ..product.clone()
                };
                rows.push(stored.clone());
                Ok(stored)
            }
            Some(id) => {
                let row = rows
                    .iter_mut()
                    .find(|row| row.id == Some(id))
                    .ok_or(RepositoryError::NotFound)?;
                *row = product.clone();
                Ok(row.clone())
            }
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self, req: &PageRequest) -> Result<(Vec<Product>, i64), RepositoryError> {
        let rows = self.rows.lock().unwrap();
        let page = rows
            .iter()
            .skip(req.offset() as usize)
            .take(req.size as usize)
            .cloned()
            .collect();

        Ok((page, rows.len() as i64))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id == Some(id)).cloned())
    }
}

/// Repository whose every call fails like a dropped connection.
pub struct FailingProductRepository;

#[async_trait]
impl ProductCommandRepositoryTrait for FailingProductRepository {
    async fn save(&self, _product: &Product) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for FailingProductRepository {
    async fn find_all(&self, _req: &PageRequest) -> Result<(Vec<Product>, i64), RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

pub fn in_memory_state() -> (AppState, Arc<InMemoryProductRepository>) {
    let repo = InMemoryProductRepository::new();
    let state = AppState::with_repositories(repo.clone(), repo.clone());
    (state, repo)
}

pub fn failing_state() -> AppState {
    let repo = Arc::new(FailingProductRepository);
    AppState::with_repositories(repo.clone(), repo)
}

pub fn phone_request(name: &str) -> CreateProductRequest {
    CreateProductRequest {
        name: Some(name.to_string()),
        description: Some("6.1 inch OLED".to_string()),
        price: Some(Decimal::new(99999, 2)),
        category: Some(Category::Smartphones),
        amount: Some(10),
    }
}
