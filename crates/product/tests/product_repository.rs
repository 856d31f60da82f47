//! Runs against a live Postgres only when `DATABASE_URL` is set.

use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::PageRequest,
    model::{Category, Product},
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
};
use rust_decimal::Decimal;
use shared::{
    config::{ConnectionManager, ConnectionPool},
    errors::RepositoryError,
};

async fn pool() -> Option<ConnectionPool> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping repository test");
            return None;
        }
    };

    let pool = ConnectionManager::new_pool(&url, 2).await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    Some(pool)
}

fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}

fn product(name: String) -> Product {
    Product {
        id: None,
        name,
        description: Some("repository test".into()),
        price: Decimal::new(4999, 2),
        category: Some(Category::Audio),
        amount: Some(2),
    }
}

#[tokio::test]
async fn save_inserts_then_updates() {
    let Some(pool) = pool().await else { return };
    let command = ProductCommandRepository::new(pool.clone());
    let query = ProductQueryRepository::new(pool);

    let inserted = command.save(&product(unique_name("headphones"))).await.unwrap();
    let id = inserted.id.expect("storage assigns an id");
    assert_eq!(inserted.price, Decimal::new(4999, 2));
    assert_eq!(inserted.category, Some(Category::Audio));

    let renamed = Product {
        name: unique_name("headphones-v2"),
        amount: Some(0),
        ..inserted.clone()
    };
    let updated = command.save(&renamed).await.unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.amount, Some(0));

    let found = query.find_by_id(id).await.unwrap();
    assert_eq!(found, Some(updated));
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let Some(pool) = pool().await else { return };
    let command = ProductCommandRepository::new(pool);

    let ghost = Product {
        id: Some(i64::MAX),
        ..product(unique_name("ghost"))
    };
    let err = command.save(&ghost).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn duplicate_name_violates_unique_constraint() {
    let Some(pool) = pool().await else { return };
    let command = ProductCommandRepository::new(pool);

    let name = unique_name("speaker");
    command.save(&product(name.clone())).await.unwrap();
    let err = command.save(&product(name)).await.unwrap_err();

    assert!(matches!(err, RepositoryError::AlreadyExists(_)));
}

#[tokio::test]
async fn find_all_orders_by_id_and_counts() {
    let Some(pool) = pool().await else { return };
    let command = ProductCommandRepository::new(pool.clone());
    let query = ProductQueryRepository::new(pool);

    let first = command.save(&product(unique_name("cable-a"))).await.unwrap();
    let second = command.save(&product(unique_name("cable-b"))).await.unwrap();

    let (rows, total) = query
        .find_all(&PageRequest { page: 0, size: 1000 })
        .await
        .unwrap();

    assert!(total >= 2);
    let ids: Vec<i64> = rows.iter().filter_map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    let pos_first = ids.iter().position(|id| Some(*id) == first.id);
    let pos_second = ids.iter().position(|id| Some(*id) == second.id);
    if let (Some(a), Some(b)) = (pos_first, pos_second) {
        assert!(a < b);
    }
}
