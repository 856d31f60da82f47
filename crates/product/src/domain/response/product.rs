use crate::model::{Category, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Option<Category>,
    pub amount: Option<i32>,
}

// model to response
impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            category: value.category,
            amount: value.amount,
        }
    }
}
