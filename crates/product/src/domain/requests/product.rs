use crate::model::{Category, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

const PRICE_MAX_SCALE: u32 = 2;
const PRICE_MAX_INTEGER_DIGITS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindAllProducts {
    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub page: i64,

    #[serde(default = "default_size")]
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

/// Offset window handed to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

impl From<&FindAllProducts> for PageRequest {
    fn from(value: &FindAllProducts) -> Self {
        Self {
            page: value.page,
            size: value.size,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "must not be blank"),
        custom(function = "validate_not_blank"),
        length(max = 200, message = "size must be between 0 and 200")
    )]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "size must be between 0 and 500"))]
    pub description: Option<String>,

    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[validate(required(message = "must not be null"), custom(function = "validate_price"))]
    pub price: Option<Decimal>,

    pub category: Option<Category>,

    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub amount: Option<i32>,
}

impl CreateProductRequest {
    /// Builds an entity that has not been stored yet. Callers validate first;
    /// a missing name or price here becomes an empty name or zero price that
    /// storage rejects.
    pub fn to_entity(&self) -> Product {
        Product {
            id: None,
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone(),
            price: self.price.unwrap_or_default(),
            category: self.category,
            amount: self.amount,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::from("must not be blank")));
    }
    Ok(())
}

fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || value.is_zero() {
        return Err(ValidationError::new("positive").with_message(Cow::from("must be greater than 0")));
    }

    let normalized = value.normalize();
    let integer_digits = normalized.trunc().abs().to_string().len();

    if normalized.scale() > PRICE_MAX_SCALE || integer_digits > PRICE_MAX_INTEGER_DIGITS {
        return Err(ValidationError::new("digits").with_message(Cow::from(
            "numeric value out of bounds (<8 digits>.<2 digits> expected)",
        )));
    }

    Ok(())
}
